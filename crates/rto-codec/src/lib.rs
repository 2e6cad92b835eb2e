//! Reversible text optimizer: lossless word-token codec.
//!
//! Stages:
//! 1. Extract candidate words (`[A-Za-z_]` runs)
//! 2. Build the local dictionary and classify words into global/type/local tiers
//! 3. Escape tildes and rewrite whole words as tokens
//! 4. Prefix a single-line JSON header
//!
//! Expansion parses the header and resolves tokens in one scan.

pub mod analysis;
pub mod codec;
pub mod dictionary;
pub mod expand;
pub mod extract;
pub mod header;
pub mod substitute;

pub use analysis::{analyze, Analysis, ContentKind, Recommendation};
pub use codec::{compress, compress_with, expand, Codec, CompressionResult};
pub use dictionary::{Classification, LocalDictionary, Substitution};
pub use header::{FileMeta, Header, HeaderError};

#[cfg(test)]
mod tests;
