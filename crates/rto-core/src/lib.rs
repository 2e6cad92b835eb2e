//! Shared data for the reversible text optimizer: dictionary tables, the
//! token model, codec configuration and errors.

pub mod config;
pub mod error;
pub mod tables;
pub mod token;

pub use config::CodecConfig;
pub use error::{Result, RtoError};
pub use tables::{global_words, known_languages, type_words, WordTable};
pub use token::{Tier, Token};
