//! Token data model: tier prefixes and the index numeral alphabet.
//!
//! Tokens look like `~N` (local), `~*N` (type) or `~^N` (global). Indices
//! below 62 render as one alphabet symbol; anything larger renders as plain
//! decimal digits. `~~` is reserved for a literal tilde.

use std::fmt;

/// Index symbols, in positional order.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const TILDE: u8 = b'~';
pub const GLOBAL_MARKER: u8 = b'^';
pub const TYPE_MARKER: u8 = b'*';

/// Token namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Per-file dictionary carried in the header.
    Local,
    /// Per-language keyword list.
    Type,
    /// Cross-language keyword list.
    Global,
}

impl Tier {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Local => "~",
            Self::Type => "~*",
            Self::Global => "~^",
        }
    }

    /// Tier selected by the byte following a `~`. Anything other than a
    /// marker means the index starts right away.
    pub fn from_marker(byte: u8) -> Self {
        match byte {
            GLOBAL_MARKER => Self::Global,
            TYPE_MARKER => Self::Type,
            _ => Self::Local,
        }
    }

    /// Length of the prefix after the leading tilde.
    pub fn marker_len(&self) -> usize {
        match self {
            Self::Local => 0,
            Self::Type | Self::Global => 1,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Local => "local",
            Self::Type => "type",
            Self::Global => "global",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub tier: Tier,
    pub index: usize,
}

impl Token {
    pub fn new(tier: Tier, index: usize) -> Self {
        Self { tier, index }
    }

    pub fn local(index: usize) -> Self {
        Self::new(Tier::Local, index)
    }

    pub fn type_word(index: usize) -> Self {
        Self::new(Tier::Type, index)
    }

    pub fn global(index: usize) -> Self {
        Self::new(Tier::Global, index)
    }

    /// Parse a complete token string such as `~a`, `~*3` or `~^120`.
    pub fn parse(s: &str) -> Option<Self> {
        let rest = s.as_bytes().strip_prefix(&[TILDE])?;
        let tier = Tier::from_marker(*rest.first()?);
        let literal = &rest[tier.marker_len()..];
        decode_index(literal).map(|index| Self::new(tier, index))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tier.prefix())?;
        f.write_str(&encode_index(self.index))
    }
}

/// Render an index: one alphabet symbol below 62, decimal digits otherwise.
pub fn encode_index(index: usize) -> String {
    match ALPHABET.get(index) {
        Some(&symbol) => char::from(symbol).to_string(),
        None => index.to_string(),
    }
}

/// Inverse of [`encode_index`]. A single character decodes positionally,
/// anything longer must be a decimal integer.
pub fn decode_index(literal: &[u8]) -> Option<usize> {
    match literal {
        [] => None,
        [symbol] => ALPHABET.iter().position(|c| c == symbol),
        digits if digits.iter().all(u8::is_ascii_digit) => {
            std::str::from_utf8(digits).ok()?.parse().ok()
        }
        _ => None,
    }
}

/// Bytes that may appear inside a word or an index literal.
pub fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
