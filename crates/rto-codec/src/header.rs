//! Single-line JSON header: `{"v":"1.2","m":{token:word},"ext":tag}` + `\n`.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::bytes::Regex;
use rto_core::{Tier, Token};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::dictionary::LocalDictionary;

pub const FORMAT_VERSION: &str = "1.2";

/// Trailer appended to the body of artifacts written with fuzzing enabled.
static FUZZ_TRAILER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)\n\n\[FUZZ:.*?\]\s*\z").unwrap());

#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("no newline terminating the header")]
    MissingNewline,
    #[error("malformed header: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid local token in header: {0}")]
    InvalidLocalToken(String),
}

/// File metadata preserved alongside the dictionary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtime: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<u32>,
}

impl FileMeta {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.mtime.is_none() && self.mode.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub version: String,
    pub local: LocalDictionary,
    /// Language tag selecting the type table; empty when none.
    pub language: String,
    pub meta: Option<FileMeta>,
    /// Set when the body ends in a `[FUZZ:...]` trailer that is not part of
    /// the original bytes.
    pub fuzzed: bool,
}

/// Wire shape of the header line.
#[derive(Serialize, Deserialize)]
struct RawHeader {
    v: String,
    #[serde(default, alias = "map")]
    m: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    ext: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meta: Option<FileMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    f: Option<Value>,
    #[serde(default, skip_serializing)]
    fuzzed: Option<Value>,
}

/// JSON truthiness, as used by the flag fields.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// Drop a trailing `\n\n[FUZZ:...]` block, plus any whitespace after it.
pub fn strip_fuzz_trailer(body: &[u8]) -> &[u8] {
    match FUZZ_TRAILER.find(body) {
        Some(m) => &body[..m.start()],
        None => body,
    }
}

impl Header {
    pub fn new(local: LocalDictionary, language: impl Into<String>) -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            local,
            language: language.into(),
            meta: None,
            fuzzed: false,
        }
    }

    pub fn with_meta(mut self, meta: FileMeta) -> Self {
        self.meta = (!meta.is_empty()).then_some(meta);
        self
    }

    /// Serialize to one line, newline included.
    pub fn encode(&self) -> Vec<u8> {
        let raw = RawHeader {
            v: self.version.clone(),
            m: self.local.iter().map(|(t, w)| (t.to_string(), w.to_string())).collect(),
            ext: self.language.clone(),
            meta: self.meta.clone(),
            f: self.fuzzed.then(|| Value::from(1)),
            fuzzed: None,
        };
        // Compact JSON escapes control characters, so no raw newline leaks in.
        let mut line = serde_json::to_vec(&raw)
            .unwrap_or_else(|_| format!(r#"{{"v":"{FORMAT_VERSION}","m":{{}}}}"#).into_bytes());
        line.push(b'\n');
        line
    }

    /// Parse a header line (without its newline).
    pub fn parse(line: &[u8]) -> Result<Self, HeaderError> {
        let raw: RawHeader = serde_json::from_slice(line)?;
        let mut local = LocalDictionary::new();
        for (key, word) in raw.m {
            match Token::parse(&key) {
                Some(token) if token.tier == Tier::Local => local.insert(token.index, word),
                _ => return Err(HeaderError::InvalidLocalToken(key)),
            }
        }
        Ok(Self {
            version: raw.v,
            local,
            language: raw.ext,
            meta: raw.meta,
            fuzzed: is_truthy(raw.f.as_ref()) || is_truthy(raw.fuzzed.as_ref()),
        })
    }

    /// Split an artifact into its header and body at the first newline.
    pub fn decode(input: &[u8]) -> Result<(Self, &[u8]), HeaderError> {
        let newline = input
            .iter()
            .position(|&b| b == b'\n')
            .ok_or(HeaderError::MissingNewline)?;
        let header = Self::parse(&input[..newline])?;
        Ok((header, &input[newline + 1..]))
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new(LocalDictionary::new(), "")
    }
}
