//! Codec tuning knobs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RtoError};

/// Parameters for building the per-file local dictionary.
///
/// Missing fields fall back to their defaults when deserialized, so a config
/// file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Shortest `[A-Za-z_]` run considered a candidate word.
    pub min_word_length: usize,
    /// Upper bound on words retained after the frequency sort.
    pub max_local_entries: usize,
    /// A word must occur at least this many times to be tokenized.
    pub min_occurrences: usize,
}

impl CodecConfig {
    pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;
    pub const DEFAULT_MAX_LOCAL_ENTRIES: usize = 200;
    pub const DEFAULT_MIN_OCCURRENCES: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_word_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }

    pub fn with_max_local_entries(mut self, max: usize) -> Self {
        self.max_local_entries = max;
        self
    }

    pub fn with_min_occurrences(mut self, min: usize) -> Self {
        self.min_occurrences = min;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_word_length == 0 {
            return Err(RtoError::InvalidConfig("min_word_length must be at least 1".into()));
        }
        if self.min_occurrences == 0 {
            return Err(RtoError::InvalidConfig("min_occurrences must be at least 1".into()));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "loaded codec config");
        Ok(config)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            min_word_length: Self::DEFAULT_MIN_WORD_LENGTH,
            max_local_entries: Self::DEFAULT_MAX_LOCAL_ENTRIES,
            min_occurrences: Self::DEFAULT_MIN_OCCURRENCES,
        }
    }
}
