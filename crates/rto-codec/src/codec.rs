//! Codec facade: compress to `header\nbody`, expand back to the original bytes.

use rto_core::{global_words, type_words, CodecConfig, Tier};

use crate::dictionary::{classify, select_frequent, LocalDictionary};
use crate::expand::{expand_body, Tables};
use crate::header::{strip_fuzz_trailer, FileMeta, Header};
use crate::substitute::{escape_tildes, substitute};

/// Compression output with statistics.
#[derive(Debug, Clone)]
pub struct CompressionResult {
    pub output: Vec<u8>,
    pub original_len: usize,
    pub compressed_len: usize,
    pub header: Header,
    pub global_hits: usize,
    pub type_hits: usize,
    pub local_hits: usize,
}

impl CompressionResult {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.compressed_len as f64 / self.original_len as f64
    }

    /// Percentage saved; negative when the header outweighs the savings.
    pub fn reduction_pct(&self) -> f64 {
        if self.original_len == 0 { return 0.0; }
        (1.0 - self.ratio()) * 100.0
    }
}

/// Stateless codec bound to a configuration. Cheap to clone and safe to
/// share across threads.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    pub config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Compress `text`, selecting the type table by `language`.
    pub fn compress(&self, text: &[u8], language: &str) -> Vec<u8> {
        self.compress_detailed(text, language, None).output
    }

    /// Compress and report what each tier contributed.
    pub fn compress_detailed(
        &self,
        text: &[u8],
        language: &str,
        meta: Option<FileMeta>,
    ) -> CompressionResult {
        let words = select_frequent(text, &self.config);
        let classification = classify(&words, global_words(), type_words(language));

        let escaped = escape_tildes(text);
        let body = substitute(&escaped, &classification.plan);

        let global_hits = classification.count(Tier::Global);
        let type_hits = classification.count(Tier::Type);
        let local_hits = classification.count(Tier::Local);

        let mut header = Header::new(classification.local, language);
        if let Some(meta) = meta {
            header = header.with_meta(meta);
        }
        let mut output = header.encode();
        output.extend_from_slice(&body);

        tracing::debug!(
            language,
            original = text.len(),
            compressed = output.len(),
            global_hits,
            type_hits,
            local_hits,
            "compressed"
        );

        CompressionResult {
            original_len: text.len(),
            compressed_len: output.len(),
            output,
            header,
            global_hits,
            type_hits,
            local_hits,
        }
    }

    /// Reconstruct the original bytes. Never fails; see [`Codec::expand_detailed`].
    pub fn expand(&self, compressed: &[u8]) -> Vec<u8> {
        self.expand_detailed(compressed).1
    }

    /// Expand and return the parsed header, if there was one.
    ///
    /// When the input has no newline or the first line is not a valid header,
    /// the whole input is treated as body with an empty local dictionary and
    /// no type table: global tokens and `~~` still resolve, anything else is
    /// copied through.
    pub fn expand_detailed(&self, compressed: &[u8]) -> (Option<Header>, Vec<u8>) {
        match Header::decode(compressed) {
            Ok((header, mut body)) => {
                if header.fuzzed {
                    tracing::info!("artifact was fuzzed, dropping trailer");
                    body = strip_fuzz_trailer(body);
                }
                let tables = Tables {
                    local: &header.local,
                    types: type_words(&header.language),
                    global: global_words(),
                };
                let output = expand_body(body, &tables);
                (Some(header), output)
            }
            Err(err) => {
                tracing::warn!(error = %err, "header unreadable, expanding input as bare body");
                let empty = LocalDictionary::new();
                let tables = Tables {
                    local: &empty,
                    types: type_words(""),
                    global: global_words(),
                };
                (None, expand_body(compressed, &tables))
            }
        }
    }
}

/// Compress with the default configuration.
pub fn compress(text: &[u8], language: &str) -> Vec<u8> {
    Codec::default().compress(text, language)
}

/// Compress with explicit word-length and dictionary-size limits.
pub fn compress_with(
    text: &[u8],
    language: &str,
    min_word_length: usize,
    max_local_entries: usize,
) -> Vec<u8> {
    let config = CodecConfig::default()
        .with_min_word_length(min_word_length)
        .with_max_local_entries(max_local_entries);
    Codec::new(config).compress(text, language)
}

pub fn expand(compressed: &[u8]) -> Vec<u8> {
    Codec::default().expand(compressed)
}
