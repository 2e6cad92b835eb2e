//! Content sniffing: is this input worth compressing at all?
//!
//! The codec round-trips anything, so this is advisory for callers that want
//! to skip binary or already-compressed files.

use serde::Serialize;

const NULL_SCAN_LEN: usize = 1024;
const SAMPLE_LEN: usize = 4096;
const HIGH_ENTROPY: f64 = 7.5;
const DENSE_ENTROPY: f64 = 6.0;
const SPARSE_WHITESPACE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Empty,
    /// Null byte near the start.
    Binary,
    /// Looks compressed or encrypted.
    HighEntropy,
    /// Dense, almost no whitespace: binary or minified.
    BinaryLikely,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Pass,
    Compress,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Analysis {
    pub kind: ContentKind,
    pub entropy: f64,
    pub whitespace_ratio: f64,
}

impl Analysis {
    pub fn recommendation(&self) -> Recommendation {
        match self.kind {
            ContentKind::Text => Recommendation::Compress,
            _ => Recommendation::Pass,
        }
    }
}

/// Shannon entropy in bits per byte.
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut counts = [0usize; 256];
    for &b in data {
        counts[b as usize] += 1;
    }
    let len = data.len() as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / len;
            -p * p.log2()
        })
        .sum()
}

pub fn whitespace_ratio(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let ws = data.iter().filter(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r')).count();
    ws as f64 / data.len() as f64
}

/// Classify raw input from its first few kilobytes.
pub fn analyze(data: &[u8]) -> Analysis {
    if data.is_empty() {
        return Analysis { kind: ContentKind::Empty, entropy: 0.0, whitespace_ratio: 0.0 };
    }
    if data[..data.len().min(NULL_SCAN_LEN)].contains(&0) {
        return Analysis { kind: ContentKind::Binary, entropy: 0.0, whitespace_ratio: 0.0 };
    }

    let sample = &data[..data.len().min(SAMPLE_LEN)];
    let entropy = shannon_entropy(sample);
    let ws_ratio = whitespace_ratio(sample);

    let kind = if entropy > HIGH_ENTROPY {
        ContentKind::HighEntropy
    } else if ws_ratio < SPARSE_WHITESPACE && entropy > DENSE_ENTROPY {
        ContentKind::BinaryLikely
    } else {
        ContentKind::Text
    };
    Analysis { kind, entropy, whitespace_ratio: ws_ratio }
}
