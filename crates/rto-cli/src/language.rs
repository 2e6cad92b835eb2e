//! Language tags from file names.

use std::path::Path;

/// Lower-case, drop a leading dot, fold C headers into `c`.
pub fn normalize_tag(ext: &str) -> String {
    let tag = ext.trim_start_matches('.').to_ascii_lowercase();
    match tag.as_str() {
        "h" => "c".to_string(),
        _ => tag,
    }
}

/// Tag for a path's extension; empty when it has none.
pub fn language_for_path(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(normalize_tag)
        .unwrap_or_default()
}
