//! Batch round-trip verification over a rayon worker pool.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use rto_codec::Codec;
use rto_core::RtoError;
use serde::Serialize;
use walkdir::WalkDir;

use crate::language::language_for_path;

#[derive(Debug, Clone)]
pub struct VerifyOptions {
    /// Worker threads; `None` lets rayon pick.
    pub jobs: Option<usize>,
    /// Files above this size are skipped.
    pub max_size: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub language: String,
    pub original: usize,
    pub compressed: usize,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VerifySummary {
    pub files: usize,
    pub skipped: usize,
    pub failures: usize,
    pub original_bytes: u64,
    pub compressed_bytes: u64,
    pub reports: Vec<FileReport>,
}

impl VerifySummary {
    pub fn reduction_pct(&self) -> f64 {
        if self.original_bytes == 0 { return 0.0; }
        (1.0 - self.compressed_bytes as f64 / self.original_bytes as f64) * 100.0
    }
}

/// Regular files under `paths`, sorted, plus the count skipped for size.
pub fn collect_files(paths: &[PathBuf], max_size: u64) -> (Vec<PathBuf>, usize) {
    let mut files = Vec::new();
    let mut skipped = 0;
    for root in paths {
        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            match entry.metadata() {
                Ok(meta) if meta.len() <= max_size => files.push(entry.into_path()),
                Ok(_) => skipped += 1,
                Err(err) => {
                    tracing::warn!(path = %entry.path().display(), error = %err, "unreadable metadata");
                    skipped += 1;
                }
            }
        }
    }
    files.sort();
    files.dedup();
    (files, skipped)
}

/// Compress then expand one file and compare.
pub fn verify_file(codec: &Codec, path: &Path) -> FileReport {
    let language = language_for_path(path);
    let original = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            return FileReport {
                path: path.to_path_buf(),
                language,
                original: 0,
                compressed: 0,
                ok: false,
                error: Some(RtoError::from(err).to_string()),
            };
        }
    };

    let compressed = codec.compress(&original, &language);
    let ok = codec.expand(&compressed) == original;
    let error = (!ok).then(|| RtoError::RoundTripMismatch { path: path.to_path_buf() }.to_string());
    if !ok {
        tracing::error!(path = %path.display(), %language, "round-trip mismatch");
    }
    FileReport {
        path: path.to_path_buf(),
        language,
        original: original.len(),
        compressed: compressed.len(),
        ok,
        error,
    }
}

pub fn verify_paths(codec: &Codec, paths: &[PathBuf], options: &VerifyOptions) -> Result<VerifySummary> {
    let (files, skipped) = collect_files(paths, options.max_size);
    tracing::info!(files = files.len(), skipped, "verifying");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.jobs.unwrap_or(0))
        .build()
        .context("failed to build worker pool")?;
    let reports: Vec<FileReport> =
        pool.install(|| files.par_iter().map(|path| verify_file(codec, path)).collect());

    let mut summary = VerifySummary { files: reports.len(), skipped, ..Default::default() };
    for report in &reports {
        if report.ok {
            summary.original_bytes += report.original as u64;
            summary.compressed_bytes += report.compressed as u64;
        } else {
            summary.failures += 1;
        }
    }
    summary.reports = reports;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_files_skips_large() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("small.py"), "x = 1\n").unwrap();
        fs::write(dir.path().join("big.txt"), vec![b'a'; 2048]).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/inner.rs"), "fn main() {}\n").unwrap();

        let (files, skipped) = collect_files(&[dir.path().to_path_buf()], 1024);
        assert_eq!(files.len(), 2);
        assert_eq!(skipped, 1);
    }

    #[test]
    fn test_verify_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.py");
        fs::write(&path, "self self self ~ ~~ value value value\n").unwrap();
        let report = verify_file(&Codec::default(), &path);
        assert!(report.ok);
        assert_eq!(report.language, "py");
        assert!(report.error.is_none());
    }

    #[test]
    fn test_verify_missing_file() {
        let report = verify_file(&Codec::default(), Path::new("/nonexistent/file.rs"));
        assert!(!report.ok);
        assert!(report.error.is_some());
    }

    #[test]
    fn test_verify_paths_summary() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..5 {
            fs::write(dir.path().join(format!("f{i}.sh")), "echo done; echo done; echo done\n").unwrap();
        }
        let options = VerifyOptions { jobs: Some(2), max_size: 1024 };
        let summary = verify_paths(&Codec::default(), &[dir.path().to_path_buf()], &options).unwrap();
        assert_eq!(summary.files, 5);
        assert_eq!(summary.failures, 0);
        assert!(summary.original_bytes > 0);
    }
}
