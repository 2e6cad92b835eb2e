use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RtoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Round-trip mismatch: {}", path.display())]
    RoundTripMismatch { path: PathBuf },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RtoError>;
