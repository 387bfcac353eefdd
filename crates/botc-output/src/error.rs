use std::path::PathBuf;

use thiserror::Error;

use botc_ingest::IngestError;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} must contain a JSON array")]
    NotAnArray { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, OutputError>;
