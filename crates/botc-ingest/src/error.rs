//! Error types for CSV ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by ingestion operations that cannot be reported as findings.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV record could not be decoded (e.g. invalid UTF-8).
    #[error("{path}:{line} could not be read: {source}")]
    Decode {
        path: PathBuf,
        line: usize,
        #[source]
        source: csv::Error,
    },

    /// CSV header row is missing.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },
}

impl IngestError {
    pub(crate) fn read(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/scripts.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/scripts.csv");
    }

    #[test]
    fn test_not_found_maps_to_file_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IngestError::read(std::path::Path::new("x.csv"), io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = IngestError::read(std::path::Path::new("x.csv"), io);
        assert!(matches!(err, IngestError::FileRead { .. }));
    }
}
