//! In-place removal of control characters from CSV exports.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::text::{BOM, count_control_chars, strip_control_chars};

#[derive(Debug, Clone, Copy, Default)]
pub struct SanitizeOptions {
    /// Report only; never rewrite the file.
    pub dry_run: bool,
    /// Skip missing files instead of failing.
    pub ignore_missing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeOutcome {
    pub path: PathBuf,
    pub removed_count: usize,
    pub changed: bool,
    pub skipped_missing: bool,
}

impl SanitizeOutcome {
    fn skipped(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            removed_count: 0,
            changed: false,
            skipped_missing: true,
        }
    }
}

/// Strips control characters from `path`, rewriting it as UTF-8 without BOM
/// when something was removed.
///
/// # Errors
///
/// Returns [`IngestError::FileNotFound`] for a missing file unless
/// `ignore_missing` is set, and I/O errors for unreadable or unwritable files.
pub fn sanitize_file(path: &Path, options: &SanitizeOptions) -> Result<SanitizeOutcome> {
    if !path.exists() {
        if options.ignore_missing {
            debug!(path = %path.display(), "skipping missing file");
            return Ok(SanitizeOutcome::skipped(path));
        }
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| IngestError::read(path, e))?;
    let original = content.strip_prefix(BOM).unwrap_or(&content);

    let removed_count = count_control_chars(original);
    let sanitized = strip_control_chars(original);
    let changed = sanitized != original;

    if changed && !options.dry_run {
        fs::write(path, &sanitized).map_err(|source| IngestError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), removed_count, "control characters removed");
    }

    Ok(SanitizeOutcome {
        path: path.to_path_buf(),
        removed_count,
        changed,
        skipped_missing: false,
    })
}
