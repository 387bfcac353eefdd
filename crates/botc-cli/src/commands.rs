use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use botc_ingest::{SanitizeOptions, SanitizeOutcome, sanitize_file};
use botc_model::{DocumentKind, ValidationResult};
use botc_output::{generate_scripts, write_scripts_json};
use botc_validate::{DocumentTarget, validate_documents};

use crate::cli::{DEFAULT_CHARACTERS_CSV, GenerateArgs, SanitizeArgs, ValidateArgs};

/// Validates every CSV export that is not skipped.
///
/// # Errors
///
/// Fails when both exports are skipped or a path cannot be resolved. CSV
/// findings are returned in the result, never as errors.
pub fn run_validate(args: &ValidateArgs) -> Result<ValidationResult> {
    let mut targets = Vec::new();
    if !args.skip_characters {
        targets.push(DocumentTarget::new(
            DocumentKind::Characters,
            absolute(&args.characters)?,
        ));
    }
    if !args.skip_scripts {
        targets.push(DocumentTarget::new(
            DocumentKind::Scripts,
            absolute(&args.scripts)?,
        ));
    }
    if targets.is_empty() {
        bail!("both targets are skipped; nothing to validate");
    }

    let options = args.options();
    info!(
        documents = targets.len(),
        strict_warnings = options.strict_warnings,
        fail_on_control_chars = options.load.fail_on_control_chars,
        fail_on_header_normalization = options.load.fail_on_header_normalization,
        "validating CSV exports"
    );
    Ok(validate_documents(&targets, &options))
}

/// Per-file scrub outcomes plus the mode they were produced in.
#[derive(Debug, Clone)]
pub struct SanitizeReport {
    pub outcomes: Vec<SanitizeOutcome>,
    pub dry_run: bool,
}

impl SanitizeReport {
    /// Processed files, excluding skipped missing ones.
    pub fn processed(&self) -> impl Iterator<Item = &SanitizeOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.skipped_missing)
    }

    /// Files in which at least one control character was found.
    pub fn found_count(&self) -> usize {
        self.processed()
            .filter(|outcome| outcome.removed_count > 0)
            .count()
    }

    pub fn changed_count(&self) -> usize {
        self.processed().filter(|outcome| outcome.changed).count()
    }

    pub fn exit_code(&self, fail_if_found: bool) -> i32 {
        i32::from(fail_if_found && self.found_count() > 0)
    }
}

/// Scrubs control characters from every requested file.
///
/// # Errors
///
/// Stops at the first missing file (unless `--ignore-missing`) or I/O failure.
pub fn run_sanitize(args: &SanitizeArgs) -> Result<SanitizeReport> {
    let options = SanitizeOptions {
        dry_run: args.dry_run,
        ignore_missing: args.ignore_missing,
    };
    let files = if args.files.is_empty() {
        vec![PathBuf::from(DEFAULT_CHARACTERS_CSV)]
    } else {
        args.files.clone()
    };

    let mut outcomes = Vec::with_capacity(files.len());
    for file in &files {
        let path = absolute(file)?;
        outcomes.push(sanitize_file(&path, &options)?);
    }
    Ok(SanitizeReport {
        outcomes,
        dry_run: args.dry_run,
    })
}

#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub count: usize,
    pub out: PathBuf,
}

/// Builds and writes the public scripts catalog.
///
/// # Errors
///
/// Fails when the CSV is missing, the existing catalog is malformed, or the
/// output cannot be written.
pub fn run_generate_scripts(args: &GenerateArgs) -> Result<GenerateReport> {
    let csv = absolute(&args.csv)?;
    if !csv.exists() {
        bail!("CSV file not found: {}", csv.display());
    }
    let out = absolute(&args.out)?;
    let existing = match &args.existing {
        Some(path) => absolute(path)?,
        None => out.clone(),
    };

    let scripts = generate_scripts(&csv, &existing)
        .with_context(|| format!("failed to generate scripts from {}", csv.display()))?;
    write_scripts_json(&out, &scripts)?;
    info!(path = %out.display(), scripts = scripts.len(), "scripts catalog written");
    Ok(GenerateReport {
        count: scripts.len(),
        out,
    })
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("failed to resolve {}", path.display()))
}
