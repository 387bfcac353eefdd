//! Document-level orchestration: load, then run the rule set.

use std::path::{Path, PathBuf};

use tracing::{debug, info_span};

use botc_ingest::read_csv;
use botc_model::{CsvTable, DocumentKind, ValidationResult};

use crate::checks;
use crate::options::ValidationOptions;
use crate::rules::RuleSet;

/// One file to validate and the schema it follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTarget {
    pub kind: DocumentKind,
    pub path: PathBuf,
}

impl DocumentTarget {
    pub fn new(kind: DocumentKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}

/// Run every check for `kind` against an already loaded table.
pub fn validate_table(kind: DocumentKind, table: &CsvTable) -> ValidationResult {
    let rules = RuleSet::for_kind(kind);
    checks::run_all(rules, &table.path, &table.headers, &table.rows)
}

/// Load `path` and validate it as `kind`.
///
/// When nothing could be parsed (missing file, no header row) only the load
/// findings are returned.
pub fn validate_document(
    kind: DocumentKind,
    path: &Path,
    options: &ValidationOptions,
) -> ValidationResult {
    let span = info_span!("document", kind = %kind, path = %path.display());
    let _guard = span.enter();

    let (table, load_result) = read_csv(path, &options.load).into_parts();
    if table.headers.is_empty() {
        debug!("no headers parsed; skipping schema checks");
        return load_result;
    }

    let result = ValidationResult::merge_all([load_result, validate_table(kind, &table)]);
    debug!(
        errors = result.error_count(),
        warnings = result.warning_count(),
        "document validated"
    );
    result
}

/// Validate each target in order and merge the findings.
pub fn validate_documents(
    targets: &[DocumentTarget],
    options: &ValidationOptions,
) -> ValidationResult {
    targets
        .iter()
        .map(|target| validate_document(target.kind, &target.path, options))
        .collect()
}
