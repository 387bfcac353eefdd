//! Header-set checks.

use std::path::Path;

use botc_model::ValidationResult;

use crate::rules::RuleSet;

/// One error per required header that is absent.
pub fn check_required(path: &Path, headers: &[String], rules: &RuleSet) -> ValidationResult {
    let mut result = ValidationResult::new();
    for header in rules.missing_headers(headers) {
        result.error(format!(
            "{}: missing required header '{header}'",
            path.display()
        ));
    }
    result
}

/// One error per distinct header outside `required ∪ optional`.
///
/// Unknown headers are errors, not warnings: they are almost always typos or
/// a column added to the sheet without updating the schema.
pub fn check_known(path: &Path, headers: &[String], rules: &RuleSet) -> ValidationResult {
    let mut result = ValidationResult::new();
    for header in rules.unknown_headers(headers) {
        result.error(format!("{}: unknown header '{header}'", path.display()));
    }
    result
}
