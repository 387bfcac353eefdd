//! Validation check modules.
//!
//! Each module performs one kind of check and returns its own
//! [`ValidationResult`]; [`run_all`] concatenates them.

pub mod characters;
pub mod headers;
pub mod ids;
pub mod scripts;

use std::path::Path;

use botc_model::{Row, ValidationResult};

use crate::rules::RuleSet;

/// Run every check of `rules` against one parsed file.
pub fn run_all(rules: &RuleSet, path: &Path, headers: &[String], rows: &[Row]) -> ValidationResult {
    ValidationResult::merge_all([
        // 1. Required headers present
        headers::check_required(path, headers, rules),
        // 2. No headers outside the schema
        headers::check_known(path, headers, rules),
        // 3. Ids present and unique
        ids::check(path, rows),
        // 4. Document-specific row rules
        (rules.row_check)(rules, path, rows),
    ])
}
