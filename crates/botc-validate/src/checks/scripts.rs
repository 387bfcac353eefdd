//! Script row rules: id format, required values, asset paths, booleans.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use botc_ingest::{clean_text, parse_optional_bool};
use botc_model::{Row, ValidationResult};

use crate::rules::{ALLOWED_URL_PREFIXES, RuleSet, SCRIPT_ID_PATTERN};

static SCRIPT_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SCRIPT_ID_PATTERN).expect("Invalid script id regex"));

/// Columns that must be filled on every script row.
const REQUIRED_VALUES: &[&str] = &["name", "author", "synopsis", "json", "pdf"];

/// Asset path columns and the extension each should end with.
const ASSET_PATHS: &[(&str, &str)] = &[("json", ".json"), ("pdf", ".pdf")];

/// Check script rows. Rows without an id are left to the id check.
pub fn check(rules: &RuleSet, path: &Path, rows: &[Row]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let display = path.display();

    for row in rows {
        let id = clean_text(row.get("id"));
        if id.is_empty() {
            continue;
        }
        let at = format!("{display}:{} id='{id}'", row.line);

        if !is_valid_script_id(&id) {
            result.error(format!("{at} must match regex '{SCRIPT_ID_PATTERN}'"));
        }

        for key in REQUIRED_VALUES {
            if clean_text(row.get(key)).is_empty() {
                result.error(format!("{at} has empty '{key}'"));
            }
        }

        for (key, extension) in ASSET_PATHS {
            let value = clean_text(row.get(key));
            if value.chars().any(char::is_whitespace) {
                result.error(format!("{at} has whitespace in {key} path"));
            }
            if !value.is_empty() && !value.ends_with(extension) {
                result.warning(format!(
                    "{at} has {key} path not ending with {extension}"
                ));
            }
            if !value.is_empty() && !has_allowed_prefix(&value) {
                result.error(format!("{at} has unsupported {key} path '{value}'"));
            }
        }

        for key in &rules.boolean {
            if !row.contains(key) {
                continue;
            }
            // Cites the cleaned cell, which is what the parser judged.
            let value = clean_text(row.get(key));
            if !value.is_empty() && parse_optional_bool(&value).is_none() {
                result.error(format!("{at} has invalid boolean '{key}={value}'"));
            }
        }
    }

    result
}

/// Lowercase ASCII letters, digits, and underscores only.
pub fn is_valid_script_id(id: &str) -> bool {
    SCRIPT_ID_REGEX.is_match(id)
}

pub fn has_allowed_prefix(value: &str) -> bool {
    ALLOWED_URL_PREFIXES
        .iter()
        .any(|prefix| value.starts_with(prefix))
}
