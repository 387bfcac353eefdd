//! Character row rules: team names and night-order values.

use std::path::Path;

use botc_ingest::clean_text;
use botc_model::{Row, Team, ValidationResult};

use crate::rules::RuleSet;

/// Night-order columns that must hold integers when filled.
const NIGHT_ORDER_FIELDS: &[&str] = &["firstNight", "otherNight"];

/// Check character rows. Rows without an id are left to the id check.
pub fn check(_rules: &RuleSet, path: &Path, rows: &[Row]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let display = path.display();

    for row in rows {
        let id = clean_text(row.get("id"));
        if id.is_empty() {
            continue;
        }
        let line = row.line;

        let team = clean_text(row.get("team")).to_lowercase();
        if !team.is_empty() && Team::parse(&team).is_none() {
            result.warning(format!(
                "{display}:{line} id='{id}' uses unknown team '{team}'"
            ));
        }

        for key in NIGHT_ORDER_FIELDS {
            let value = clean_text(row.get(key));
            if !value.is_empty() && !is_night_order(&value) {
                result.warning(format!(
                    "{display}:{line} id='{id}' has non-numeric '{key}' value '{value}'"
                ));
            }
        }
    }

    result
}

/// Integer with an optional leading minus sign.
pub fn is_night_order(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.chars().all(|ch| ch.is_ascii_digit())
}
