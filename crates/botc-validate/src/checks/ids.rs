//! Id presence and uniqueness.

use std::collections::HashMap;
use std::path::Path;

use botc_ingest::clean_text;
use botc_model::{Row, ValidationResult};

/// Check that every row with data has an id and that ids are unique.
///
/// Entirely empty rows are skipped; trailing blank rows are normal in sheet
/// exports.
pub fn check(path: &Path, rows: &[Row]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut first_seen: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let id = clean_text(row.get("id"));
        if id.is_empty() {
            if !row.is_blank() {
                result.error(format!(
                    "{}:{} has data but empty 'id'",
                    path.display(),
                    row.line
                ));
            }
            continue;
        }

        if let Some(first_line) = first_seen.get(&id) {
            result.error(format!(
                "{}:{} duplicated id '{id}' (first defined at line {first_line})",
                path.display(),
                row.line
            ));
            continue;
        }
        first_seen.insert(id, row.line);
    }

    result
}
