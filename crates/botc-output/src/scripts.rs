//! `scripts.json` catalog generation.
//!
//! Rows come from the scripts CSV; fields the sheet does not carry
//! (`background`, and `official` when the sheet leaves it blank) are kept
//! from the previously published catalog.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use botc_ingest::{IngestError, clean_text, parse_optional_bool, read_table};
use botc_model::Row;

use crate::error::{OutputError, Result};

/// Scripts treated as official when neither the sheet nor the existing
/// catalog says otherwise.
pub const KNOWN_OFFICIAL_IDS: &[&str] = &["trouble_brewing", "bad_moon_rising", "sects_and_violets"];

/// Existing catalog entries keyed by id.
pub type ExistingScripts = BTreeMap<String, Map<String, Value>>;

/// One entry of the public catalog. Field order is the published order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub author: String,
    pub synopsis: String,
    pub name: String,
    pub id: String,
    pub pdf: String,
    pub json: String,
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub official: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub teensyville: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Reads the previously published catalog; a missing file is an empty catalog.
///
/// # Errors
///
/// Returns an error if the file is unreadable, not JSON, or not a JSON array.
pub fn load_existing_scripts(path: &Path) -> Result<ExistingScripts> {
    if !path.exists() {
        return Ok(ExistingScripts::new());
    }
    let text = fs::read_to_string(path).map_err(|source| OutputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let data: Value = serde_json::from_str(&text).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let Value::Array(items) = data else {
        return Err(OutputError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    let mut scripts = ExistingScripts::new();
    for item in items {
        let Value::Object(entry) = item else {
            continue;
        };
        let id = match entry.get("id") {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            _ => continue,
        };
        scripts.insert(id, entry);
    }
    debug!(path = %path.display(), entries = scripts.len(), "existing catalog loaded");
    Ok(scripts)
}

/// Builds the catalog entry for one row; `None` when the row has no id.
pub fn build_script_entry(row: &Row, existing: Option<&Map<String, Value>>) -> Option<ScriptEntry> {
    let id = clean_text(row.get("id"));
    if id.is_empty() {
        return None;
    }

    let logo = clean_text(row.get("logo"));
    let official = parse_optional_bool(row.get("official"))
        .or_else(|| existing.and_then(|entry| entry.get("official")).map(is_truthy))
        .unwrap_or_else(|| KNOWN_OFFICIAL_IDS.contains(&id.as_str()));
    let teensyville = parse_optional_bool(row.get("teensyville")).unwrap_or(false);
    let background = existing
        .and_then(|entry| entry.get("background"))
        .and_then(Value::as_str)
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string);

    Some(ScriptEntry {
        author: clean_text(row.get("author")),
        synopsis: clean_text(row.get("synopsis")),
        name: clean_text(row.get("name")),
        pdf: clean_text(row.get("pdf")),
        json: clean_text(row.get("json")),
        note: clean_text(row.get("note")),
        logo: (!logo.is_empty()).then_some(logo),
        official,
        teensyville,
        background,
        id,
    })
}

/// Builds catalog entries for every row of `csv_path` that has an id.
///
/// # Errors
///
/// Returns an error if the CSV is missing or unreadable, or the existing
/// catalog cannot be loaded.
pub fn generate_scripts(csv_path: &Path, existing_path: &Path) -> Result<Vec<ScriptEntry>> {
    let rows = match read_table(csv_path) {
        Ok(table) => table.rows,
        Err(IngestError::EmptyCsv { .. }) => Vec::new(),
        Err(error) => return Err(error.into()),
    };
    let existing = load_existing_scripts(existing_path)?;

    let scripts: Vec<ScriptEntry> = rows
        .iter()
        .filter_map(|row| {
            let id = clean_text(row.get("id"));
            build_script_entry(row, existing.get(&id))
        })
        .collect();
    info!(
        csv = %csv_path.display(),
        scripts = scripts.len(),
        "scripts catalog generated"
    );
    Ok(scripts)
}

/// Writes `scripts` as pretty JSON with a trailing newline, creating parent
/// directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn write_scripts_json(path: &Path, scripts: &[ScriptEntry]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let mut json = serde_json::to_string_pretty(scripts).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    json.push('\n');
    fs::write(path, json).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// JSON truthiness of an existing catalog value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
