//! CSV loading with inline header/value findings.
//!
//! [`read_csv`] never fails: a missing or empty file becomes an error inside
//! the returned [`ValidationResult`], and every other problem is recorded
//! while loading continues, so one run surfaces all of them.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use botc_model::{CsvTable, Row, ValidationResult};

use crate::error::{IngestError, Result};
use crate::text::{clean_text, contains_control_chars, sanitize_header};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Policy toggles that upgrade advisory load findings to errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Control characters in a value are an error instead of a warning.
    pub fail_on_control_chars: bool,
    /// A header changed by sanitization is an error instead of a warning.
    pub fail_on_header_normalization: bool,
}

impl LoadOptions {
    pub fn strict() -> Self {
        Self {
            fail_on_control_chars: true,
            fail_on_header_normalization: true,
        }
    }
}

/// Output of [`read_csv`]: the parsed table and what was found while parsing it.
#[derive(Debug, Clone, Default)]
pub struct LoadedCsv {
    pub table: CsvTable,
    pub result: ValidationResult,
}

impl LoadedCsv {
    pub fn into_parts(self) -> (CsvTable, ValidationResult) {
        (self.table, self.result)
    }
}

/// Loads `path` and reports header and value problems.
pub fn read_csv(path: &Path, options: &LoadOptions) -> LoadedCsv {
    let bytes = match read_source(path) {
        Ok(bytes) => bytes,
        Err(IngestError::FileNotFound { .. }) => {
            return failed(path, format!("{}: file does not exist", path.display()));
        }
        Err(error) => {
            return failed(path, format!("{}: could not be read: {error}", path.display()));
        }
    };
    parse_csv(path, &bytes, options).loaded
}

/// Loads `path` for tools that only need the data, ignoring findings.
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, if any record
/// (header included) cannot be decoded, or if the file has no records.
pub fn read_table(path: &Path) -> Result<CsvTable> {
    let bytes = read_source(path)?;
    let parsed = parse_csv(path, &bytes, &LoadOptions::default());
    if let Some((line, source)) = parsed.decode_error {
        return Err(IngestError::Decode {
            path: path.to_path_buf(),
            line,
            source,
        });
    }
    if parsed.loaded.table.headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(parsed.loaded.table)
}

fn read_source(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).map_err(|e| IngestError::read(path, e))?;
    Ok(match bytes.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_vec(),
        None => bytes,
    })
}

fn failed(path: &Path, message: String) -> LoadedCsv {
    LoadedCsv {
        table: CsvTable::new(path),
        result: ValidationResult::from_error(message),
    }
}

struct Parsed {
    loaded: LoadedCsv,
    /// First record that failed to decode, with its line.
    decode_error: Option<(usize, csv::Error)>,
}

fn parse_csv(path: &Path, bytes: &[u8], options: &LoadOptions) -> Parsed {
    let display = path.display();
    let mut decode_error = None;
    let mut result = ValidationResult::new();
    let mut table = CsvTable::new(path);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);
    let mut records = reader.records();

    let raw_headers = match records.next() {
        Some(Ok(record)) => record,
        Some(Err(error)) => {
            result.error(format!("{display}:1 could not be read: {error}"));
            return Parsed {
                loaded: LoadedCsv { table, result },
                decode_error: Some((1, error)),
            };
        }
        None => {
            result.error(format!("{display}: empty CSV (header row missing)"));
            return Parsed {
                loaded: LoadedCsv { table, result },
                decode_error,
            };
        }
    };

    for (index, raw) in raw_headers.iter().enumerate() {
        let normalized = sanitize_header(raw);
        if normalized.is_empty() {
            result.error(format!(
                "{display}: header column {} is empty after sanitization",
                index + 1
            ));
        } else if normalized != raw {
            result.add_issue(
                format!("{display}: header '{raw}' normalized to '{normalized}'"),
                options.fail_on_header_normalization,
            );
        }
        table.headers.push(normalized);
    }

    for duplicate in duplicated_headers(&table.headers) {
        result.error(format!("{display}: duplicated header '{duplicate}'"));
    }

    for (index, record) in records.enumerate() {
        let line = index + 2;
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                result.error(format!("{display}:{line} could not be read: {error}"));
                decode_error.get_or_insert((line, error));
                continue;
            }
        };
        let mut row = Row::new(line);
        for (column, key) in table.headers.iter().enumerate() {
            if key.is_empty() {
                continue;
            }
            let raw = record.get(column).unwrap_or("");
            if contains_control_chars(raw) {
                result.add_issue(
                    format!("{display}:{line} field '{key}' contains control characters"),
                    options.fail_on_control_chars,
                );
            }
            row.insert(key.clone(), clean_text(raw));
        }
        table.rows.push(row);
    }

    result.info(format!("{display}: loaded {} row(s)", table.rows.len()));
    debug!(
        path = %path.display(),
        headers = table.headers.len(),
        rows = table.rows.len(),
        errors = result.error_count(),
        warnings = result.warning_count(),
        "csv loaded"
    );
    Parsed {
        loaded: LoadedCsv { table, result },
        decode_error,
    }
}

/// Non-empty header names that occur more than once, in first-seen order.
pub fn duplicated_headers(headers: &[String]) -> Vec<&str> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut order: Vec<&str> = Vec::new();
    for header in headers.iter().filter(|header| !header.is_empty()) {
        let count = counts.entry(header.as_str()).or_insert(0);
        if *count == 0 {
            order.push(header.as_str());
        }
        *count += 1;
    }
    order
        .into_iter()
        .filter(|header| counts.get(header).copied().unwrap_or(0) > 1)
        .collect()
}
