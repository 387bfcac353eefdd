//! CSV ingestion for the translation sheets.
//!
//! - [`text`]: header sanitization, value cleaning, boolean parsing
//! - [`loader`]: CSV file -> [`botc_model::CsvTable`] plus load findings
//! - [`sanitize`]: in-place control-character removal for CSV files

pub mod error;
pub mod loader;
pub mod sanitize;
pub mod text;

pub use error::{IngestError, Result};
pub use loader::{LoadOptions, LoadedCsv, read_csv, read_table};
pub use sanitize::{SanitizeOptions, SanitizeOutcome, sanitize_file};
pub use text::{
    clean_text, contains_control_chars, count_control_chars, is_control_char, parse_optional_bool,
    sanitize_header, strip_control_chars,
};
