//! Data model shared by the translation CSV tooling.
//!
//! The loader produces [`CsvTable`]s, every validation check produces a
//! [`ValidationResult`], and the CLI folds those results together before
//! rendering them.

pub mod document;
pub mod result;
pub mod table;
pub mod team;

pub use document::DocumentKind;
pub use result::{Severity, ValidationResult};
pub use table::{CsvTable, Row};
pub use team::Team;
