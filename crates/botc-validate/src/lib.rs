//! Validation of the translation CSV exports.
//!
//! A [`RuleSet`] describes one document kind: which headers are required,
//! which are optional, and which row checks apply. Every check is a pure
//! function returning a [`botc_model::ValidationResult`]; the engine folds
//! them together.

pub mod checks;
pub mod engine;
pub mod options;
pub mod rules;

pub use engine::{DocumentTarget, validate_document, validate_documents, validate_table};
pub use options::ValidationOptions;
pub use rules::{ALLOWED_URL_PREFIXES, RuleSet, SCRIPT_ID_PATTERN};
