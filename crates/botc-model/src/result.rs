//! Validation findings and their aggregation.
//!
//! A [`ValidationResult`] is three ordered buckets of self-contained
//! messages. Checks never share an accumulator: each returns its own result
//! and the caller concatenates them with [`ValidationResult::merge`] or
//! [`ValidationResult::merge_all`].

use serde::{Deserialize, Serialize};

/// Finding severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Always fails the run.
    Error,
    /// Fails the run only when warnings are strict.
    Warning,
    /// Never affects the exit status.
    Info,
}

impl Severity {
    /// Short tag used by the text renderer.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warn",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Result holding a single error.
    pub fn from_error(message: impl Into<String>) -> Self {
        let mut result = Self::new();
        result.error(message);
        result
    }

    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        match severity {
            Severity::Error => self.errors.push(message),
            Severity::Warning => self.warnings.push(message),
            Severity::Info => self.infos.push(message),
        }
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Severity::Info, message);
    }

    /// Records an advisory finding that a policy flag may upgrade to an error.
    pub fn add_issue(&mut self, message: impl Into<String>, as_error: bool) {
        let severity = if as_error {
            Severity::Error
        } else {
            Severity::Warning
        };
        self.push(severity, message);
    }

    /// Appends every bucket of `other` to the matching bucket of `self`.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.infos.extend(other.infos);
    }

    /// Folds any number of partial results into one, in iteration order.
    pub fn merge_all<I>(results: I) -> Self
    where
        I: IntoIterator<Item = ValidationResult>,
    {
        results.into_iter().fold(Self::new(), |mut acc, next| {
            acc.merge(next);
            acc
        })
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn info_count(&self) -> usize {
        self.infos.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether the run should fail: any error, or any warning when
    /// `strict_warnings` is set.
    pub fn is_failure(&self, strict_warnings: bool) -> bool {
        self.has_errors() || (strict_warnings && !self.warnings.is_empty())
    }

    pub fn exit_code(&self, strict_warnings: bool) -> i32 {
        if self.is_failure(strict_warnings) { 1 } else { 0 }
    }
}

impl FromIterator<ValidationResult> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        Self::merge_all(iter)
    }
}
