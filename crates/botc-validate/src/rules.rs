//! Schema definitions per document kind.
//!
//! Known headers are `required ∪ optional`; anything outside that union is
//! unknown. The sets are built once and shared read-only.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use botc_model::{DocumentKind, Row, ValidationResult};

use crate::checks;

/// Anchored pattern every script id must match.
pub const SCRIPT_ID_PATTERN: &str = "^[a-z0-9_]+$";

/// Prefixes accepted for script `json`/`pdf` paths.
pub const ALLOWED_URL_PREFIXES: &[&str] = &["/translations/assets/", "https://", "http://", "/"];

/// Row checks specific to one document kind, run against the rule set that
/// owns them.
pub type RowCheck = fn(&RuleSet, &Path, &[Row]) -> ValidationResult;

#[derive(Clone)]
pub struct RuleSet {
    pub kind: DocumentKind,
    pub required: BTreeSet<&'static str>,
    pub optional: BTreeSet<&'static str>,
    /// Optional headers whose values must parse as booleans.
    pub boolean: BTreeSet<&'static str>,
    pub row_check: RowCheck,
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("optional", &self.optional)
            .field("boolean", &self.boolean)
            .finish_non_exhaustive()
    }
}

static CHARACTER_RULES: LazyLock<RuleSet> = LazyLock::new(|| RuleSet {
    kind: DocumentKind::Characters,
    required: BTreeSet::from(["id", "name", "team", "edition", "ability"]),
    optional: BTreeSet::from([
        "image",
        "firstNightReminder",
        "otherNightReminder",
        "reminders",
        "remindersGlobal",
        "firstNight",
        "otherNight",
        "flavor",
        "note",
    ]),
    boolean: BTreeSet::new(),
    row_check: checks::characters::check,
});

static SCRIPT_RULES: LazyLock<RuleSet> = LazyLock::new(|| RuleSet {
    kind: DocumentKind::Scripts,
    required: BTreeSet::from(["id", "name", "author", "synopsis", "json", "pdf"]),
    optional: BTreeSet::from(["logo", "note", "official", "teensyville"]),
    boolean: BTreeSet::from(["official", "teensyville"]),
    row_check: checks::scripts::check,
});

impl RuleSet {
    pub fn for_kind(kind: DocumentKind) -> &'static RuleSet {
        match kind {
            DocumentKind::Characters => &*CHARACTER_RULES,
            DocumentKind::Scripts => &*SCRIPT_RULES,
        }
    }

    /// `required ∪ optional`.
    pub fn known(&self) -> BTreeSet<&'static str> {
        self.required.union(&self.optional).copied().collect()
    }

    /// Required headers absent from `headers`, sorted.
    pub fn missing_headers(&self, headers: &[String]) -> Vec<&'static str> {
        let observed = observed(headers);
        self.required
            .iter()
            .copied()
            .filter(|name| !observed.contains(*name))
            .collect()
    }

    /// Distinct non-empty headers outside the known set, sorted.
    pub fn unknown_headers<'a>(&self, headers: &'a [String]) -> Vec<&'a str> {
        let known = self.known();
        observed(headers).difference(&known).copied().collect()
    }
}

fn observed(headers: &[String]) -> BTreeSet<&str> {
    headers
        .iter()
        .map(String::as_str)
        .filter(|header| !header.is_empty())
        .collect()
}
