use std::fmt;

use serde::{Deserialize, Serialize};

/// The two CSV exports that are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// One row per character (role) translation.
    Characters,
    /// One row per published script.
    Scripts,
}

impl DocumentKind {
    pub fn all() -> [DocumentKind; 2] {
        [DocumentKind::Characters, DocumentKind::Scripts]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Characters => "characters",
            DocumentKind::Scripts => "scripts",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
