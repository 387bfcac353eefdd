//! Character teams.
//!
//! Team names in the sheet are free text; they are matched against this
//! closed set case-insensitively.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Townsfolk,
    Outsider,
    Minion,
    Demon,
    Traveler,
    Fabled,
    /// Pseudo-team used for jinx rows.
    Jinxes,
}

impl Team {
    pub const ALL: [Team; 7] = [
        Team::Townsfolk,
        Team::Outsider,
        Team::Minion,
        Team::Demon,
        Team::Traveler,
        Team::Fabled,
        Team::Jinxes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Townsfolk => "townsfolk",
            Team::Outsider => "outsider",
            Team::Minion => "minion",
            Team::Demon => "demon",
            Team::Traveler => "traveler",
            Team::Fabled => "fabled",
            Team::Jinxes => "jinxes",
        }
    }

    /// Case-insensitive lookup; `None` for names outside the known set.
    pub fn parse(value: &str) -> Option<Team> {
        let lowered = value.trim().to_lowercase();
        Team::ALL
            .into_iter()
            .find(|team| team.as_str() == lowered)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
