//! The three top-level organizational sections of a database.

use std::fmt;
use std::str::FromStr;

use mechdb_common::MechdbError;
use serde::{Deserialize, Serialize};

/// Top-level section of a reference database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Raw reference data as collected.
    Depository,
    /// Curated, named libraries.
    Libraries,
    /// Functional-group trees used for estimation.
    Groups,
}

impl Section {
    pub const ALL: [Section; 3] =
        [Section::Depository, Section::Libraries, Section::Groups];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Depository => "depository",
            Section::Libraries => "libraries",
            Section::Groups => "groups",
        }
    }

    /// Human-readable section title for page headings.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Depository => "Depository",
            Section::Libraries => "Libraries",
            Section::Groups => "Groups",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = MechdbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "depository" => Ok(Section::Depository),
            "libraries" => Ok(Section::Libraries),
            "groups" => Ok(Section::Groups),
            other => Err(MechdbError::InvalidSection(other.to_string())),
        }
    }
}
