//! Reactions as stored in kinetics database entries.

use serde::{Deserialize, Serialize};

use crate::structure::Structure;

/// A reaction between sets of structures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub reactants: Vec<Structure>,
    pub products: Vec<Structure>,
    /// Omitted in data files for the common reversible case.
    #[serde(default = "default_reversible")]
    pub reversible: bool,
}

fn default_reversible() -> bool {
    true
}
