//! Database entries.

use mechdb_chem::{KineticsData, Reaction, Structure, ThermoData};
use serde::{Deserialize, Serialize};

/// One record of a sub-database: a structural item, its model data, and a
/// literature reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry<I, D> {
    pub index: i64,
    pub label: String,
    pub item: I,
    pub data: D,
    #[serde(default)]
    pub reference: String,
}

pub type ThermoEntry = Entry<Structure, ThermoData>;
pub type KineticsEntry = Entry<Reaction, KineticsData>;
