//! Thermodynamic model parameter sets.
//!
//! Enthalpies are stored in J/mol and entropies / heat capacities in
//! J/(mol K); temperatures in K. The web layer converts to display units.

use serde::{Deserialize, Serialize};

use crate::ModelData;

/// One NASA polynomial valid over a temperature range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NasaPolynomial {
    pub cm2: f64,
    pub cm1: f64,
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    pub c5: f64,
    pub c6: f64,
    pub tmin: f64,
    pub tmax: f64,
}

impl NasaPolynomial {
    /// Coefficients in ascending power order, cm2 through c6.
    pub fn coefficients(&self) -> [f64; 9] {
        [
            self.cm2, self.cm1, self.c0, self.c1, self.c2, self.c3, self.c4,
            self.c5, self.c6,
        ]
    }
}

/// Thermodynamic data attached to an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum ThermoData {
    /// Group additivity estimate: H298, S298 and a Cp(T) table.
    GroupAdditivity {
        h298: f64,
        s298: f64,
        tdata: Vec<f64>,
        cpdata: Vec<f64>,
        tmin: f64,
        tmax: f64,
    },
    /// Wilhoit polynomial fit.
    Wilhoit {
        cp0: f64,
        cp_inf: f64,
        a0: f64,
        a1: f64,
        a2: f64,
        a3: f64,
        h0: f64,
        s0: f64,
        b: f64,
        tmin: f64,
        tmax: f64,
    },
    /// One or more NASA polynomials.
    Nasa { polynomials: Vec<NasaPolynomial> },
    /// Reference to another entry's index in the same sub-database.
    Link { target: i64 },
}

impl ModelData for ThermoData {
    fn format_label(&self) -> &'static str {
        match self {
            ThermoData::GroupAdditivity { .. } => "Group additivity",
            ThermoData::Wilhoit { .. } => "Wilhoit",
            ThermoData::Nasa { .. } => "NASA",
            ThermoData::Link { .. } => "Link",
        }
    }

    fn link_target(&self) -> Option<i64> {
        match self {
            ThermoData::Link { target } => Some(*target),
            _ => None,
        }
    }
}
