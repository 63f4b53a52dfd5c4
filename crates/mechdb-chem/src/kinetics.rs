//! Kinetics model parameter sets.
//!
//! Pre-exponential factors keep the units of the source data; activation
//! energies are stored in J/mol, temperatures in K, pressures in Pa.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ModelData;

/// Modified Arrhenius parameters: k(T) = A (T/T0)^n exp(-Ea/RT).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrhenius {
    pub a: f64,
    pub n: f64,
    pub ea: f64,
    #[serde(default = "default_t0")]
    pub t0: f64,
    pub tmin: f64,
    pub tmax: f64,
}

fn default_t0() -> f64 {
    1.0
}

/// Kinetics data attached to an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum KineticsData {
    Arrhenius(Arrhenius),
    /// Evans-Polanyi form: Ea = E0 + alpha * dHrxn.
    ArrheniusEp { a: f64, n: f64, alpha: f64, e0: f64 },
    /// Sum of Arrhenius expressions.
    MultiArrhenius { arrhenius: Vec<Arrhenius> },
    /// One Arrhenius expression per pressure.
    PDepArrhenius {
        pressures: Vec<f64>,
        arrhenius: Vec<Arrhenius>,
    },
    /// Chebyshev expansion of log k over reduced T and P.
    Chebyshev {
        coeffs: Vec<Vec<f64>>,
        tmin: f64,
        tmax: f64,
        pmin: f64,
        pmax: f64,
    },
    /// Falloff with the Troe blending function.
    Troe {
        arrhenius_low: Arrhenius,
        arrhenius_high: Arrhenius,
        alpha: f64,
        t3: f64,
        t1: f64,
        /// Optional second exponential term.
        t2: Option<f64>,
    },
    /// Simple Lindemann falloff.
    Lindemann {
        arrhenius_low: Arrhenius,
        arrhenius_high: Arrhenius,
    },
    /// Third-body enhanced reaction with collider efficiencies.
    ThirdBody {
        arrhenius_low: Arrhenius,
        #[serde(default)]
        efficiencies: BTreeMap<String, f64>,
    },
    /// Reference to another entry's index in the same sub-database.
    Link { target: i64 },
}

impl ModelData for KineticsData {
    fn format_label(&self) -> &'static str {
        match self {
            KineticsData::Arrhenius(_) => "Arrhenius",
            KineticsData::ArrheniusEp { .. } => "ArrheniusEP",
            KineticsData::MultiArrhenius { .. } => "MultiArrhenius",
            KineticsData::PDepArrhenius { .. } => "PDepArrhenius",
            KineticsData::Chebyshev { .. } => "Chebyshev",
            KineticsData::Troe { .. } => "Troe",
            KineticsData::Lindemann { .. } => "Lindemann",
            KineticsData::ThirdBody { .. } => "ThirdBody",
            KineticsData::Link { .. } => "Link",
        }
    }

    fn link_target(&self) -> Option<i64> {
        match self {
            KineticsData::Link { target } => Some(*target),
            _ => None,
        }
    }
}
