//! Conveying-gas composition.
//!
//! The carrier is ambient air (fixed 0.21/0.79 O₂/N₂ molar base) humidified
//! by a user-supplied moisture ratio. Moisture shifts the mass fractions,
//! which are then converted back to mole fractions to get the molar mass the
//! atmosphere model needs.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::input::GasInput;

/// Molar masses, g/mol.
const M_O2: f64 = 32.0;
const M_N2: f64 = 28.0;
const M_H2O: f64 = 18.0;

/// Dry-air molar fractions.
const Y_O2_DRY: f64 = 0.21;
const Y_N2_DRY: f64 = 0.79;

/// Humid-air composition and molar mass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasState {
    /// Mole fraction of oxygen.
    #[serde(rename = "y_O2")]
    pub y_o2: f64,
    /// Mole fraction of nitrogen.
    #[serde(rename = "y_N2")]
    pub y_n2: f64,
    /// Mole fraction of water vapor.
    #[serde(rename = "y_H2O")]
    pub y_h2o: f64,
    /// Mixture molar mass, g/mol.
    #[serde(rename = "PM")]
    pub pm: f64,
}

impl GasState {
    pub fn derive(gas: &GasInput) -> ModelResult<Self> {
        let w = gas.moisture_air;
        let dry_mass = Y_O2_DRY * M_O2 + Y_N2_DRY * M_N2;

        // Mass fractions of the humidified mixture
        let x_o2 = Y_O2_DRY * M_O2 / dry_mass / (1.0 + w);
        let x_n2 = Y_N2_DRY * M_N2 / dry_mass / (1.0 + w);
        let x_h2o = w / (1.0 + w);

        let den = x_o2 / M_O2 + x_n2 / M_N2 + x_h2o / M_H2O;
        if den == 0.0 {
            return Err(ModelError::Computation {
                what: "gas composition normalization denominator is zero".into(),
            });
        }

        let y_o2 = (x_o2 / M_O2) / den;
        let y_n2 = (x_n2 / M_N2) / den;
        let y_h2o = (x_h2o / M_H2O) / den;

        Ok(Self {
            y_o2,
            y_n2,
            y_h2o,
            pm: M_O2 * y_o2 + M_N2 * y_n2 + M_H2O * y_h2o,
        })
    }
}
