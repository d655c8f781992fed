//! Site atmosphere: barometric pressure and conveying-gas density at ambient
//! conditions.

use pf_core::units::{c_to_f, consts, k_from_c};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::gas::GasState;
use crate::input::AtmosphericInput;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtmosphericState {
    #[serde(rename = "Tamb_C")]
    pub tamb_c: f64,
    #[serde(rename = "Tamb_F")]
    pub tamb_f: f64,
    /// Barometric pressure at the site elevation, mbar.
    #[serde(rename = "Patm_mbar")]
    pub patm_mbar: f64,
    #[serde(rename = "Patm_PSI")]
    pub patm_psi: f64,
    #[serde(rename = "Patm_bar")]
    pub patm_bar: f64,
    /// Conveying-gas density at ambient pressure and temperature, lb/ft³.
    #[serde(rename = "ro_gas_us")]
    pub ro_gas_us: f64,
}

impl AtmosphericState {
    pub fn derive(atmospheric: &AtmosphericInput, gas: &GasState) -> ModelResult<Self> {
        let tamb_c = atmospheric.tamb_c;

        // International barometric formula, fitted exponent 5.25
        let patm_mbar = 1013.0 * (1.0 - atmospheric.height_m / 44300.0).powf(5.25);
        if !patm_mbar.is_finite() || patm_mbar <= 0.0 {
            return Err(ModelError::Computation {
                what: format!(
                    "barometric pressure is non-physical at {} m elevation",
                    atmospheric.height_m
                ),
            });
        }
        let patm_bar = patm_mbar * consts::MBAR_TO_BAR;

        let tamb_k = k_from_c(tamb_c);
        if tamb_k <= 0.0 {
            return Err(ModelError::Computation {
                what: "absolute ambient temperature is non-positive".into(),
            });
        }

        // Gas density at normal conditions, then rescaled to site conditions
        let ro_air_norm = gas.pm / consts::MOLAR_VOLUME;
        let ro_gas_metric =
            ro_air_norm / (consts::P_NORM_BAR / k_from_c(consts::T_NORM_C) * tamb_k / patm_bar);

        Ok(Self {
            tamb_c,
            tamb_f: c_to_f(tamb_c),
            patm_mbar,
            patm_psi: patm_mbar * consts::MBAR_TO_PSI,
            patm_bar,
            ro_gas_us: ro_gas_metric * consts::KG_M3_TO_LB_FT3,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::GasInput;

    fn dry_air() -> GasState {
        GasState::derive(&GasInput { moisture_air: 0.0 }).unwrap()
    }

    fn site(height_m: f64, tamb_c: f64) -> AtmosphericInput {
        AtmosphericInput {
            location: String::new(),
            height_m,
            humidity_pct: 0.0,
            tamb_c,
        }
    }

    #[test]
    fn sea_level_is_the_reference_pressure() {
        let atm = AtmosphericState::derive(&site(0.0, 20.0), &dry_air()).unwrap();
        assert_eq!(atm.patm_mbar, 1013.0);
        assert!((atm.patm_bar - 1.013).abs() < 1e-12);
        assert!((atm.patm_psi - 14.692323).abs() < 1e-4);
        assert_eq!(atm.tamb_f, 68.0);
    }

    #[test]
    fn pressure_falls_with_elevation() {
        let atm = AtmosphericState::derive(&site(202.08, 20.0), &dry_air()).unwrap();
        assert!((atm.patm_mbar - 988.97).abs() < 0.01);
        assert!(atm.patm_mbar < 1013.0);
    }

    #[test]
    fn sea_level_density_matches_air() {
        let atm = AtmosphericState::derive(&site(0.0, 20.0), &dry_air()).unwrap();
        // 1.2025 kg/m3 at 1.013 bar / 20 C
        assert!((atm.ro_gas_us - 0.075068).abs() < 1e-5);
    }

    #[test]
    fn stratospheric_elevation_is_rejected_not_nan() {
        assert!(AtmosphericState::derive(&site(44300.0, 20.0), &dry_air()).is_err());
        assert!(AtmosphericState::derive(&site(50000.0, 20.0), &dry_air()).is_err());
    }

    #[test]
    fn absolute_zero_ambient_is_rejected() {
        assert!(AtmosphericState::derive(&site(0.0, -273.15), &dry_air()).is_err());
    }
}
