//! Conveying-gas flow state at the solids feed point.
//!
//! Combines the atmospheric, material, and pipe states with the operating
//! inputs into the quantities the pressure-drop integration starts from:
//! compressed gas density, solids loading ratio, gas mass flow, and the
//! standard-condition volumetric flows.

use pf_core::units::{consts, k_from_c, mps_to_fts};
use serde::{Deserialize, Serialize};

use crate::atmosphere::AtmosphericState;
use crate::error::{ModelError, ModelResult};
use crate::input::FlowInput;
use crate::material::MaterialState;
use crate::pipe::PipeGeometry;

/// Reference solids loading for the equilibrium-temperature blend.
const R0: f64 = 11.0;
/// Specific heat of the conveying gas, BTU/(lb·°F).
const CP_GAS: f64 = 0.24;
/// Specific heat of the solids, BTU/(lb·°F).
const CP_SOLIDS: f64 = 0.2213;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowState {
    #[serde(rename = "Vin_fts")]
    pub vin_fts: f64,
    /// Gas/solids equilibrium temperature from the fixed specific-heat blend.
    #[serde(rename = "Tequ_C")]
    pub tequ_c: f64,
    #[serde(rename = "Treq_C")]
    pub treq_c: f64,
    /// Gas density at feed pressure and equilibrium temperature, lb/ft³.
    pub ro_req_lbft3: f64,
    /// Pick-up velocity adjusted from the inlet gas temperature to the
    /// equilibrium temperature.
    #[serde(rename = "V_ms")]
    pub v_ms: f64,
    #[serde(rename = "V_fts")]
    pub v_fts: f64,
    /// Solids-to-gas mass loading ratio.
    #[serde(rename = "R_loading")]
    pub r_loading: f64,
    /// Gas mass flow, lb/s.
    pub mg_lbs: f64,
    #[serde(rename = "Preq_PSIG")]
    pub preq_psig: f64,
    #[serde(rename = "Q_std_m3h")]
    pub q_std_m3h: f64,
    #[serde(rename = "Q_stf_scfm")]
    pub q_stf_scfm: f64,
}

impl FlowState {
    pub fn derive(
        flow: &FlowInput,
        atmosphere: &AtmosphericState,
        material: &MaterialState,
        pipe: &PipeGeometry,
    ) -> ModelResult<Self> {
        if flow.vin_ms <= 0.0 {
            return Err(ModelError::InvalidInput {
                what: format!("pick-up velocity must be positive, got {} m/s", flow.vin_ms),
            });
        }
        let vin_fts = mps_to_fts(flow.vin_ms);

        let tequ_c = (CP_GAS * flow.tin_gas_c + R0 * CP_SOLIDS * material.t_solids_c)
            / (CP_GAS + R0 * CP_SOLIDS);
        let treq_c = tequ_c;

        if atmosphere.patm_bar <= 0.0 {
            return Err(ModelError::Computation {
                what: format!(
                    "atmospheric pressure must be positive, got {} bar",
                    atmosphere.patm_bar
                ),
            });
        }
        let treq_k = k_from_c(treq_c);
        if treq_k == 0.0 {
            return Err(ModelError::Computation {
                what: "equilibrium temperature at absolute zero".into(),
            });
        }

        let ro_req_lbft3 = atmosphere.ro_gas_us * (atmosphere.patm_bar + flow.preq_bar)
            / atmosphere.patm_bar
            * k_from_c(atmosphere.tamb_c)
            / treq_k;
        if ro_req_lbft3 <= 0.0 {
            return Err(ModelError::Computation {
                what: format!("non-physical compressed gas density {ro_req_lbft3} lb/ft3"),
            });
        }

        let v_ms = flow.vin_ms * k_from_c(flow.tin_gas_c) / treq_k;

        let mg_lbs = ro_req_lbft3 * pipe.a_ft2 * vin_fts;
        if mg_lbs == 0.0 {
            return Err(ModelError::Computation {
                what: "zero gas mass flow in the loading ratio".into(),
            });
        }
        let r_loading = material.ms_lbs / mg_lbs;

        let q_m3h = flow.vin_ms * pipe.a_m2 * 3600.0;
        let q_std_m3h = q_m3h * (flow.preq_bar + atmosphere.patm_bar) / consts::P_NORM_BAR
            * k_from_c(15.0)
            / treq_k;

        Ok(Self {
            vin_fts,
            tequ_c,
            treq_c,
            ro_req_lbft3,
            v_ms,
            v_fts: mps_to_fts(v_ms),
            r_loading,
            mg_lbs,
            preq_psig: flow.preq_bar * consts::BAR_TO_PSI,
            q_std_m3h,
            q_stf_scfm: q_std_m3h * consts::CFM_FROM_M3H,
        })
    }
}
