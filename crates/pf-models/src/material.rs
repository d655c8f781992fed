//! Solids feed-rate conversions.

use pf_core::units::consts;
use serde::{Deserialize, Serialize};

use crate::input::MaterialInput;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialState {
    #[serde(rename = "T_solids_C")]
    pub t_solids_c: f64,
    pub ms_kgh: f64,
    pub ms_lbh: f64,
    /// Solids mass flow, lb/s. The rate every correlation downstream uses.
    pub ms_lbs: f64,
}

impl MaterialState {
    pub fn derive(material: &MaterialInput) -> Self {
        let ms_kgh = material.ms_tph * consts::TPH_TO_KGH;
        let ms_lbh = ms_kgh * consts::KG_TO_LB;
        Self {
            t_solids_c: material.t_solids_c,
            ms_kgh,
            ms_lbh,
            ms_lbs: ms_lbh / 3600.0,
        }
    }
}
