//! Wire-format case input.
//!
//! Field names are pinned to the interchange format with `serde` renames;
//! Rust code sees snake_case. `Location`, `Humidity_pct`, `solids_material`
//! and `pipe_material` are informational and never enter the numerics.

use pf_core::{ensure_at_least, ensure_finite, ensure_non_negative};
use serde::{Deserialize, Serialize};

use crate::error::ModelResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtmosphericInput {
    #[serde(rename = "Location", default)]
    pub location: String,
    #[serde(rename = "Height_m")]
    pub height_m: f64,
    #[serde(rename = "Humidity_pct", default)]
    pub humidity_pct: f64,
    #[serde(rename = "Tamb_C")]
    pub tamb_c: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasInput {
    /// Moisture content of the conveying air, kg water per kg dry air.
    #[serde(rename = "Moisture_air")]
    pub moisture_air: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialInput {
    #[serde(default)]
    pub solids_material: String,
    /// Solids feed rate, metric tonnes per hour.
    pub ms_tph: f64,
    #[serde(rename = "T_solids_C")]
    pub t_solids_c: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeInput {
    #[serde(default)]
    pub pipe_material: String,
    /// Absolute roughness used by the friction correlation, ft.
    pub pipe_roughness: f64,
    #[serde(rename = "D_in")]
    pub d_in: f64,
    /// Multiplier applied to the solids-friction coefficient for design
    /// margin. Must be at least 1.
    pub oversizing_param: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowInput {
    /// Pick-up velocity at the feed point, m/s.
    #[serde(rename = "Vin_ms")]
    pub vin_ms: f64,
    #[serde(rename = "Tin_gas_C")]
    pub tin_gas_c: f64,
    /// Supply gauge pressure at the feed point, bar.
    #[serde(rename = "Preq_bar")]
    pub preq_bar: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Horizontal
    }
}

/// One routed run of pipe, with an optional trailing accessory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Length in metres.
    pub length: f64,
    #[serde(default)]
    pub orientation: Orientation,
    /// Free-text accessory label; empty means none.
    #[serde(default)]
    pub accessory: String,
}

/// A complete sizing case as received on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseInput {
    pub atmospheric: AtmosphericInput,
    pub gas: GasInput,
    pub material: MaterialInput,
    pub pipe: PipeInput,
    pub flow: FlowInput,
    pub segments: Vec<Segment>,
}

impl CaseInput {
    /// Run-level validation: range checks that do not need any derived state.
    /// Segment lengths are checked during discretization, where the failing
    /// index is known.
    pub fn validate(&self) -> ModelResult<()> {
        ensure_finite(self.atmospheric.height_m, "Height_m")?;
        ensure_finite(self.atmospheric.tamb_c, "Tamb_C")?;
        ensure_non_negative(self.gas.moisture_air, "Moisture_air")?;
        ensure_non_negative(self.material.ms_tph, "ms_tph")?;
        ensure_finite(self.material.t_solids_c, "T_solids_C")?;
        ensure_non_negative(self.pipe.pipe_roughness, "pipe_roughness")?;
        ensure_finite(self.pipe.d_in, "D_in")?;
        ensure_at_least(self.pipe.oversizing_param, 1.0, "oversizing_param")?;
        ensure_finite(self.flow.vin_ms, "Vin_ms")?;
        ensure_finite(self.flow.tin_gas_c, "Tin_gas_C")?;
        ensure_finite(self.flow.preq_bar, "Preq_bar")?;
        Ok(())
    }
}
