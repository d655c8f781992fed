//! One-shot case evaluation.
//!
//! Chains the model derivations in dependency order (gas, atmosphere,
//! material, pipe, flow), discretizes the route, and integrates the
//! pressure drop. The report carries every intermediate block so a caller
//! can serialize the whole calculation trail.

use pf_core::units::c_to_f;
use pf_line::{Route, build_route};
use pf_models::{AtmosphericState, CaseInput, FlowState, GasState, MaterialState, PipeGeometry};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::profile::{LineProfile, integrate};

/// Headline numbers pulled out of the detailed blocks for quick reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryData {
    /// Pick-up velocity as entered, m/s.
    pub vin_ms: f64,
    pub vin_fts: f64,
    pub solids_material: String,
    pub ms_tph: f64,
    /// Gas temperature required at the feed point, °C.
    pub final_temp_c: f64,
    pub final_temp_f: f64,
    pub q_std_m3h: f64,
    pub q_stf_scfm: f64,
    pub preq_psi: f64,
    pub patm_psi: f64,
}

/// Everything a case run produces. Declaration order is serialization
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    pub inputs: CaseInput,
    pub atmospheric: AtmosphericState,
    pub gas: GasState,
    pub material: MaterialState,
    pub pipe: PipeGeometry,
    pub flow: FlowState,
    pub segmentation: Route,
    #[serde(rename = "pressureDrop")]
    pub pressure_drop: LineProfile,
    #[serde(rename = "summaryData")]
    pub summary_data: SummaryData,
}

/// Evaluate one complete case.
///
/// Pure in its input: two calls with the same `CaseInput` produce
/// identical reports. Fails with the typed error of whichever stage
/// rejected the case; in particular a line that outruns its supply
/// pressure surfaces as [`EngineError::NonPhysicalPressure`] so callers
/// can react to it.
///
/// [`EngineError::NonPhysicalPressure`]: crate::error::EngineError::NonPhysicalPressure
pub fn run_case(input: &CaseInput) -> EngineResult<CaseReport> {
    input.validate()?;

    let gas = GasState::derive(&input.gas)?;
    let atmospheric = AtmosphericState::derive(&input.atmospheric, &gas)?;
    let material = MaterialState::derive(&input.material);
    let pipe = PipeGeometry::derive(&input.pipe)?;
    let flow = FlowState::derive(&input.flow, &atmospheric, &material, &pipe)?;
    let segmentation = build_route(&input.segments)?;
    let pressure_drop = integrate(
        &segmentation,
        &atmospheric,
        &material,
        &pipe,
        &flow,
        input.pipe.oversizing_param,
    )?;

    let summary_data = SummaryData {
        vin_ms: input.flow.vin_ms,
        vin_fts: flow.vin_fts,
        solids_material: input.material.solids_material.clone(),
        ms_tph: input.material.ms_tph,
        final_temp_c: flow.treq_c,
        final_temp_f: c_to_f(flow.treq_c),
        q_std_m3h: flow.q_std_m3h,
        q_stf_scfm: flow.q_stf_scfm,
        preq_psi: flow.preq_psig,
        patm_psi: atmospheric.patm_psi,
    };

    Ok(CaseReport {
        inputs: input.clone(),
        atmospheric,
        gas,
        material,
        pipe,
        flow,
        segmentation,
        pressure_drop,
        summary_data,
    })
}
