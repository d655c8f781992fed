//! Section-by-section pressure-drop integration.
//!
//! Walks the discretized route from the feed point to the terminus. The
//! Reynolds number and friction factor are fixed from the feed-point state;
//! everything else chains: each section takes the previous section's outlet
//! pressure, density, and velocity as its inlet, so the gas expands and the
//! drop correlations see the local velocity.

use pf_core::units::{consts, fts_to_mps};
use pf_line::Route;
use pf_models::{AtmosphericState, FlowState, MaterialState, Orientation, PipeGeometry};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Friction factor used when the correlation has no valid operating point.
const FRICTION_FALLBACK: f64 = 0.005;

/// Everything computed for one section of the line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionPressureState {
    pub section_number: usize,
    pub orientation: Orientation,
    #[serde(rename = "L_ft")]
    pub l_ft: f64,
    #[serde(rename = "D_ft")]
    pub d_ft: f64,
    pub f: f64,
    /// Solids mass flux, lb/(s·ft²).
    #[serde(rename = "W")]
    pub w: f64,
    /// Solids loading ratio, constant along the line.
    #[serde(rename = "R")]
    pub r: f64,
    #[serde(rename = "Pin_psia")]
    pub pin_psia: f64,
    pub roin_gas: f64,
    #[serde(rename = "Vin_fts")]
    pub vin_fts: f64,
    /// Particle velocity, taken as 80% of the local gas velocity.
    #[serde(rename = "Vp_fts")]
    pub vp_fts: f64,
    #[serde(rename = "Fr")]
    pub fr: f64,
    /// Solids-friction coefficient from the Froude correlation, scaled by
    /// the oversizing parameter.
    #[serde(rename = "K")]
    pub k: f64,
    #[serde(rename = "dZ_ft")]
    pub dz_ft: f64,
    #[serde(rename = "Pdrop_psi")]
    pub pdrop_psi: f64,
    #[serde(rename = "Pout_psia")]
    pub pout_psia: f64,
    #[serde(rename = "Vout_fts")]
    pub vout_fts: f64,
    pub roout_gas: f64,
    #[serde(rename = "Pdrop_flowgas")]
    pub pdrop_flowgas: f64,
    #[serde(rename = "Pdrop_solidacc")]
    pub pdrop_solidacc: f64,
    #[serde(rename = "Pdrop_flowsol")]
    pub pdrop_flowsol: f64,
    #[serde(rename = "Pdrop_elvgas")]
    pub pdrop_elvgas: f64,
    #[serde(rename = "Pdrop_elvsol")]
    pub pdrop_elvsol: f64,
    #[serde(rename = "Pdrop_misc")]
    pub pdrop_misc: f64,
}

/// The integrated line: every section plus the totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineProfile {
    #[serde(rename = "sectionsData")]
    pub sections_data: Vec<SectionPressureState>,
    #[serde(rename = "dP_psi_total")]
    pub dp_psi_total: f64,
    #[serde(rename = "dP_bar_total")]
    pub dp_bar_total: f64,
    #[serde(rename = "final_Vout_fts")]
    pub final_vout_fts: f64,
    #[serde(rename = "final_Vout_ms")]
    pub final_vout_ms: f64,
    pub calculated_f: f64,
    pub calculated_re: f64,
}

/// Outlet state carried from one section into the next.
#[derive(Clone, Copy)]
struct Carry {
    pout_psia: f64,
    roout_gas: f64,
    vout_fts: f64,
    vp_fts: f64,
}

/// Integrate the pressure drop along `route`.
///
/// Fails with [`EngineError::NonPhysicalPressure`] the moment a section's
/// outlet pressure reaches zero absolute; the failing section number is
/// carried in the variant.
pub fn integrate(
    route: &Route,
    atmosphere: &AtmosphericState,
    material: &MaterialState,
    pipe: &PipeGeometry,
    flow: &FlowState,
    oversizing_param: f64,
) -> EngineResult<LineProfile> {
    let d_ft = pipe.d_ft;
    let vin_fts_initial = flow.vin_fts;
    let ro_req = flow.ro_req_lbft3;

    let re = vin_fts_initial * ro_req * d_ft / consts::REYNOLDS_CONSTANT;

    let friction_factor = if re > 0.0 && d_ft > 0.0 {
        let log_arg = pipe.pipe_roughness / (3.7 * d_ft) + 7.0 / re;
        if log_arg <= 0.0 {
            return Err(EngineError::Computation {
                what: format!("friction correlation log argument {log_arg} is not positive"),
            });
        }
        let ln_val = log_arg.ln();
        if ln_val != 0.0 {
            0.331 / (ln_val * ln_val)
        } else {
            FRICTION_FALLBACK
        }
    } else {
        FRICTION_FALLBACK
    };
    if friction_factor <= 0.0 {
        return Err(EngineError::Computation {
            what: format!("non-positive friction factor {friction_factor}"),
        });
    }

    let w = material.ms_lbs / pipe.a_ft2;
    let r = flow.r_loading;

    let mut sections_data: Vec<SectionPressureState> = Vec::with_capacity(route.sections.len());
    let mut carry: Option<Carry> = None;

    for section in &route.sections {
        let first = carry.is_none();
        let (pin_psia, roin_gas, vin_fts) = match carry {
            None => (
                atmosphere.patm_psi + flow.preq_psig,
                ro_req,
                vin_fts_initial,
            ),
            Some(prev) => (prev.pout_psia, prev.roout_gas, prev.vout_fts),
        };
        if vin_fts <= 0.0 {
            return Err(EngineError::Computation {
                what: format!(
                    "gas velocity became non-positive in section {}",
                    section.section_number
                ),
            });
        }

        let vp_fts = 0.8 * vin_fts;
        let vp_ms = 0.8 * fts_to_mps(vin_fts);

        let fr = if pipe.d_mm > 0.0 {
            vp_ms / (9.81 * pipe.d_mm / 1000.0).sqrt()
        } else {
            0.0
        };
        let k = if r <= 0.0 || fr <= 0.0 {
            0.0
        } else {
            87.0 / (r.powf(0.4) * fr * fr) * oversizing_param
        };

        let l_ft = section.eq_length_ft;
        let dz_ft = if section.orientation == Orientation::Vertical {
            l_ft
        } else {
            0.0
        };

        let pdrop_flowgas = if 9266.0 * d_ft > 0.0 {
            4.0 * friction_factor * l_ft * roin_gas * vin_fts * vin_fts / (9266.0 * d_ft)
        } else {
            0.0
        };
        let pdrop_solidacc = match carry {
            None => w * vp_fts / 4640.0,
            Some(prev) => w * (vp_fts - prev.vp_fts) / 4640.0,
        };
        let pdrop_flowsol = pdrop_flowgas * k * r;
        let pdrop_elvgas = dz_ft * roin_gas / (144.0 * consts::GC);
        let elvsol_denom = 144.0 * vp_fts * consts::GC;
        let pdrop_elvsol = if dz_ft > 0.0 && elvsol_denom != 0.0 {
            dz_ft * w * consts::G / elvsol_denom
        } else {
            0.0
        };
        let pdrop_misc = if first { 0.5 } else { 0.0 };

        let pdrop_psi = pdrop_flowgas
            + pdrop_solidacc
            + pdrop_flowsol
            + pdrop_elvgas
            + pdrop_elvsol
            + pdrop_misc;
        let pout_psia = pin_psia - pdrop_psi;
        if pout_psia <= 0.0 {
            return Err(EngineError::NonPhysicalPressure {
                section: section.section_number,
            });
        }

        // Isothermal expansion of the gas into the lower outlet pressure.
        let vout_fts = if pout_psia > 0.0 && pin_psia > 0.0 {
            (vin_fts * pin_psia / pout_psia).max(0.0)
        } else {
            0.0
        };
        let roout_denom = pipe.a_ft2 * vout_fts;
        let roout_gas = if roout_denom > 0.0 {
            (flow.mg_lbs / roout_denom).max(0.0)
        } else {
            0.0
        };

        carry = Some(Carry {
            pout_psia,
            roout_gas,
            vout_fts,
            vp_fts,
        });

        sections_data.push(SectionPressureState {
            section_number: section.section_number,
            orientation: section.orientation,
            l_ft,
            d_ft,
            f: friction_factor,
            w,
            r,
            pin_psia,
            roin_gas,
            vin_fts,
            vp_fts,
            fr,
            k,
            dz_ft,
            pdrop_psi,
            pout_psia,
            vout_fts,
            roout_gas,
            pdrop_flowgas,
            pdrop_solidacc,
            pdrop_flowsol,
            pdrop_elvgas,
            pdrop_elvsol,
            pdrop_misc,
        });
    }

    let dp_psi_total: f64 = sections_data.iter().map(|s| s.pdrop_psi).sum();
    let dp_bar_total = dp_psi_total / consts::BAR_TO_PSI;
    let (final_vout_fts, final_vout_ms) = match sections_data.last() {
        Some(last) => (last.vout_fts, fts_to_mps(last.vout_fts)),
        None => (0.0, 0.0),
    };

    Ok(LineProfile {
        sections_data,
        dp_psi_total,
        dp_bar_total,
        final_vout_fts,
        final_vout_ms,
        calculated_f: friction_factor,
        calculated_re: re,
    })
}
