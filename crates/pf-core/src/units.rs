// pf-core/src/units.rs

//! Plain-f64 unit plumbing for the mixed US/metric correlation set.
//!
//! The conveying correlations are empirical and carry their units inside
//! their constants, so quantities stay plain `f64` tagged by a suffix
//! convention (`_ms`, `_fts`, `_psi`, `_bar`, `_lbft3`, ...).

/// Conversion factors and reference constants.
///
/// One immutable source for every factor the engine uses; nothing here is
/// configurable at runtime.
pub mod consts {
    /// Gravitational conversion constant, lbm·ft/(lbf·s²).
    pub const GC: f64 = 32.174;
    /// Gravitational acceleration, ft/s².
    pub const G: f64 = 32.2;
    /// Normal-condition reference pressure, bar.
    pub const P_NORM_BAR: f64 = 1.01;
    /// Normal-condition reference temperature, °C.
    pub const T_NORM_C: f64 = 0.0;
    /// Ideal-gas molar volume at normal conditions, L/mol.
    pub const MOLAR_VOLUME: f64 = 22.414;
    /// Empirical viscosity stand-in used by the Reynolds correlation,
    /// lb/(ft·s).
    pub const REYNOLDS_CONSTANT: f64 = 0.0002;

    pub const IN_TO_MM: f64 = 25.4;
    pub const IN_TO_FT: f64 = 1.0 / 12.0;
    pub const M_TO_FT: f64 = 3.280_839_895;
    pub const MPS_TO_FTS: f64 = 3.280_839_895;
    pub const KG_M3_TO_LB_FT3: f64 = 0.062_427_960_6;
    pub const TPH_TO_KGH: f64 = 1000.0;
    pub const KG_TO_LB: f64 = 2.204_622_621_85;
    pub const MBAR_TO_PSI: f64 = 0.014_503_773_8;
    pub const MBAR_TO_BAR: f64 = 0.001;
    pub const BAR_TO_PSI: f64 = 14.503_773_8;
    pub const CFM_FROM_M3H: f64 = 0.588_577_779;
}

#[inline]
pub fn c_to_f(t_c: f64) -> f64 {
    t_c * 9.0 / 5.0 + 32.0
}

/// Kelvin from Celsius.
#[inline]
pub fn k_from_c(t_c: f64) -> f64 {
    t_c + 273.15
}

#[inline]
pub fn in_to_mm(d_in: f64) -> f64 {
    d_in * consts::IN_TO_MM
}

#[inline]
pub fn in_to_ft(d_in: f64) -> f64 {
    d_in * consts::IN_TO_FT
}

#[inline]
pub fn m_to_ft(l_m: f64) -> f64 {
    l_m * consts::M_TO_FT
}

#[inline]
pub fn mps_to_fts(v_ms: f64) -> f64 {
    v_ms * consts::MPS_TO_FTS
}

#[inline]
pub fn fts_to_mps(v_fts: f64) -> f64 {
    v_fts / consts::MPS_TO_FTS
}

/// Circle area from a diameter, in the diameter's squared unit.
#[inline]
pub fn circle_area(d: f64) -> f64 {
    std::f64::consts::PI * d * d / 4.0
}
