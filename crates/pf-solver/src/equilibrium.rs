//! Equilibrium supply-pressure solver.
//!
//! The required pressure is self-consistent when the drop the line produces
//! at that pressure equals the pressure itself. A damped fixed-point step
//! bootstraps the iteration; once two points exist a secant update takes
//! over. Non-physical pressure failures are not fatal: the guess steps up
//! by a fixed increment (resetting the secant history) until the line fits
//! or the guess passes the cap.

use pf_models::CaseInput;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::case::run_case;
use crate::error::EngineError;

/// Numeric knobs of the equilibrium iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    pub max_iterations: usize,
    /// Convergence tolerance on the pressure error, bar.
    pub tol_bar: f64,
    pub initial_guess_bar: f64,
    /// Hard cap on any guess; beyond it the trial is declared unstable.
    pub pressure_cap_bar: f64,
    /// Step added to the guess after a non-physical-pressure failure, bar.
    pub retry_step_bar: f64,
    /// Fraction of the error applied by the plain damped update.
    pub damping: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            tol_bar: 1e-3,
            initial_guess_bar: 0.5,
            pressure_cap_bar: 10.0,
            retry_step_bar: 0.1,
            damping: 0.8,
        }
    }
}

/// Operating constraints screened on every converging trial.
#[derive(Debug, Clone, Copy)]
pub struct OperatingLimits {
    pub max_r_loading: f64,
    pub max_vout_ms: f64,
}

impl Default for OperatingLimits {
    fn default() -> Self {
        Self {
            max_r_loading: 15.0,
            max_vout_ms: 35.0,
        }
    }
}

/// A feasible operating point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DesignSolution {
    #[serde(rename = "D_in")]
    pub d_in: f64,
    #[serde(rename = "Vin_ms")]
    pub vin_ms: f64,
    #[serde(rename = "Vout_ms")]
    pub vout_ms: f64,
    #[serde(rename = "R_loading")]
    pub r_loading: f64,
    /// The resolved supply pressure, equal to the drop it produces.
    #[serde(rename = "Preq_bar")]
    pub preq_bar: f64,
}

/// Why a trial failed. The search branches on this, never on the reason
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    LoadingExceeded,
    VelocityExceeded,
    Unstable,
}

/// Outcome of one (diameter, velocity) trial.
#[derive(Debug, Clone)]
pub enum TrialOutcome {
    Success(DesignSolution),
    Fail { kind: FailureKind, reason: String },
}

impl TrialOutcome {
    fn unstable(reason: String) -> Self {
        TrialOutcome::Fail {
            kind: FailureKind::Unstable,
            reason,
        }
    }

    fn over_cap(cap_bar: f64) -> Self {
        Self::unstable(format!("equilibrium pressure exceeds {cap_bar} bar"))
    }
}

/// Find the supply pressure at which `base` (with the pipe diameter and
/// pick-up velocity overridden) is in equilibrium with its own drop.
pub fn find_equilibrium(
    base: &CaseInput,
    d_in: f64,
    vin_ms: f64,
    limits: OperatingLimits,
    cfg: SolverConfig,
) -> TrialOutcome {
    let mut case = base.clone();
    case.pipe.d_in = d_in;
    case.flow.vin_ms = vin_ms;

    let mut guess = cfg.initial_guess_bar;
    let mut last_error = 0.0;
    let mut last_guess = 0.0;

    for iter in 0..cfg.max_iterations {
        case.flow.preq_bar = guess;

        let report = match run_case(&case) {
            Ok(report) => report,
            Err(EngineError::NonPhysicalPressure { section }) => {
                debug!(d_in, vin_ms, iter, guess, section, "line does not fit, raising the guess");
                guess += cfg.retry_step_bar;
                last_error = 0.0;
                last_guess = 0.0;
                if guess > cfg.pressure_cap_bar {
                    return TrialOutcome::over_cap(cfg.pressure_cap_bar);
                }
                continue;
            }
            Err(err) => {
                return TrialOutcome::unstable(format!("calculation failed: {err}"));
            }
        };

        // Constraints are screened before convergence; an operating point
        // that violates them is not worth refining.
        if report.flow.r_loading > limits.max_r_loading {
            return TrialOutcome::Fail {
                kind: FailureKind::LoadingExceeded,
                reason: format!(
                    "solids loading {:.2} exceeds {}",
                    report.flow.r_loading, limits.max_r_loading
                ),
            };
        }
        if report.pressure_drop.final_vout_ms >= limits.max_vout_ms {
            return TrialOutcome::Fail {
                kind: FailureKind::VelocityExceeded,
                reason: format!(
                    "outlet velocity {:.2} m/s reaches the {} m/s limit",
                    report.pressure_drop.final_vout_ms, limits.max_vout_ms
                ),
            };
        }

        let dp_bar_total = report.pressure_drop.dp_bar_total;
        let error = dp_bar_total - guess;
        debug!(d_in, vin_ms, iter, guess, error, "equilibrium iteration");

        if error.abs() < cfg.tol_bar {
            return TrialOutcome::Success(DesignSolution {
                d_in,
                vin_ms,
                vout_ms: report.pressure_drop.final_vout_ms,
                r_loading: report.flow.r_loading,
                preq_bar: dp_bar_total,
            });
        }

        let pre_update_guess = guess;
        if iter > 0 && (error - last_error).abs() > 1e-5 {
            let mut delta_guess = guess - last_guess;
            if delta_guess.abs() < 1e-6 {
                delta_guess = 0.1;
            }
            let mut error_diff = error - last_error;
            if error_diff.abs() < 1e-6 {
                error_diff = 0.1;
            }
            guess -= error * delta_guess / error_diff;
        } else {
            guess += cfg.damping * error;
        }

        if guess < 0.01 {
            // Undershot into the unusable range; restart just above the
            // drop the last run produced.
            guess = dp_bar_total + 0.1;
        }
        if guess > cfg.pressure_cap_bar {
            return TrialOutcome::over_cap(cfg.pressure_cap_bar);
        }

        last_guess = pre_update_guess;
        last_error = error;
    }

    TrialOutcome::unstable("did not converge".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::tests_support::{case, seg};
    use pf_models::Orientation;

    fn short_case() -> CaseInput {
        case(vec![seg(1.0, Orientation::Horizontal)])
    }

    fn wide_open_limits() -> OperatingLimits {
        OperatingLimits {
            max_r_loading: 1e12,
            max_vout_ms: 1e12,
        }
    }

    #[test]
    fn converges_on_a_short_line() {
        let outcome = find_equilibrium(
            &short_case(),
            4.0,
            9.0,
            OperatingLimits::default(),
            SolverConfig::default(),
        );
        match outcome {
            TrialOutcome::Success(sol) => {
                assert_eq!(sol.d_in, 4.0);
                assert_eq!(sol.vin_ms, 9.0);
                // Dominated by the fixed feed-zone charge of ~0.5 psi.
                assert!((sol.preq_bar - 0.0377).abs() < 2e-3);
                assert!(sol.vout_ms > 9.2 && sol.vout_ms < 9.5);
                assert!(sol.r_loading > 2.9 && sol.r_loading < 3.2);
            }
            TrialOutcome::Fail { reason, .. } => panic!("expected convergence, got: {reason}"),
        }
    }

    #[test]
    fn loading_limit_fails_fast() {
        let outcome = find_equilibrium(
            &short_case(),
            4.0,
            9.0,
            OperatingLimits {
                max_r_loading: 0.5,
                max_vout_ms: 35.0,
            },
            SolverConfig::default(),
        );
        match outcome {
            TrialOutcome::Fail { kind, .. } => assert_eq!(kind, FailureKind::LoadingExceeded),
            TrialOutcome::Success(_) => panic!("loading screen should have fired"),
        }
    }

    #[test]
    fn velocity_limit_fails_fast() {
        let outcome = find_equilibrium(
            &short_case(),
            4.0,
            9.0,
            OperatingLimits {
                max_r_loading: 1e12,
                max_vout_ms: 1.0,
            },
            SolverConfig::default(),
        );
        match outcome {
            TrialOutcome::Fail { kind, .. } => assert_eq!(kind, FailureKind::VelocityExceeded),
            TrialOutcome::Success(_) => panic!("velocity screen should have fired"),
        }
    }

    #[test]
    fn retries_through_non_physical_guesses() {
        // At 630 t/h in a 4 in line the feed-zone acceleration alone is
        // ~25 psi, more than the whole head at the default 0.5 bar guess.
        // The solver has to step up past 0.8 bar before the line fits,
        // then converge from there.
        let mut input = short_case();
        input.material.ms_tph = 630.0;
        input.flow.vin_ms = 10.0;
        let outcome =
            find_equilibrium(&input, 4.0, 10.0, wide_open_limits(), SolverConfig::default());
        match outcome {
            TrialOutcome::Success(sol) => {
                assert!(
                    sol.preq_bar > 1.2 && sol.preq_bar < 2.5,
                    "unexpected equilibrium {}",
                    sol.preq_bar
                );
            }
            TrialOutcome::Fail { reason, .. } => panic!("expected recovery, got: {reason}"),
        }
    }

    #[test]
    fn impossible_line_is_unstable() {
        // Acceleration alone needs ~2000 psi; no guess below the cap fits.
        let mut input = short_case();
        input.material.ms_tph = 50_000.0;
        input.flow.vin_ms = 10.0;
        let outcome =
            find_equilibrium(&input, 4.0, 10.0, wide_open_limits(), SolverConfig::default());
        match outcome {
            TrialOutcome::Fail { kind, .. } => assert_eq!(kind, FailureKind::Unstable),
            TrialOutcome::Success(_) => panic!("an impossible line converged"),
        }
    }

    #[test]
    fn retry_past_the_cap_is_unstable() {
        let mut input = short_case();
        input.material.ms_tph = 50_000.0;
        input.flow.vin_ms = 10.0;
        let cfg = SolverConfig {
            initial_guess_bar: 9.95,
            ..SolverConfig::default()
        };
        let outcome = find_equilibrium(&input, 4.0, 10.0, wide_open_limits(), cfg);
        match outcome {
            TrialOutcome::Fail { kind, .. } => assert_eq!(kind, FailureKind::Unstable),
            TrialOutcome::Success(_) => panic!("the cap should have fired"),
        }
    }

    #[test]
    fn hard_errors_are_not_retried() {
        let outcome = find_equilibrium(
            &short_case(),
            -1.0,
            9.0,
            OperatingLimits::default(),
            SolverConfig::default(),
        );
        match outcome {
            TrialOutcome::Fail { kind, .. } => assert_eq!(kind, FailureKind::Unstable),
            TrialOutcome::Success(_) => panic!("a negative diameter cannot converge"),
        }
    }
}
