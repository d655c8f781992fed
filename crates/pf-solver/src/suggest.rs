//! Design-space search over pipe diameter and pick-up velocity.
//!
//! Each candidate diameter is scanned at ascending pick-up velocities until
//! an operating point converges inside the limits. Raising the velocity
//! dilutes the solids loading, so a loading failure is worth scanning past;
//! an outlet-velocity or stability failure only gets worse and ends the
//! scan. Diameters are independent and run in parallel.

use pf_models::CaseInput;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::equilibrium::{
    FailureKind, OperatingLimits, SolverConfig, TrialOutcome, find_equilibrium,
};
use crate::error::{EngineError, EngineResult};

/// Inclusive slack on the velocity grid endpoint.
const VELOCITY_EPS: f64 = 1e-9;

/// The candidate grid.
#[derive(Debug, Clone)]
pub struct SearchSpace {
    /// Nominal bores to try, in inches, reported in this order.
    pub diameters_in: Vec<f64>,
    pub vin_min_ms: f64,
    /// Upper velocity bound, inclusive.
    pub vin_max_ms: f64,
    pub vin_step_ms: f64,
}

impl Default for SearchSpace {
    fn default() -> Self {
        Self {
            diameters_in: vec![4.0, 5.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0],
            vin_min_ms: 9.0,
            vin_max_ms: 20.0,
            vin_step_ms: 0.5,
        }
    }
}

impl SearchSpace {
    /// A non-positive step would scan forever; reject it up front.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.vin_step_ms.is_finite() || self.vin_step_ms <= 0.0 {
            return Err(EngineError::Search {
                what: format!("velocity step {} must be a positive number", self.vin_step_ms),
            });
        }
        if !self.vin_min_ms.is_finite() || !self.vin_max_ms.is_finite() {
            return Err(EngineError::Search {
                what: "velocity bounds must be finite".to_string(),
            });
        }
        Ok(())
    }

    /// The velocity grid, endpoint included. Indexed rather than
    /// accumulated so the step does not drift.
    fn velocities(&self) -> impl Iterator<Item = f64> + '_ {
        let min = self.vin_min_ms;
        let step = self.vin_step_ms;
        let max = self.vin_max_ms;
        (0u64..)
            .map(move |i| min + i as f64 * step)
            .take_while(move |v| *v <= max + VELOCITY_EPS)
    }
}

/// The verdict for one candidate diameter.
#[derive(Debug, Clone)]
pub struct DiameterTrial {
    pub d_in: f64,
    pub outcome: TrialOutcome,
}

/// Scan the whole design space. One entry per diameter, in input order;
/// a diameter with no feasible point reports its first failure rather
/// than aborting the search.
pub fn suggest(
    base: &CaseInput,
    space: &SearchSpace,
    limits: OperatingLimits,
    cfg: SolverConfig,
) -> EngineResult<Vec<DiameterTrial>> {
    space.validate()?;
    Ok(space
        .diameters_in
        .par_iter()
        .map(|&d_in| scan_diameter(base, d_in, space, limits, cfg))
        .collect())
}

fn scan_diameter(
    base: &CaseInput,
    d_in: f64,
    space: &SearchSpace,
    limits: OperatingLimits,
    cfg: SolverConfig,
) -> DiameterTrial {
    let mut first_failure: Option<TrialOutcome> = None;

    for vin_ms in space.velocities() {
        match find_equilibrium(base, d_in, vin_ms, limits, cfg) {
            TrialOutcome::Success(solution) => {
                info!(d_in, vin_ms, preq_bar = solution.preq_bar, "feasible operating point");
                return DiameterTrial {
                    d_in,
                    outcome: TrialOutcome::Success(solution),
                };
            }
            TrialOutcome::Fail { kind, reason } => {
                debug!(d_in, vin_ms, kind = ?kind, %reason, "trial failed");
                first_failure.get_or_insert(TrialOutcome::Fail { kind, reason });
                match kind {
                    FailureKind::LoadingExceeded => {}
                    FailureKind::VelocityExceeded | FailureKind::Unstable => break,
                }
            }
        }
    }

    warn!(d_in, "no feasible operating point in the scanned range");
    let outcome = first_failure.unwrap_or_else(|| TrialOutcome::Fail {
        kind: FailureKind::LoadingExceeded,
        reason: format!(
            "solids loading stays above {} through the scanned velocities",
            limits.max_r_loading
        ),
    });
    DiameterTrial { d_in, outcome }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::tests_support::{case, seg};
    use pf_models::Orientation;

    fn short_case() -> CaseInput {
        case(vec![seg(1.0, Orientation::Horizontal)])
    }

    fn expect_fail(trial: &DiameterTrial) -> FailureKind {
        match &trial.outcome {
            TrialOutcome::Fail { kind, .. } => *kind,
            TrialOutcome::Success(_) => panic!("diameter {} unexpectedly succeeded", trial.d_in),
        }
    }

    #[test]
    fn velocity_grid_is_inclusive_of_the_endpoint() {
        let space = SearchSpace::default();
        let grid: Vec<f64> = space.velocities().collect();
        assert_eq!(grid.len(), 23);
        assert_eq!(grid[0], 9.0);
        assert_eq!(*grid.last().unwrap(), 20.0);
    }

    #[test]
    fn easy_case_succeeds_at_the_lowest_velocity_everywhere() {
        let space = SearchSpace::default();
        let report = suggest(
            &short_case(),
            &space,
            OperatingLimits::default(),
            SolverConfig::default(),
        )
        .unwrap();

        assert_eq!(report.len(), space.diameters_in.len());
        for (trial, d_in) in report.iter().zip(&space.diameters_in) {
            assert_eq!(trial.d_in, *d_in);
            match &trial.outcome {
                TrialOutcome::Success(sol) => {
                    assert_eq!(sol.d_in, *d_in);
                    assert_eq!(sol.vin_ms, 9.0);
                }
                TrialOutcome::Fail { reason, .. } => {
                    panic!("diameter {d_in} failed: {reason}")
                }
            }
        }
    }

    #[test]
    fn loading_failures_scan_on_to_a_feasible_velocity() {
        // At 9.0 m/s the converged loading is ~3.05; the iterates dip under
        // the limit only at 9.5 m/s, so a loading failure must not end the
        // scan.
        let space = SearchSpace {
            diameters_in: vec![4.0],
            ..SearchSpace::default()
        };
        let limits = OperatingLimits {
            max_r_loading: 2.95,
            max_vout_ms: 35.0,
        };
        let report =
            suggest(&short_case(), &space, limits, SolverConfig::default()).unwrap();
        assert_eq!(report.len(), 1);
        match &report[0].outcome {
            TrialOutcome::Success(sol) => {
                assert_eq!(sol.vin_ms, 9.5);
                assert!(sol.r_loading < 2.95);
            }
            TrialOutcome::Fail { reason, .. } => panic!("expected a success at 9.5: {reason}"),
        }
    }

    #[test]
    fn hopeless_loading_reports_the_first_failure() {
        let limits = OperatingLimits {
            max_r_loading: 0.01,
            max_vout_ms: 35.0,
        };
        let report = suggest(
            &short_case(),
            &SearchSpace::default(),
            limits,
            SolverConfig::default(),
        )
        .unwrap();
        assert_eq!(report.len(), 9);
        for trial in &report {
            assert_eq!(expect_fail(trial), FailureKind::LoadingExceeded);
        }
    }

    #[test]
    fn velocity_failures_end_the_scan() {
        let limits = OperatingLimits {
            max_r_loading: 1e12,
            max_vout_ms: 1.0,
        };
        let report = suggest(
            &short_case(),
            &SearchSpace::default(),
            limits,
            SolverConfig::default(),
        )
        .unwrap();
        for trial in &report {
            assert_eq!(expect_fail(trial), FailureKind::VelocityExceeded);
        }
    }

    #[test]
    fn empty_velocity_range_still_reports_the_diameter() {
        let space = SearchSpace {
            diameters_in: vec![4.0],
            vin_min_ms: 10.0,
            vin_max_ms: 9.0,
            vin_step_ms: 0.5,
        };
        let report = suggest(
            &short_case(),
            &space,
            OperatingLimits::default(),
            SolverConfig::default(),
        )
        .unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(expect_fail(&report[0]), FailureKind::LoadingExceeded);
    }

    #[test]
    fn bad_grids_are_rejected() {
        for bad in [0.0, -0.5, f64::NAN] {
            let space = SearchSpace {
                vin_step_ms: bad,
                ..SearchSpace::default()
            };
            assert!(suggest(
                &short_case(),
                &space,
                OperatingLimits::default(),
                SolverConfig::default()
            )
            .is_err());
        }
        let space = SearchSpace {
            vin_max_ms: f64::INFINITY,
            ..SearchSpace::default()
        };
        assert!(space.validate().is_err());
    }
}
