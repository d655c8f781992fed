//! Case execution services shared by the front ends.
//!
//! The execution functions never return `Err`: an engine failure becomes
//! the `success: false` envelope so every request produces a well-formed
//! response.

use std::path::Path;

use pf_models::CaseInput;
use pf_solver::{OperatingLimits, SearchSpace, SolverConfig, run_case};

use crate::error::{AppError, AppResult};
use crate::response::{ReportEntry, RunResponse, SuggestionResponse};

/// Load a case from a JSON file.
pub fn load_case(path: &Path) -> AppResult<CaseInput> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::CaseFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let case: CaseInput =
        serde_json::from_str(&content).map_err(|e| AppError::CaseParse(e.to_string()))?;

    Ok(case)
}

/// Save a case as pretty-printed JSON.
pub fn save_case(path: &Path, case: &CaseInput) -> AppResult<()> {
    let content = serde_json::to_string_pretty(case)?;

    std::fs::write(path, content).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Evaluate one case.
pub fn run(input: &CaseInput) -> RunResponse {
    match run_case(input) {
        Ok(report) => RunResponse::ok(report),
        Err(err) => RunResponse::failure(err.to_string()),
    }
}

/// Scan the design space for feasible (diameter, velocity) pairs.
pub fn suggest(
    input: &CaseInput,
    space: &SearchSpace,
    limits: OperatingLimits,
    cfg: SolverConfig,
) -> SuggestionResponse {
    match pf_solver::suggest(input, space, limits, cfg) {
        Ok(trials) => SuggestionResponse::ok(trials.into_iter().map(ReportEntry::from).collect()),
        Err(err) => SuggestionResponse::failure(err.to_string()),
    }
}
