//! Smoke tests for the pf-app service layer.

use pf_app::{load_case, run, sample_case, save_case, suggest};
use pf_solver::{OperatingLimits, SearchSpace, SolverConfig};

#[test]
fn run_wraps_success_in_the_envelope() {
    let response = run(&sample_case());
    assert!(response.success);
    assert!(response.results.is_some());
    assert!(response.error.is_none());

    let json = serde_json::to_string(&response).expect("envelope serializes");
    assert!(json.starts_with("{\"success\":true,\"results\":"));
    assert!(!json.contains("\"error\""));
}

#[test]
fn run_wraps_failures_without_erroring() {
    let mut case = sample_case();
    case.pipe.oversizing_param = 0.0;

    let response = run(&case);
    assert!(!response.success);
    assert!(response.results.is_none());
    let message = response.error.clone().expect("failure carries a message");
    assert!(message.contains("oversizing_param"), "got: {message}");

    // The absent payload is omitted from the JSON entirely.
    let json = serde_json::to_string(&response).expect("envelope serializes");
    assert!(json.starts_with("{\"success\":false,\"error\":"));
    assert!(!json.contains("\"results\""));
}

#[test]
fn bad_search_grid_becomes_a_failure_envelope() {
    let space = SearchSpace {
        vin_step_ms: 0.0,
        ..SearchSpace::default()
    };
    let response = suggest(
        &sample_case(),
        &space,
        OperatingLimits::default(),
        SolverConfig::default(),
    );
    assert!(!response.success);
    assert!(response.report.is_none());
    let message = response.error.expect("failure carries a message");
    assert!(message.contains("search space"), "got: {message}");
}

#[test]
fn cases_survive_a_save_and_load_round_trip() {
    let path = std::env::temp_dir().join(format!("pneuflow-case-{}.json", std::process::id()));
    let case = sample_case();

    save_case(&path, &case).expect("save succeeds");
    let loaded = load_case(&path).expect("load succeeds");
    let _ = std::fs::remove_file(&path);

    let a = serde_json::to_string(&case).expect("serialize original");
    let b = serde_json::to_string(&loaded).expect("serialize loaded");
    assert_eq!(a, b);
}

#[test]
fn missing_case_file_reports_the_path() {
    let path = std::env::temp_dir().join("pneuflow-does-not-exist.json");
    let err = load_case(&path).expect_err("missing file must fail");
    assert!(err.to_string().contains("pneuflow-does-not-exist.json"));
}
