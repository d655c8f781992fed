//! Wire envelopes returned to the front ends.
//!
//! The `success` flag plus an optional payload or error message; absent
//! halves are omitted from the JSON entirely.

use pf_solver::{CaseReport, DesignSolution, DiameterTrial, TrialOutcome};
use serde::{Deserialize, Serialize};

/// Envelope for a single case run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<CaseReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunResponse {
    pub fn ok(report: CaseReport) -> Self {
        Self {
            success: true,
            results: Some(report),
            error: None,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            success: false,
            results: None,
            error: Some(message),
        }
    }
}

/// Envelope for the design-space search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<Vec<ReportEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SuggestionResponse {
    pub fn ok(report: Vec<ReportEntry>) -> Self {
        Self {
            success: true,
            report: Some(report),
            error: None,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            success: false,
            report: None,
            error: Some(message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    Success,
    Fail,
}

/// One row of the sizing report, one per candidate diameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    #[serde(rename = "D_in")]
    pub d_in: f64,
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<DesignSolution>,
}

impl From<DiameterTrial> for ReportEntry {
    fn from(trial: DiameterTrial) -> Self {
        match trial.outcome {
            TrialOutcome::Success(solution) => Self {
                d_in: trial.d_in,
                status: ReportStatus::Success,
                reason: None,
                solution: Some(solution),
            },
            TrialOutcome::Fail { reason, .. } => Self {
                d_in: trial.d_in,
                status: ReportStatus::Fail,
                reason: Some(reason),
                solution: None,
            },
        }
    }
}
