use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{error, info};
use triage_core::models::TriageResult;
use triage_core::{TriageEngine, TriageError};

#[derive(Debug, Clone, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchOutcome {
    Ok { result: TriageResult },
    Invalid { message: String },
    Failed { message: String },
}

impl BatchOutcome {
    fn from_evaluation(outcome: Result<TriageResult, TriageError>) -> Self {
        match outcome {
            Ok(result) => Self::Ok { result },
            Err(err) if err.is_validation() => Self::Invalid {
                message: err.to_string(),
            },
            Err(err) => {
                error!(error = %err, "triage failed");
                Self::Failed {
                    message: crate::report::GENERIC_FAILURE.to_string(),
                }
            }
        }
    }
}

pub fn load_requests(path: &Path) -> Result<Vec<BatchRequest>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read batch file {}", path.display()))?;
    let requests: Vec<BatchRequest> =
        serde_json::from_str(&content).context("parse batch file")?;
    Ok(requests)
}

/// Evaluates every request on its own blocking task; outcomes keep input order.
pub async fn run_batch(engine: &TriageEngine, requests: Vec<BatchRequest>) -> Vec<BatchOutcome> {
    let total = requests.len();
    let handles: Vec<_> = requests
        .into_iter()
        .map(|req| {
            let engine = engine.clone();
            tokio::task::spawn_blocking(move || {
                engine.evaluate(&req.category, &req.description, &req.location)
            })
        })
        .collect();

    let mut outcomes = Vec::with_capacity(total);
    for (idx, handle) in handles.into_iter().enumerate() {
        let outcome = match handle.await {
            Ok(evaluation) => BatchOutcome::from_evaluation(evaluation),
            Err(e) => {
                error!(index = idx, error = %e, "triage task aborted");
                BatchOutcome::Failed {
                    message: crate::report::GENERIC_FAILURE.to_string(),
                }
            }
        };
        outcomes.push(outcome);
    }
    info!(total, "batch complete");
    outcomes
}
