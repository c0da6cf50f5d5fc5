use std::sync::Arc;

use tracing::{error, info, warn};

use crate::store::{
    EvaluationRecord, EvaluationStore, NewEvaluation, StoreError, DEFAULT_HISTORY_LIMIT,
    MAX_HISTORY_LIMIT,
};
use crate::verdict::{evaluate, EvaluationInput, Verdict, VerdictError};

/// Service composing the verdict pipeline with the history store.
pub struct EvaluationService<S> {
    store: Arc<S>,
}

impl<S> EvaluationService<S>
where
    S: EvaluationStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Evaluate a payload and record it. Rejected payloads are never stored.
    pub fn evaluate(&self, input: EvaluationInput) -> Result<Verdict, EvaluationServiceError> {
        let verdict = match evaluate(&input) {
            Ok(verdict) => verdict,
            Err(err) => {
                warn!(error = %err, "evaluation rejected");
                return Err(err.into());
            }
        };

        let record = self
            .store
            .insert(NewEvaluation::now(input.as_value(), verdict.clone()))
            .map_err(|err| {
                error!(error = %err, "failed to persist evaluation");
                err
            })?;

        info!(
            id = record.id,
            score = verdict.verdict_score,
            decision = verdict.decision.label(),
            "evaluation recorded"
        );
        Ok(verdict)
    }

    /// Most recent evaluations, newest first. `limit` is capped at the store maximum.
    pub fn history(&self, limit: usize) -> Result<Vec<EvaluationRecord>, EvaluationServiceError> {
        let records = self.store.recent(limit.min(MAX_HISTORY_LIMIT))?;
        Ok(records)
    }
}

/// Interprets the raw `limit` query value.
///
/// Absent or non-numeric values fall back to the default page; numbers are
/// floored and clamped to `0..=MAX_HISTORY_LIMIT`.
pub fn history_limit(raw: Option<&str>) -> usize {
    let parsed = raw
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite());

    match parsed {
        Some(value) => value.floor().clamp(0.0, MAX_HISTORY_LIMIT as f64) as usize,
        None => DEFAULT_HISTORY_LIMIT,
    }
}

/// Error raised by the evaluation service.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationServiceError {
    #[error(transparent)]
    Verdict(#[from] VerdictError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("evaluation worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}
