//! Evaluation history: every accepted payload together with its verdict.

mod sqlite;

pub use sqlite::SqliteEvaluationStore;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::verdict::Verdict;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;
/// Upper bound on a single history page.
pub const MAX_HISTORY_LIMIT: usize = 200;

/// An evaluation about to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvaluation {
    pub created_at: DateTime<Utc>,
    pub payload: Value,
    pub result: Verdict,
}

impl NewEvaluation {
    pub fn now(payload: Value, result: Verdict) -> Self {
        Self {
            created_at: Utc::now(),
            payload,
            result,
        }
    }

    /// ISO-8601 UTC with millisecond precision, e.g. `2025-03-01T09:30:00.000Z`.
    pub fn timestamp(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// A stored evaluation as exposed by the history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub id: i64,
    pub created_at: String,
    pub payload: Value,
    pub result: Verdict,
}

/// Storage abstraction so the service can be exercised without a database.
pub trait EvaluationStore: Send + Sync {
    fn insert(&self, evaluation: NewEvaluation) -> Result<EvaluationRecord, StoreError>;
    /// Newest first, at most `limit` records.
    fn recent(&self, limit: usize) -> Result<Vec<EvaluationRecord>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("sqlite failure: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("stored evaluation is not valid json: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
