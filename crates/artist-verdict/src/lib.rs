//! Readiness verdicts for music-artist profiles, plus the evaluation history
//! and HTTP plumbing that surround them.

pub mod config;
pub mod error;
pub mod router;
pub mod service;
pub mod store;
pub mod telemetry;
pub mod verdict;

pub use router::evaluation_router;
pub use service::{EvaluationService, EvaluationServiceError};
pub use verdict::{evaluate, Decision, EvaluationInput, GateFlags, Subscores, Verdict};
