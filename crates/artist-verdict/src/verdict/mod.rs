//! Readiness verdicts for artist profiles.
//!
//! The pipeline is pure: validation, subscore mapping, weighted aggregation,
//! gate derivation and decision classification. Transport, storage and
//! authentication live elsewhere.

mod aggregate;
mod decision;
mod gates;
mod input;
mod subscores;
mod validation;

#[cfg(test)]
mod tests;

pub use aggregate::{
    aggregate, BACK_CATALOG_WEIGHT, CONCEPT_WEIGHT, PRODUCTION_AUTONOMY_WEIGHT,
    PROMO_RATING_WEIGHT, READY_MATERIAL_WEIGHT, RELEASE_PLAN_WEIGHT, SOCIAL_ACTIVITY_WEIGHT,
    STAGE_EXPERIENCE_WEIGHT, TEAM_WEIGHT, WORLDWIDE_POTENTIAL_WEIGHT,
};
pub use decision::{
    decide, Decision, FULL_CYCLE_THRESHOLD, SERVICE_ONLY_THRESHOLD, WATCHLIST_THRESHOLD,
};
pub use gates::{compute_gates, GateFlags};
pub use input::{EvaluationInput, REQUIRED_FIELDS};
pub use subscores::{
    map_subscores, BackCatalog, Concept, ProductionAutonomy, ReleasePlan, ScoredChoice,
    SocialActivity, Subscores, Team, WorldwidePotential,
};
pub use validation::validate;

use serde::{Deserialize, Serialize};

/// Final output of an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub verdict_score: f64,
    pub decision: Decision,
    pub subscores: Subscores,
    pub gate_flags: GateFlags,
}

/// Runs the full pipeline on an untrusted payload.
///
/// Presence and numeric problems are reported together as a
/// [`ValidationError`]; an unknown enum value fails on its own as soon as the
/// mapper reaches it.
pub fn evaluate(input: &EvaluationInput) -> Result<Verdict, VerdictError> {
    validate(input)?;
    let subscores = map_subscores(input)?;
    let verdict_score = aggregate(&subscores);
    let gate_flags = compute_gates(&subscores);
    let decision = decide(verdict_score, &gate_flags);

    Ok(Verdict {
        verdict_score,
        decision,
        subscores,
        gate_flags,
    })
}

/// Batch of presence and numeric violations, in field-declaration order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed: {}", .details.join("; "))]
pub struct ValidationError {
    pub details: Vec<String>,
}

/// An enum field holds a value outside its accepted set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field}. Allowed: {}", .allowed.join(", "))]
pub struct InvalidEnumValue {
    pub field: &'static str,
    pub allowed: Vec<String>,
}

impl InvalidEnumValue {
    pub fn new(field: &'static str, allowed: Vec<String>) -> Self {
        Self { field, allowed }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerdictError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    InvalidEnum(#[from] InvalidEnumValue),
}
