use serde_json::{json, Value};

use crate::verdict::EvaluationInput;

/// Profile that maxes out every subscore.
pub(super) fn strongest_payload() -> Value {
    json!({
        "concept": "yes",
        "release_plan": "yes",
        "promo_rating_0_10": 10,
        "social_activity": "good",
        "gigs_last_12m": 10,
        "ready_tracks_next_12m": 10,
        "back_catalog": "10_releases_or_more",
        "team": "full",
        "production_autonomy": "self_produces",
        "worldwide_potential": "yes",
    })
}

/// Profile sitting on the middle tier of every field.
pub(super) fn developing_payload() -> Value {
    json!({
        "concept": "weak",
        "release_plan": "draft",
        "promo_rating_0_10": 5,
        "social_activity": "low",
        "gigs_last_12m": 3,
        "ready_tracks_next_12m": 6,
        "back_catalog": "10_tracks_or_more",
        "team": "partial",
        "production_autonomy": "external_needed",
        "worldwide_potential": "yes",
    })
}

pub(super) fn input_with(mut payload: Value, field: &str, value: Value) -> EvaluationInput {
    payload[field] = value;
    EvaluationInput::from_value(payload)
}

pub(super) fn input_without(mut payload: Value, fields: &[&str]) -> EvaluationInput {
    if let Some(object) = payload.as_object_mut() {
        for field in fields {
            object.remove(*field);
        }
    }
    EvaluationInput::from_value(payload)
}
