use super::input::{EvaluationInput, REQUIRED_FIELDS};
use super::ValidationError;
use serde_json::Value;

/// Checks presence of every required field plus the numeric ranges.
///
/// Enum values are left to the subscore mapper.
pub fn validate(input: &EvaluationInput) -> Result<(), ValidationError> {
    let mut details = Vec::new();

    for field in REQUIRED_FIELDS {
        if !input.contains(field) {
            details.push(format!("Missing field: {field}"));
        }
    }

    if input.contains("promo_rating_0_10") {
        let in_range = input
            .number("promo_rating_0_10")
            .map(|value| !value.is_nan() && (0.0..=10.0).contains(&value))
            .unwrap_or(false);
        if !in_range {
            details.push("promo_rating_0_10 must be a number in range 0..10".to_string());
        }
    }

    for field in ["gigs_last_12m", "ready_tracks_next_12m"] {
        if let Some(value) = input.get(field) {
            if !is_non_negative_integer(value) {
                details.push(format!("{field} must be an integer >= 0"));
            }
        }
    }

    if details.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { details })
    }
}

// `10.0` is an integer here, same as in the JSON number model.
fn is_non_negative_integer(value: &Value) -> bool {
    match value.as_f64() {
        Some(number) => number.is_finite() && number.fract() == 0.0 && number >= 0.0,
        None => false,
    }
}
