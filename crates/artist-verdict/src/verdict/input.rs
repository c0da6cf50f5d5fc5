use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields every evaluation payload must carry, in declaration order.
pub const REQUIRED_FIELDS: [&str; 10] = [
    "concept",
    "release_plan",
    "promo_rating_0_10",
    "social_activity",
    "gigs_last_12m",
    "ready_tracks_next_12m",
    "back_catalog",
    "team",
    "production_autonomy",
    "worldwide_potential",
];

/// Untrusted artist profile exactly as submitted by the caller.
///
/// The payload stays untyped until it has passed validation so that every
/// missing or malformed field can be reported together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvaluationInput {
    fields: Map<String, Value>,
}

impl EvaluationInput {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Wraps an arbitrary JSON document. Anything but an object carries no fields.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn as_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// Numeric view of a field; `None` when absent or not a JSON number.
    pub(crate) fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_f64)
    }
}

impl From<Map<String, Value>> for EvaluationInput {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

impl From<Value> for EvaluationInput {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}
