use super::gates::GateFlags;
use serde::{Deserialize, Serialize};

pub const FULL_CYCLE_THRESHOLD: f64 = 75.0;
pub const SERVICE_ONLY_THRESHOLD: f64 = 55.0;
pub const WATCHLIST_THRESHOLD: f64 = 40.0;

/// Ordinal outcome of an evaluation, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    FullCycle,
    ServiceOnly,
    Watchlist,
    Reject,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::FullCycle => "FULL_CYCLE",
            Decision::ServiceOnly => "SERVICE_ONLY",
            Decision::Watchlist => "WATCHLIST",
            Decision::Reject => "REJECT",
        }
    }
}

/// Gates only hold back the top tier; lower tiers depend on the score alone.
pub fn decide(score: f64, gates: &GateFlags) -> Decision {
    if score >= FULL_CYCLE_THRESHOLD && !gates.full_cycle_blocked {
        return Decision::FullCycle;
    }
    if score >= SERVICE_ONLY_THRESHOLD {
        return Decision::ServiceOnly;
    }
    if score >= WATCHLIST_THRESHOLD {
        return Decision::Watchlist;
    }
    Decision::Reject
}
