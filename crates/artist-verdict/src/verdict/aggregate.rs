use super::subscores::Subscores;

pub const CONCEPT_WEIGHT: f64 = 0.12;
pub const RELEASE_PLAN_WEIGHT: f64 = 0.08;
pub const PROMO_RATING_WEIGHT: f64 = 0.12;
pub const SOCIAL_ACTIVITY_WEIGHT: f64 = 0.10;
pub const STAGE_EXPERIENCE_WEIGHT: f64 = 0.06;
pub const READY_MATERIAL_WEIGHT: f64 = 0.10;
pub const BACK_CATALOG_WEIGHT: f64 = 0.06;
pub const TEAM_WEIGHT: f64 = 0.10;
pub const PRODUCTION_AUTONOMY_WEIGHT: f64 = 0.12;
pub const WORLDWIDE_POTENTIAL_WEIGHT: f64 = 0.14;

impl Subscores {
    /// `(weight, subscore)` pairs in declaration order.
    pub fn weighted(&self) -> [(f64, f64); 10] {
        [
            (CONCEPT_WEIGHT, self.concept_score),
            (RELEASE_PLAN_WEIGHT, self.release_plan_score),
            (PROMO_RATING_WEIGHT, self.promo_rating_score),
            (SOCIAL_ACTIVITY_WEIGHT, self.social_activity_score),
            (STAGE_EXPERIENCE_WEIGHT, self.stage_experience_score),
            (READY_MATERIAL_WEIGHT, self.ready_material_score),
            (BACK_CATALOG_WEIGHT, self.back_catalog_score),
            (TEAM_WEIGHT, self.team_score),
            (PRODUCTION_AUTONOMY_WEIGHT, self.production_autonomy_score),
            (WORLDWIDE_POTENTIAL_WEIGHT, self.worldwide_potential_score),
        ]
    }
}

/// Weighted sum scaled to 0..=100 and rounded to one decimal.
pub fn aggregate(subscores: &Subscores) -> f64 {
    let sum: f64 = subscores
        .weighted()
        .iter()
        .map(|(weight, score)| weight * score)
        .sum();
    round_tenths(100.0 * sum)
}

// Rounds at the tenths digit; an exact tie (`x.x5` before scaling) goes away
// from zero. Scores are never negative, so that is also round-half-up.
pub(crate) fn round_tenths(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}
