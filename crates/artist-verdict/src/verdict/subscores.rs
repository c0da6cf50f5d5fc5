use super::input::EvaluationInput;
use super::InvalidEnumValue;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A categorical profile answer with a fixed subscore per variant.
pub trait ScoredChoice: Copy + Sized + 'static {
    /// Input field the choice is read from.
    const FIELD: &'static str;
    /// Every accepted variant, lowest subscore first.
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;
    fn subscore(self) -> f64;

    /// Exact, case-sensitive match against the wire values.
    fn parse(value: &Value) -> Result<Self, InvalidEnumValue> {
        let raw = value.as_str();
        Self::ALL
            .iter()
            .copied()
            .find(|choice| raw == Some(choice.as_str()))
            .ok_or_else(|| InvalidEnumValue::new(Self::FIELD, Self::allowed()))
    }

    fn allowed() -> Vec<String> {
        Self::ALL
            .iter()
            .map(|choice| choice.as_str().to_string())
            .collect()
    }
}

// Each variant is listed once with its wire value and subscore, so the
// generated matches are exhaustive by construction.
macro_rules! scored_choice {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => ($wire:literal, $score:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl ScoredChoice for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            fn subscore(self) -> f64 {
                match self {
                    $(Self::$variant => $score),+
                }
            }
        }
    };
}

scored_choice! {
    /// Whether the artist has a defined artistic concept.
    Concept, "concept" {
        No => ("no", 0.0),
        Weak => ("weak", 0.5),
        Yes => ("yes", 1.0),
    }
}

scored_choice! {
    ReleasePlan, "release_plan" {
        No => ("no", 0.0),
        Draft => ("draft", 0.5),
        Yes => ("yes", 1.0),
    }
}

scored_choice! {
    SocialActivity, "social_activity" {
        Inactive => ("inactive", 0.0),
        Low => ("low", 0.5),
        Good => ("good", 1.0),
    }
}

scored_choice! {
    /// Size of the already released catalog.
    BackCatalog, "back_catalog" {
        None => ("none", 0.0),
        TenTracksOrMore => ("10_tracks_or_more", 0.5),
        TenReleasesOrMore => ("10_releases_or_more", 1.0),
    }
}

scored_choice! {
    Team, "team" {
        None => ("none", 0.0),
        Partial => ("partial", 0.5),
        Full => ("full", 1.0),
    }
}

scored_choice! {
    ProductionAutonomy, "production_autonomy" {
        DoesNotWrite => ("does_not_write", 0.0),
        ExternalNeeded => ("external_needed", 0.5),
        SelfProduces => ("self_produces", 1.0),
    }
}

scored_choice! {
    /// Two-valued: there is no middle tier.
    WorldwidePotential, "worldwide_potential" {
        No => ("no", 0.0),
        Yes => ("yes", 1.0),
    }
}

/// Normalized per-field scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Subscores {
    pub concept_score: f64,
    pub release_plan_score: f64,
    pub promo_rating_score: f64,
    pub social_activity_score: f64,
    pub stage_experience_score: f64,
    pub ready_material_score: f64,
    pub back_catalog_score: f64,
    pub team_score: f64,
    pub production_autonomy_score: f64,
    pub worldwide_potential_score: f64,
}

/// Maps a validated input onto subscores.
///
/// Enum fields are resolved in declaration order and the first unknown value
/// aborts the mapping.
pub fn map_subscores(input: &EvaluationInput) -> Result<Subscores, InvalidEnumValue> {
    let concept_score = choice::<Concept>(input)?;
    let release_plan_score = choice::<ReleasePlan>(input)?;
    let promo_rating_score = promo_rating_score(input.number("promo_rating_0_10"));
    let social_activity_score = choice::<SocialActivity>(input)?;
    let stage_experience_score = stage_experience_score(count(input, "gigs_last_12m"));
    let ready_material_score = ready_material_score(count(input, "ready_tracks_next_12m"));
    let back_catalog_score = choice::<BackCatalog>(input)?;
    let team_score = choice::<Team>(input)?;
    let production_autonomy_score = choice::<ProductionAutonomy>(input)?;
    let worldwide_potential_score = choice::<WorldwidePotential>(input)?;

    Ok(Subscores {
        concept_score,
        release_plan_score,
        promo_rating_score,
        social_activity_score,
        stage_experience_score,
        ready_material_score,
        back_catalog_score,
        team_score,
        production_autonomy_score,
        worldwide_potential_score,
    })
}

fn choice<C: ScoredChoice>(input: &EvaluationInput) -> Result<f64, InvalidEnumValue> {
    let value = input.get(C::FIELD).unwrap_or(&Value::Null);
    C::parse(value).map(C::subscore)
}

fn count(input: &EvaluationInput, field: &str) -> f64 {
    input.number(field).unwrap_or(0.0)
}

pub(crate) fn promo_rating_score(rating: Option<f64>) -> f64 {
    clamp_unit(rating.unwrap_or(f64::NAN) / 10.0)
}

pub(crate) fn stage_experience_score(gigs: f64) -> f64 {
    if gigs >= 10.0 {
        1.0
    } else {
        0.0
    }
}

pub(crate) fn ready_material_score(tracks: f64) -> f64 {
    if tracks >= 10.0 {
        1.0
    } else if tracks >= 5.0 {
        0.5
    } else {
        0.0
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
impl Subscores {
    pub(crate) fn uniform(value: f64) -> Self {
        Self {
            concept_score: value,
            release_plan_score: value,
            promo_rating_score: value,
            social_activity_score: value,
            stage_experience_score: value,
            ready_material_score: value,
            back_catalog_score: value,
            team_score: value,
            production_autonomy_score: value,
            worldwide_potential_score: value,
        }
    }
}
