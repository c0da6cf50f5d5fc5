use super::subscores::Subscores;
use serde::{Deserialize, Serialize};

/// Flags that can hold an otherwise strong profile out of the top tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateFlags {
    pub missing_concept: bool,
    pub missing_release_plan: bool,
    pub inactive_socials: bool,
    pub not_enough_ready_tracks: bool,
    pub no_worldwide_potential: bool,
    pub gate_a_block: bool,
    pub gate_b_block: bool,
    pub full_cycle_blocked: bool,
}

pub fn compute_gates(subscores: &Subscores) -> GateFlags {
    let missing_concept = subscores.concept_score == 0.0;
    let missing_release_plan = subscores.release_plan_score == 0.0;
    let inactive_socials = subscores.social_activity_score == 0.0;
    let not_enough_ready_tracks = subscores.ready_material_score == 0.0;
    let no_worldwide_potential = subscores.worldwide_potential_score == 0.0;

    let gate_a_block =
        missing_concept || missing_release_plan || inactive_socials || not_enough_ready_tracks;
    let gate_b_block = no_worldwide_potential;

    GateFlags {
        missing_concept,
        missing_release_plan,
        inactive_socials,
        not_enough_ready_tracks,
        no_worldwide_potential,
        gate_a_block,
        gate_b_block,
        full_cycle_blocked: gate_a_block || gate_b_block,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_credit_never_trips_a_gate() {
        let gates = compute_gates(&Subscores::uniform(0.5));
        assert_eq!(gates, GateFlags::default());
    }

    #[test]
    fn each_gate_a_signal_blocks_full_cycle() {
        let setters: [fn(&mut Subscores); 4] = [
            |s| s.concept_score = 0.0,
            |s| s.release_plan_score = 0.0,
            |s| s.social_activity_score = 0.0,
            |s| s.ready_material_score = 0.0,
        ];

        for set in setters {
            let mut subscores = Subscores::uniform(1.0);
            set(&mut subscores);
            let gates = compute_gates(&subscores);
            assert!(gates.gate_a_block);
            assert!(!gates.gate_b_block);
            assert!(gates.full_cycle_blocked);
        }
    }

    #[test]
    fn unscored_fields_do_not_gate() {
        let mut subscores = Subscores::uniform(1.0);
        subscores.promo_rating_score = 0.0;
        subscores.stage_experience_score = 0.0;
        subscores.back_catalog_score = 0.0;
        subscores.team_score = 0.0;
        subscores.production_autonomy_score = 0.0;
        assert!(!compute_gates(&subscores).full_cycle_blocked);
    }
}
