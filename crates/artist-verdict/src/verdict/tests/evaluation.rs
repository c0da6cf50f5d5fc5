use super::common::*;
use serde_json::json;

use crate::verdict::{evaluate, Decision, EvaluationInput, GateFlags, VerdictError};

#[test]
fn strongest_profile_earns_full_cycle() {
    let verdict = evaluate(&EvaluationInput::from_value(strongest_payload())).expect("valid");

    assert_eq!(verdict.verdict_score, 100.0);
    assert_eq!(verdict.decision, Decision::FullCycle);
    assert_eq!(verdict.gate_flags, GateFlags::default());
    for (_, score) in verdict.subscores.weighted() {
        assert_eq!(score, 1.0);
    }
}

#[test]
fn missing_worldwide_potential_blocks_full_cycle_despite_score() {
    let input = input_with(strongest_payload(), "worldwide_potential", json!("no"));

    let verdict = evaluate(&input).expect("valid");

    assert_eq!(verdict.subscores.worldwide_potential_score, 0.0);
    assert_eq!(verdict.verdict_score, 86.0);
    assert!(verdict.gate_flags.no_worldwide_potential);
    assert!(verdict.gate_flags.gate_b_block);
    assert!(!verdict.gate_flags.gate_a_block);
    assert!(verdict.gate_flags.full_cycle_blocked);
    assert_eq!(verdict.decision, Decision::ServiceOnly);
}

#[test]
fn missing_concept_trips_gate_a() {
    let input = input_with(strongest_payload(), "concept", json!("no"));

    let verdict = evaluate(&input).expect("valid");

    assert_eq!(verdict.verdict_score, 88.0);
    assert!(verdict.gate_flags.missing_concept);
    assert!(verdict.gate_flags.gate_a_block);
    assert!(!verdict.gate_flags.gate_b_block);
    assert_eq!(verdict.decision, Decision::ServiceOnly);
}

#[test]
fn middle_tier_profile_lands_on_watchlist() {
    let verdict = evaluate(&EvaluationInput::from_value(developing_payload())).expect("valid");

    assert_eq!(verdict.verdict_score, 54.0);
    assert_eq!(verdict.decision, Decision::Watchlist);
    assert!(!verdict.gate_flags.full_cycle_blocked);
}

#[test]
fn weakest_profile_is_rejected_with_every_gate_raised() {
    let payload = json!({
        "concept": "no",
        "release_plan": "no",
        "promo_rating_0_10": 0,
        "social_activity": "inactive",
        "gigs_last_12m": 0,
        "ready_tracks_next_12m": 0,
        "back_catalog": "none",
        "team": "none",
        "production_autonomy": "does_not_write",
        "worldwide_potential": "no",
    });

    let verdict = evaluate(&EvaluationInput::from_value(payload)).expect("valid");

    assert_eq!(verdict.verdict_score, 0.0);
    assert_eq!(verdict.decision, Decision::Reject);
    let gates = verdict.gate_flags;
    assert!(gates.missing_concept && gates.missing_release_plan && gates.inactive_socials);
    assert!(gates.not_enough_ready_tracks && gates.no_worldwide_potential);
    assert!(gates.gate_a_block && gates.gate_b_block && gates.full_cycle_blocked);
}

#[test]
fn evaluation_is_deterministic() {
    let input = EvaluationInput::from_value(developing_payload());
    assert_eq!(evaluate(&input), evaluate(&input));
}

#[test]
fn missing_fields_are_reported_together_in_declaration_order() {
    let input = input_without(strongest_payload(), &["team", "concept"]);

    match evaluate(&input) {
        Err(VerdictError::Validation(err)) => assert_eq!(
            err.details,
            vec![
                "Missing field: concept".to_string(),
                "Missing field: team".to_string(),
            ]
        ),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn missing_and_malformed_fields_share_one_error() {
    let mut payload = strongest_payload();
    payload["promo_rating_0_10"] = json!(11);
    let input = input_without(payload, &["gigs_last_12m"]);

    match evaluate(&input) {
        Err(VerdictError::Validation(err)) => assert_eq!(
            err.details,
            vec![
                "Missing field: gigs_last_12m".to_string(),
                "promo_rating_0_10 must be a number in range 0..10".to_string(),
            ]
        ),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn invalid_concept_fails_fast_naming_allowed_values() {
    let mut payload = strongest_payload();
    payload["concept"] = json!("maybe");
    payload["team"] = json!("bogus");

    match evaluate(&EvaluationInput::from_value(payload)) {
        Err(VerdictError::InvalidEnum(err)) => {
            assert_eq!(err.field, "concept");
            assert_eq!(err.allowed, vec!["no", "weak", "yes"]);
            assert_eq!(err.to_string(), "Invalid concept. Allowed: no, weak, yes");
        }
        other => panic!("expected invalid enum error, got {other:?}"),
    }
}

#[test]
fn numeric_problems_are_reported_before_enum_problems() {
    let mut payload = strongest_payload();
    payload["concept"] = json!("maybe");
    payload["gigs_last_12m"] = json!(-3);

    let err = evaluate(&EvaluationInput::from_value(payload)).expect_err("invalid");
    assert!(matches!(err, VerdictError::Validation(_)), "got {err:?}");
}

#[test]
fn enum_values_are_matched_exactly() {
    for value in [json!("Yes"), json!(" yes"), json!(1), json!(null)] {
        let input = input_with(strongest_payload(), "worldwide_potential", value.clone());
        match evaluate(&input) {
            Err(VerdictError::InvalidEnum(err)) => {
                assert_eq!(err.field, "worldwide_potential");
                assert_eq!(err.allowed, vec!["no", "yes"]);
            }
            other => panic!("{value} should be rejected, got {other:?}"),
        }
    }
}

#[test]
fn extra_fields_are_ignored() {
    let input = input_with(strongest_payload(), "artist_name", json!("Nova"));
    assert_eq!(evaluate(&input).expect("valid").verdict_score, 100.0);
}

#[test]
fn whole_number_floats_are_accepted_as_counts() {
    let input = input_with(strongest_payload(), "gigs_last_12m", json!(10.0));
    assert_eq!(
        evaluate(&input).expect("valid").subscores.stage_experience_score,
        1.0
    );
}

#[test]
fn score_stays_within_bounds_across_choices() {
    for promo in [0.0, 2.5, 7.3, 10.0] {
        for gigs in [0, 9, 10, 250] {
            for tracks in [0, 4, 5, 10] {
                let mut payload = developing_payload();
                payload["promo_rating_0_10"] = json!(promo);
                payload["gigs_last_12m"] = json!(gigs);
                payload["ready_tracks_next_12m"] = json!(tracks);

                let verdict = evaluate(&EvaluationInput::from_value(payload)).expect("valid");
                assert!((0.0..=100.0).contains(&verdict.verdict_score));
                assert!((0.0..=1.0).contains(&verdict.subscores.promo_rating_score));
            }
        }
    }
}

#[test]
fn verdict_serializes_with_wire_names() {
    let verdict = evaluate(&EvaluationInput::from_value(strongest_payload())).expect("valid");
    let value = serde_json::to_value(&verdict).expect("serializes");

    assert_eq!(value["decision"], json!("FULL_CYCLE"));
    assert_eq!(value["verdict_score"], json!(100.0));
    assert_eq!(value["subscores"]["WorldwidePotentialScore"], json!(1.0));
    assert_eq!(value["gate_flags"]["full_cycle_blocked"], json!(false));
}
