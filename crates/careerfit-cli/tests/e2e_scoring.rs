//! End-to-end scoring tests against the built-in question catalog.
//!
//! These run complete response sets through the same path the CLI uses
//! (load → evaluate) and check the resulting report.

use std::path::Path;

use careerfit_core::careers::FitLevel;
use careerfit_core::normalize::normalize;
use careerfit_core::parser::load_responses;
use careerfit_core::scoring::{Recommendation, WiscarDimension};
use careerfit_core::{catalog, evaluate, Answer, Response, Section};

fn strong_responses() -> Vec<Response> {
    load_responses(Path::new("../../responses/sample-strong.json")).unwrap()
}

/// The best-scoring answer for every catalog question.
fn maximal_responses() -> Vec<Response> {
    catalog::questions()
        .iter()
        .map(|q| {
            let answer = if let Some(correct) = &q.correct_answer {
                correct.clone()
            } else if q.kind.is_choice() {
                Answer::from(q.options()[0].as_str())
            } else {
                let max = q.scale.as_ref().map(|s| s.max).unwrap_or(5.0);
                Answer::Numeric(max)
            };
            Response::new(q.id.clone(), answer)
        })
        .collect()
}

#[test]
fn no_responses_scores_zero() {
    let report = evaluate(&[]);
    assert_eq!(report.overall_confidence_score, 0);
    assert_eq!(report.psychometric_fit_score, 0);
    assert_eq!(report.technical_readiness_score, 0);
    assert_eq!(report.recommendation, Recommendation::NotRecommended);
    for dimension in WiscarDimension::ALL {
        assert_eq!(report.wiscar_scores.get(dimension), 0);
    }
    assert_eq!(report.career_matches.len(), 4);
    assert!(report
        .career_matches
        .iter()
        .all(|m| m.fit_score == 0 && m.fit_level == FitLevel::Low));
}

#[test]
fn single_weighted_likert_answer() {
    let report = evaluate(&[Response::new("psych_001", 5.0)]);
    assert_eq!(report.psychometric_fit_score, 100);
    assert_eq!(report.technical_readiness_score, 0);
}

#[test]
fn technical_score_ignores_weights() {
    // know_002 carries weight 0.8; only the correct fraction counts
    let report = evaluate(&[
        Response::new("apt_001", "162"),
        Response::new("know_002", "SWOT Analysis"),
    ]);
    assert_eq!(report.technical_readiness_score, 50);
}

#[test]
fn maximal_answers_score_full_marks() {
    let report = evaluate(&maximal_responses());
    assert_eq!(report.psychometric_fit_score, 100);
    assert_eq!(report.technical_readiness_score, 100);
    for dimension in WiscarDimension::ALL {
        assert_eq!(report.wiscar_scores.get(dimension), 100, "{dimension}");
    }
    assert_eq!(report.overall_confidence_score, 100);
    assert_eq!(report.recommendation, Recommendation::Yes);
    assert!(report.career_matches.iter().all(|m| m.fit_level == FitLevel::High));
}

#[test]
fn half_slider_normalizes_to_midpoint() {
    let slider = catalog::question("wiscar_003").unwrap();
    assert_eq!(normalize(&Answer::Numeric(50.0), slider), 2.5);

    let report = evaluate(&[Response::new("wiscar_003", 50.0)]);
    assert_eq!(report.wiscar_scores.interest, 50);
}

#[test]
fn strong_sample_report() {
    let report = evaluate(&strong_responses());

    assert_eq!(report.psychometric_fit_score, 89);
    assert_eq!(report.technical_readiness_score, 71);
    assert_eq!(report.wiscar_scores.will, 90);
    assert_eq!(report.wiscar_scores.interest, 75);
    assert_eq!(report.wiscar_scores.skill, 70);
    assert_eq!(report.wiscar_scores.cognitive, 100);
    assert_eq!(report.wiscar_scores.ability_to_learn, 90);
    assert_eq!(report.wiscar_scores.real_world_alignment, 90);
    assert_eq!(report.overall_confidence_score, 83);
    assert_eq!(report.recommendation, Recommendation::Yes);

    assert_eq!(report.career_matches[0].role, "Operations Manager");
    assert_eq!(report.career_matches[0].fit_score, 90);
    assert_eq!(report.career_matches[1].role, "Supply Chain Analyst");
    assert_eq!(report.career_matches[1].fit_score, 82);
    assert!(report
        .career_matches
        .windows(2)
        .all(|w| w[0].fit_score >= w[1].fit_score));

    // Technical readiness is above 70, so no foundations step
    assert_eq!(report.next_steps.len(), 3);
    assert_eq!(report.insights.len(), 4);
}

#[test]
fn evaluation_is_idempotent() {
    let responses = strong_responses();
    assert_eq!(evaluate(&responses), evaluate(&responses));
}

#[test]
fn response_order_does_not_matter() {
    let responses = strong_responses();
    let mut reversed = responses.clone();
    reversed.reverse();
    assert_eq!(evaluate(&responses), evaluate(&reversed));
}

#[test]
fn later_duplicate_wins() {
    let mut responses = strong_responses();
    responses.push(Response::new("wiscar_007", "Circle"));
    let report = evaluate(&responses);
    assert_eq!(report.wiscar_scores.cognitive, 20);
}

#[test]
fn malformed_answers_score_at_floor() {
    let report = evaluate(&[
        Response::new("psych_001", "a lot"),
        Response::new("wiscar_010", "Something else entirely"),
    ]);
    assert_eq!(report.psychometric_fit_score, 20);
    assert_eq!(report.wiscar_scores.real_world_alignment, 20);
}

#[test]
fn unknown_question_ids_are_ignored() {
    let mut responses = strong_responses();
    let baseline = evaluate(&responses);
    responses.push(Response::new("bonus_001", 5.0));
    assert_eq!(evaluate(&responses), baseline);
}

#[test]
fn scores_stay_in_range_for_every_section_subset() {
    let all = strong_responses();
    for section in Section::ORDER {
        let subset: Vec<Response> = all
            .iter()
            .filter(|r| {
                catalog::question(&r.question_id).is_some_and(|q| section.contains(q.category))
            })
            .cloned()
            .collect();
        let report = evaluate(&subset);
        assert!(report.overall_confidence_score <= 100);
        assert!(report.psychometric_fit_score <= 100);
        assert!(report.technical_readiness_score <= 100);
        assert!(report.career_matches.iter().all(|m| m.fit_score <= 100));
    }
}
