//! Assessment scoring entry point.
//!
//! Runs the full pipeline (responses → section scores → aggregate, career
//! matches and narrative) as a pure function of the response list.

use std::collections::HashSet;

use crate::careers::match_careers;
use crate::catalog;
use crate::model::{Question, Response};
use crate::narrative::{insights, next_steps};
use crate::report::{ScoreReport, WiscarReport};
use crate::scoring::{round_score, Recommendation, ResponseSet, SectionScores};

/// Scores responses against a question catalog.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    questions: &'a [Question],
}

impl Default for Evaluator<'static> {
    fn default() -> Self {
        Self::new(catalog::questions())
    }
}

impl<'a> Evaluator<'a> {
    pub fn new(questions: &'a [Question]) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &'a [Question] {
        self.questions
    }

    /// Score an ordered response list. Later duplicates win.
    pub fn evaluate(&self, responses: &[Response]) -> ScoreReport {
        let set = ResponseSet::from_responses(responses);
        self.evaluate_set(&set)
    }

    pub fn evaluate_set(&self, responses: &ResponseSet) -> ScoreReport {
        let known: HashSet<&str> = self.questions.iter().map(|q| q.id.as_str()).collect();
        for id in responses.question_ids() {
            if !known.contains(id) {
                tracing::debug!(question = id, "response for unknown question ignored");
            }
        }

        let scores = SectionScores::compute(self.questions, responses);
        let overall = scores.overall();
        let recommendation = Recommendation::from_score(overall);

        tracing::debug!(
            answered = responses.len(),
            psychometric = scores.psychometric,
            technical = scores.technical,
            overall,
            %recommendation,
            "assessment scored"
        );

        ScoreReport {
            psychometric_fit_score: round_score(scores.psychometric),
            technical_readiness_score: round_score(scores.technical),
            wiscar_scores: WiscarReport::from(&scores.wiscar),
            overall_confidence_score: round_score(overall),
            recommendation,
            career_matches: match_careers(&scores.wiscar, scores.technical),
            next_steps: next_steps(recommendation, &scores.wiscar, scores.technical),
            insights: insights(scores.psychometric, scores.technical, &scores.wiscar),
        }
    }
}

/// Score responses against the built-in catalog.
pub fn evaluate(responses: &[Response]) -> ScoreReport {
    Evaluator::default().evaluate(responses)
}
