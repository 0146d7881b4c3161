//! Maps raw answers onto the common 1–5 scale.

use crate::model::{Answer, Question, QuestionType};

/// Value given to any answer that cannot be interpreted.
pub const FLOOR: f64 = 1.0;

const DEFAULT_SLIDER_MAX: f64 = 100.0;

/// Normalize one answer against its question.
///
/// Total: malformed pairs fall back to [`FLOOR`] rather than failing.
/// Slider values are divided by `scale.max` only; `scale.min` does not
/// enter the formula.
pub fn normalize(answer: &Answer, question: &Question) -> f64 {
    match question.kind {
        QuestionType::Likert => numeric(answer, question).unwrap_or(FLOOR),
        QuestionType::Slider => {
            let max = question
                .scale
                .as_ref()
                .map(|s| s.max)
                .filter(|&m| m != 0.0)
                .unwrap_or(DEFAULT_SLIDER_MAX);
            numeric(answer, question)
                .map(|v| (v / max) * 5.0)
                .unwrap_or(FLOOR)
        }
        QuestionType::MultipleChoice | QuestionType::Scenario => {
            if question.correct_answer.is_some() {
                if question.is_correct(answer) {
                    5.0
                } else {
                    FLOOR
                }
            } else {
                option_rank(answer, question)
            }
        }
    }
}

/// Numeric value of a scale answer; text is accepted when it parses.
fn numeric(answer: &Answer, question: &Question) -> Option<f64> {
    let value = match answer {
        Answer::Numeric(value) => Some(*value),
        Answer::Text(text) => text.trim().parse::<f64>().ok(),
    }
    .filter(|v| v.is_finite());

    if value.is_none() {
        tracing::debug!(question = %question.id, %answer, "non-numeric scale answer scored at floor");
    }
    value
}

/// First-listed option scores highest: `len - index`.
fn option_rank(answer: &Answer, question: &Question) -> f64 {
    let options = question.options();
    let position = answer
        .as_text()
        .and_then(|text| options.iter().position(|o| o == text));

    match position {
        Some(index) => (options.len() - index) as f64,
        None => {
            tracing::debug!(question = %question.id, %answer, "answer not among options, scored at floor");
            FLOOR
        }
    }
}
