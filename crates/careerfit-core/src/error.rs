//! Answer validation errors.
//!
//! Raised at the input boundary when a response does not fit its question.
//! Scoring never returns these: malformed answers score at the floor value
//! instead.

use thiserror::Error;

use crate::model::AnswerKind;

/// Ways a response can fail to fit the question it answers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnswerError {
    /// No question in the catalog has this id.
    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    /// The answer is a number where text was expected, or the reverse.
    #[error("{question_id}: expected a {expected} answer, got {found}")]
    WrongKind {
        question_id: String,
        expected: AnswerKind,
        found: AnswerKind,
    },

    /// A scale answer lies outside the question's range.
    #[error("{question_id}: value {value} is outside {min}..={max}")]
    OutOfRange {
        question_id: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A choice answer is not one of the offered options.
    #[error("{question_id}: \"{option}\" is not one of the offered options")]
    UnknownOption { question_id: String, option: String },
}

impl AnswerError {
    /// The question id the error refers to.
    pub fn question_id(&self) -> &str {
        match self {
            AnswerError::UnknownQuestion(id) => id,
            AnswerError::WrongKind { question_id, .. }
            | AnswerError::OutOfRange { question_id, .. }
            | AnswerError::UnknownOption { question_id, .. } => question_id,
        }
    }
}
