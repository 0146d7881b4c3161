//! Core data model types for careerfit.
//!
//! These are the fundamental types the whole system uses to represent
//! questions, answers and the responses collected for them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AnswerError;

/// How a question is presented and how its answer is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    Likert,
    MultipleChoice,
    Scenario,
    Slider,
}

impl QuestionType {
    /// The answer variant a well-formed response to this type carries.
    pub fn expected_answer(self) -> AnswerKind {
        match self {
            QuestionType::Likert | QuestionType::Slider => AnswerKind::Numeric,
            QuestionType::MultipleChoice | QuestionType::Scenario => AnswerKind::Text,
        }
    }

    /// Whether answers are picked from the question's option list.
    pub fn is_choice(self) -> bool {
        matches!(self, QuestionType::MultipleChoice | QuestionType::Scenario)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::Likert => write!(f, "likert"),
            QuestionType::MultipleChoice => write!(f, "multiple-choice"),
            QuestionType::Scenario => write!(f, "scenario"),
            QuestionType::Slider => write!(f, "slider"),
        }
    }
}

/// Top-level grouping tag of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Psychometric,
    Aptitude,
    Wiscar,
    Knowledge,
}

impl Category {
    /// Aptitude and knowledge questions are scored together as technical readiness.
    pub fn is_technical(self) -> bool {
        matches!(self, Category::Aptitude | Category::Knowledge)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Psychometric => write!(f, "psychometric"),
            Category::Aptitude => write!(f, "aptitude"),
            Category::Wiscar => write!(f, "wiscar"),
            Category::Knowledge => write!(f, "knowledge"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "psychometric" => Ok(Category::Psychometric),
            "aptitude" => Ok(Category::Aptitude),
            "wiscar" => Ok(Category::Wiscar),
            "knowledge" => Ok(Category::Knowledge),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// One of the three sections the questionnaire is presented in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Psychometric,
    Aptitude,
    Wiscar,
}

impl Section {
    /// Presentation order of the sections.
    pub const ORDER: [Section; 3] = [Section::Psychometric, Section::Aptitude, Section::Wiscar];

    /// Whether a question of `category` belongs to this section.
    pub fn contains(self, category: Category) -> bool {
        match self {
            Section::Psychometric => category == Category::Psychometric,
            Section::Aptitude => category.is_technical(),
            Section::Wiscar => category == Category::Wiscar,
        }
    }

    /// Heading shown while the section is in progress.
    pub fn title(self) -> &'static str {
        match self {
            Section::Psychometric => "Psychometric Assessment",
            Section::Aptitude => "Technical & Aptitude",
            Section::Wiscar => "WISCAR Framework",
        }
    }

    pub fn next(self) -> Option<Section> {
        match self {
            Section::Psychometric => Some(Section::Aptitude),
            Section::Aptitude => Some(Section::Wiscar),
            Section::Wiscar => None,
        }
    }

    pub fn previous(self) -> Option<Section> {
        match self {
            Section::Psychometric => None,
            Section::Aptitude => Some(Section::Psychometric),
            Section::Wiscar => Some(Section::Aptitude),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Psychometric => write!(f, "psychometric"),
            Section::Aptitude => write!(f, "aptitude"),
            Section::Wiscar => write!(f, "wiscar"),
        }
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "psychometric" | "psych" => Ok(Section::Psychometric),
            "aptitude" | "technical" => Ok(Section::Aptitude),
            "wiscar" => Ok(Section::Wiscar),
            other => Err(format!("unknown section: {other}")),
        }
    }
}

/// Numeric range and boundary labels for likert and slider questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// A single question definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique identifier (e.g. "psych_001").
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub category: Category,
    /// Free-form grouping inside the category (e.g. "interest", "will").
    pub subcategory: String,
    /// The prompt text.
    pub question: String,
    /// Preamble shown before scenario questions.
    #[serde(default)]
    pub scenario: Option<String>,
    /// Ordered choices for multiple-choice and scenario questions.
    #[serde(default)]
    pub options: Option<Vec<String>>,
    /// Range for likert and slider questions.
    #[serde(default)]
    pub scale: Option<Scale>,
    /// Present only on objectively gradable questions.
    #[serde(default)]
    pub correct_answer: Option<Answer>,
    /// Relative importance in aggregation (defaults to 1.0).
    #[serde(default)]
    pub weight: Option<f64>,
}

impl Question {
    pub fn weight(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }

    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }

    pub fn expected_answer(&self) -> AnswerKind {
        self.kind.expected_answer()
    }

    /// Whether `answer` matches the correct answer exactly.
    ///
    /// Questions without a correct answer are never "correct".
    pub fn is_correct(&self, answer: &Answer) -> bool {
        self.correct_answer.as_ref() == Some(answer)
    }

    /// Check that `answer` has the shape this question expects.
    pub fn check_answer(&self, answer: &Answer) -> Result<(), AnswerError> {
        let expected = self.expected_answer();
        if answer.kind() != expected {
            return Err(AnswerError::WrongKind {
                question_id: self.id.clone(),
                expected,
                found: answer.kind(),
            });
        }

        match (self.kind, answer) {
            (QuestionType::Likert | QuestionType::Slider, Answer::Numeric(value)) => {
                let (min, max) = self
                    .scale
                    .as_ref()
                    .map(|s| (s.min, s.max))
                    .unwrap_or((1.0, 5.0));
                if !value.is_finite() || *value < min || *value > max {
                    return Err(AnswerError::OutOfRange {
                        question_id: self.id.clone(),
                        value: *value,
                        min,
                        max,
                    });
                }
            }
            (_, Answer::Text(text)) if self.kind.is_choice() => {
                if !self.options().iter().any(|o| o == text) {
                    return Err(AnswerError::UnknownOption {
                        question_id: self.id.clone(),
                        option: text.clone(),
                    });
                }
            }
            _ => {}
        }

        Ok(())
    }
}

/// Which variant of [`Answer`] a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKind {
    Numeric,
    Text,
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerKind::Numeric => write!(f, "numeric"),
            AnswerKind::Text => write!(f, "text"),
        }
    }
}

/// A raw answer value: a number for scales, the chosen option text for choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Numeric(f64),
    Text(String),
}

impl Answer {
    pub fn kind(&self) -> AnswerKind {
        match self {
            Answer::Numeric(_) => AnswerKind::Numeric,
            Answer::Text(_) => AnswerKind::Text,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Answer::Numeric(value) => Some(*value),
            Answer::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Numeric(_) => None,
            Answer::Text(text) => Some(text),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Numeric(value) => write!(f, "{value}"),
            Answer::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<f64> for Answer {
    fn from(value: f64) -> Self {
        Answer::Numeric(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

/// An answer submitted for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: String,
    pub answer: Answer,
    /// Milliseconds spent before answering.
    #[serde(default, alias = "timeSpentMs", skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<u64>,
}

impl Response {
    pub fn new(question_id: impl Into<String>, answer: impl Into<Answer>) -> Self {
        Self {
            question_id: question_id.into(),
            answer: answer.into(),
            time_spent: None,
        }
    }

    pub fn with_time_spent(mut self, ms: u64) -> Self {
        self.time_spent = Some(ms);
        self
    }
}
