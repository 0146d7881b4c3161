//! Questionnaire session state.
//!
//! A session is a plain value: each transition consumes it and returns the
//! next state. Scoring never looks at the session, only at the response list
//! it hands over on completion.

use chrono::{DateTime, Utc};

use crate::catalog;
use crate::model::{Answer, Question, Response, Section};

/// Where the respondent is in the questionnaire.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentSession {
    section: Section,
    index: usize,
    responses: Vec<Response>,
    started_at: DateTime<Utc>,
    section_started_at: DateTime<Utc>,
}

/// Outcome of moving forward.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Another question remains.
    Question(AssessmentSession),
    /// The last question was passed; these are the collected responses.
    Complete(Vec<Response>),
}

impl AssessmentSession {
    /// Start at the first psychometric question.
    pub fn start(now: DateTime<Utc>) -> Self {
        Self {
            section: Section::Psychometric,
            index: 0,
            responses: Vec::new(),
            started_at: now,
            section_started_at: now,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn current_question(&self) -> &'static Question {
        catalog::section_questions(self.section)[self.index]
    }

    /// The answer already recorded for the current question, if any.
    pub fn current_answer(&self) -> Option<&Answer> {
        let id = &self.current_question().id;
        self.responses
            .iter()
            .find(|r| &r.question_id == id)
            .map(|r| &r.answer)
    }

    /// 1-based position across all sections.
    pub fn step_number(&self) -> usize {
        let before: usize = Section::ORDER
            .iter()
            .take_while(|&&s| s != self.section)
            .map(|&s| catalog::section_questions(s).len())
            .sum();
        before + self.index + 1
    }

    pub fn total_steps(&self) -> usize {
        Section::ORDER
            .iter()
            .map(|&s| catalog::section_questions(s).len())
            .sum()
    }

    /// Record an answer for the current question, replacing any earlier one.
    pub fn answer(mut self, answer: Answer, now: DateTime<Utc>) -> Self {
        let question_id = self.current_question().id.clone();
        let elapsed = (now - self.section_started_at).num_milliseconds().max(0) as u64;

        self.responses.retain(|r| r.question_id != question_id);
        self.responses.push(Response {
            question_id,
            answer,
            time_spent: Some(elapsed),
        });
        self
    }

    /// Move to the next question, crossing into the next section when needed.
    pub fn next(mut self, now: DateTime<Utc>) -> Step {
        let section_len = catalog::section_questions(self.section).len();
        if self.index + 1 < section_len {
            self.index += 1;
        } else if let Some(next) = self.section.next() {
            tracing::debug!(from = %self.section, to = %next, "section complete");
            self.section = next;
            self.index = 0;
        } else {
            return Step::Complete(self.responses);
        }
        self.section_started_at = now;
        Step::Question(self)
    }

    /// Move back one question. Stays put on the very first question.
    pub fn previous(mut self, now: DateTime<Utc>) -> Self {
        if self.index > 0 {
            self.index -= 1;
        } else if let Some(previous) = self.section.previous() {
            self.section = previous;
            self.index = catalog::section_questions(previous).len() - 1;
        } else {
            return self;
        }
        self.section_started_at = now;
        self
    }
}
