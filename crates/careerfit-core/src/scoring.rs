//! Section scorers and the overall aggregation.
//!
//! Every section score lies on a 0–100 scale. Values stay unrounded here;
//! rounding happens once, when the [`ScoreReport`](crate::report::ScoreReport)
//! is assembled.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Answer, Category, Question, Response};
use crate::normalize::normalize;

/// Maps the 1–5 normalized range onto 0–100.
const SCALE_FACTOR: f64 = 20.0;

const PSYCHOMETRIC_WEIGHT: f64 = 0.3;
const TECHNICAL_WEIGHT: f64 = 0.3;
const WISCAR_WEIGHT: f64 = 0.4;

// ---------------------------------------------------------------------------
// Response lookup
// ---------------------------------------------------------------------------

/// Answers keyed by question id. A later response for the same id replaces
/// the earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseSet {
    answers: HashMap<String, Answer>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_responses<'a>(responses: impl IntoIterator<Item = &'a Response>) -> Self {
        let mut set = Self::new();
        for response in responses {
            set.insert(response.question_id.clone(), response.answer.clone());
        }
        set
    }

    /// Record an answer, returning the one it supersedes.
    pub fn insert(&mut self, question_id: String, answer: Answer) -> Option<Answer> {
        match self.answers.entry(question_id) {
            Entry::Occupied(mut slot) => {
                tracing::debug!(
                    question = %slot.key(),
                    old = %slot.get(),
                    new = %answer,
                    "response superseded by a later answer"
                );
                Some(slot.insert(answer))
            }
            Entry::Vacant(slot) => {
                slot.insert(answer);
                None
            }
        }
    }

    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.answers.keys().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a Response> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = &'a Response>>(iter: I) -> Self {
        Self::from_responses(iter)
    }
}

// ---------------------------------------------------------------------------
// Section scorers
// ---------------------------------------------------------------------------

/// Weighted mean of normalized answers over the questions matching `filter`,
/// scaled to 0–100. Unanswered questions are left out of both sums.
pub fn weighted_section_score<F>(questions: &[Question], responses: &ResponseSet, filter: F) -> f64
where
    F: Fn(&Question) -> bool,
{
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;

    for question in questions.iter().filter(|q| filter(q)) {
        if let Some(answer) = responses.get(&question.id) {
            let weight = question.weight();
            weighted_sum += normalize(answer, question) * weight;
            weight_sum += weight;
        }
    }

    if weight_sum > 0.0 {
        (weighted_sum / weight_sum) * SCALE_FACTOR
    } else {
        0.0
    }
}

pub fn psychometric_score(questions: &[Question], responses: &ResponseSet) -> f64 {
    weighted_section_score(questions, responses, |q| {
        q.category == Category::Psychometric
    })
}

/// Percentage of answered aptitude and knowledge questions answered correctly.
///
/// Question weights play no part here.
pub fn technical_score(questions: &[Question], responses: &ResponseSet) -> f64 {
    let mut correct = 0usize;
    let mut answered = 0usize;

    for question in questions.iter().filter(|q| q.category.is_technical()) {
        if let Some(answer) = responses.get(&question.id) {
            answered += 1;
            if question.is_correct(answer) {
                correct += 1;
            }
        }
    }

    if answered > 0 {
        (correct as f64 / answered as f64) * 100.0
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// WISCAR
// ---------------------------------------------------------------------------

/// The six WISCAR readiness dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    AbilityToLearn,
    RealWorldAlignment,
}

impl WiscarDimension {
    pub const ALL: [WiscarDimension; 6] = [
        WiscarDimension::Will,
        WiscarDimension::Interest,
        WiscarDimension::Skill,
        WiscarDimension::Cognitive,
        WiscarDimension::AbilityToLearn,
        WiscarDimension::RealWorldAlignment,
    ];

    /// Catalog subcategory tag feeding this dimension.
    pub fn subcategory(self) -> &'static str {
        match self {
            WiscarDimension::Will => "will",
            WiscarDimension::Interest => "interest",
            WiscarDimension::Skill => "skill",
            WiscarDimension::Cognitive => "cognitive",
            WiscarDimension::AbilityToLearn => "learning",
            WiscarDimension::RealWorldAlignment => "alignment",
        }
    }
}

impl fmt::Display for WiscarDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WiscarDimension::Will => "Will",
            WiscarDimension::Interest => "Interest",
            WiscarDimension::Skill => "Skill",
            WiscarDimension::Cognitive => "Cognitive",
            WiscarDimension::AbilityToLearn => "Ability To Learn",
            WiscarDimension::RealWorldAlignment => "Real World Alignment",
        };
        f.write_str(label)
    }
}

/// WISCAR subscores, 0–100 each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarScores {
    pub will: f64,
    pub interest: f64,
    pub skill: f64,
    pub cognitive: f64,
    pub ability_to_learn: f64,
    pub real_world_alignment: f64,
}

impl WiscarScores {
    pub fn compute(questions: &[Question], responses: &ResponseSet) -> Self {
        let mut scores = Self::default();
        for dimension in WiscarDimension::ALL {
            let subcategory = dimension.subcategory();
            let score = weighted_section_score(questions, responses, |q| {
                q.category == Category::Wiscar && q.subcategory == subcategory
            });
            scores.set(dimension, score);
        }
        scores
    }

    pub fn get(&self, dimension: WiscarDimension) -> f64 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::AbilityToLearn => self.ability_to_learn,
            WiscarDimension::RealWorldAlignment => self.real_world_alignment,
        }
    }

    pub fn set(&mut self, dimension: WiscarDimension, value: f64) {
        let slot = match dimension {
            WiscarDimension::Will => &mut self.will,
            WiscarDimension::Interest => &mut self.interest,
            WiscarDimension::Skill => &mut self.skill,
            WiscarDimension::Cognitive => &mut self.cognitive,
            WiscarDimension::AbilityToLearn => &mut self.ability_to_learn,
            WiscarDimension::RealWorldAlignment => &mut self.real_world_alignment,
        };
        *slot = value;
    }

    /// Unweighted mean of the six dimensions.
    pub fn average(&self) -> f64 {
        WiscarDimension::ALL.iter().map(|&d| self.get(d)).sum::<f64>() / 6.0
    }

    pub fn min(&self) -> f64 {
        WiscarDimension::ALL
            .iter()
            .map(|&d| self.get(d))
            .fold(f64::INFINITY, f64::min)
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Unrounded section scores for one assessment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionScores {
    pub psychometric: f64,
    pub technical: f64,
    pub wiscar: WiscarScores,
}

impl SectionScores {
    pub fn compute(questions: &[Question], responses: &ResponseSet) -> Self {
        Self {
            psychometric: psychometric_score(questions, responses),
            technical: technical_score(questions, responses),
            wiscar: WiscarScores::compute(questions, responses),
        }
    }

    /// Overall confidence: 30% psychometric, 30% technical, 40% WISCAR mean.
    pub fn overall(&self) -> f64 {
        self.psychometric * PSYCHOMETRIC_WEIGHT
            + self.technical * TECHNICAL_WEIGHT
            + self.wiscar.average() * WISCAR_WEIGHT
    }
}

/// Three-band verdict derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    Yes,
    Maybe,
    #[serde(rename = "Not Recommended")]
    NotRecommended,
}

impl Recommendation {
    /// Lower bounds are inclusive: 70 and up is `Yes`, 40 and up is `Maybe`.
    pub fn from_score(overall: f64) -> Self {
        if overall >= 70.0 {
            Recommendation::Yes
        } else if overall >= 40.0 {
            Recommendation::Maybe
        } else {
            Recommendation::NotRecommended
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Recommendation::Yes => "Industrial Engineering is a Great Fit!",
            Recommendation::Maybe => "Industrial Engineering Might Be For You",
            Recommendation::NotRecommended => "Consider Alternative Paths",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Yes => write!(f, "Yes"),
            Recommendation::Maybe => write!(f, "Maybe"),
            Recommendation::NotRecommended => write!(f, "Not Recommended"),
        }
    }
}

/// Round a 0–100 score for display.
pub fn round_score(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::questions;

    fn set(pairs: &[(&str, Answer)]) -> ResponseSet {
        let responses: Vec<Response> = pairs
            .iter()
            .map(|(id, a)| Response::new(*id, a.clone()))
            .collect();
        ResponseSet::from_responses(&responses)
    }

    #[test]
    fn empty_responses_score_zero() {
        let scores = SectionScores::compute(questions(), &ResponseSet::new());
        assert_eq!(scores.psychometric, 0.0);
        assert_eq!(scores.technical, 0.0);
        assert_eq!(scores.wiscar, WiscarScores::default());
        assert_eq!(scores.overall(), 0.0);
    }

    #[test]
    fn single_weighted_likert_reaches_full_score() {
        let responses = set(&[("psych_001", Answer::Numeric(5.0))]);
        assert!((psychometric_score(questions(), &responses) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn weights_shift_the_psychometric_mean() {
        // (5*1.2 + 1*1.3) / 2.5 * 20 = 58.4
        let responses = set(&[
            ("psych_001", Answer::Numeric(5.0)),
            ("psych_002", Answer::Numeric(1.0)),
        ]);
        assert!((psychometric_score(questions(), &responses) - 58.4).abs() < 1e-9);
    }

    #[test]
    fn technical_is_fraction_correct_ignoring_weights() {
        // apt_005 weighs 1.4, know_001 weighs 0.8
        let responses = set(&[
            ("apt_005", Answer::from("Station B, 20 units/hour")),
            ("know_001", Answer::from("Labor costs")),
        ]);
        assert_eq!(technical_score(questions(), &responses), 50.0);
    }

    #[test]
    fn wiscar_subcategories_map_to_dimensions() {
        let responses = set(&[
            ("wiscar_008", Answer::Numeric(5.0)),
            ("wiscar_003", Answer::Numeric(50.0)),
        ]);
        let wiscar = WiscarScores::compute(questions(), &responses);
        assert!((wiscar.ability_to_learn - 100.0).abs() < 1e-9);
        assert!((wiscar.interest - 50.0).abs() < 1e-9);
        assert_eq!(wiscar.will, 0.0);
        assert_eq!(wiscar.real_world_alignment, 0.0);
    }

    #[test]
    fn later_response_supersedes_earlier() {
        let responses = vec![
            Response::new("psych_004", 1.0),
            Response::new("psych_004", 5.0),
        ];
        let set = ResponseSet::from_responses(&responses);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("psych_004"), Some(&Answer::Numeric(5.0)));
    }

    #[derive(Clone, Default)]
    struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn superseded_response_is_logged_with_question_id() {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let previous = tracing::subscriber::with_default(subscriber, || {
            let mut set = ResponseSet::new();
            set.insert("psych_004".into(), Answer::Numeric(1.0));
            set.insert("psych_004".into(), Answer::Numeric(5.0))
        });
        assert_eq!(previous, Some(Answer::Numeric(1.0)));

        let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("response superseded"), "{logs}");
        assert!(logs.contains("question=psych_004"), "{logs}");
        assert!(logs.contains("old=1"), "{logs}");
    }

    #[test]
    fn all_perfect_sections_give_full_overall() {
        let scores = SectionScores {
            psychometric: 100.0,
            technical: 100.0,
            wiscar: WiscarScores {
                will: 100.0,
                interest: 100.0,
                skill: 100.0,
                cognitive: 100.0,
                ability_to_learn: 100.0,
                real_world_alignment: 100.0,
            },
        };
        assert!((scores.overall() - 100.0).abs() < 1e-9);
        assert_eq!(Recommendation::from_score(scores.overall()), Recommendation::Yes);
    }

    #[test]
    fn recommendation_band_boundaries() {
        assert_eq!(Recommendation::from_score(70.0), Recommendation::Yes);
        assert_eq!(Recommendation::from_score(69.99), Recommendation::Maybe);
        assert_eq!(Recommendation::from_score(40.0), Recommendation::Maybe);
        assert_eq!(Recommendation::from_score(39.99), Recommendation::NotRecommended);
        assert_eq!(Recommendation::NotRecommended.to_string(), "Not Recommended");
    }

    #[test]
    fn raising_a_section_never_lowers_the_band() {
        let base = SectionScores {
            psychometric: 50.0,
            technical: 30.0,
            wiscar: WiscarScores {
                will: 40.0,
                interest: 60.0,
                skill: 20.0,
                cognitive: 80.0,
                ability_to_learn: 50.0,
                real_world_alignment: 45.0,
            },
        };
        let mut parts = vec![Part::Psychometric, Part::Technical];
        parts.extend(WiscarDimension::ALL.map(Part::Wiscar));

        for part in parts {
            let mut previous = base;
            part.set(&mut previous, 0.0);
            for step in 1..=20 {
                let mut raised = base;
                part.set(&mut raised, step as f64 * 5.0);
                assert!(raised.overall() >= previous.overall(), "{part:?} at {step}");
                assert!(
                    band_rank(Recommendation::from_score(raised.overall()))
                        >= band_rank(Recommendation::from_score(previous.overall())),
                    "{part:?} at {step}"
                );
                previous = raised;
            }
        }
    }

    #[derive(Debug, Clone, Copy)]
    enum Part {
        Psychometric,
        Technical,
        Wiscar(WiscarDimension),
    }

    impl Part {
        fn set(self, scores: &mut SectionScores, value: f64) {
            match self {
                Part::Psychometric => scores.psychometric = value,
                Part::Technical => scores.technical = value,
                Part::Wiscar(dimension) => scores.wiscar.set(dimension, value),
            }
        }
    }

    fn band_rank(r: Recommendation) -> u8 {
        match r {
            Recommendation::NotRecommended => 0,
            Recommendation::Maybe => 1,
            Recommendation::Yes => 2,
        }
    }

    #[test]
    fn round_score_clamps_and_rounds() {
        assert_eq!(round_score(58.4), 58);
        assert_eq!(round_score(58.5), 59);
        assert_eq!(round_score(-3.0), 0);
        assert_eq!(round_score(140.0), 100);
    }

    #[test]
    fn wiscar_min_and_average() {
        let wiscar = WiscarScores {
            will: 10.0,
            interest: 20.0,
            skill: 30.0,
            cognitive: 40.0,
            ability_to_learn: 50.0,
            real_world_alignment: 60.0,
        };
        assert_eq!(wiscar.min(), 10.0);
        assert!((wiscar.average() - 35.0).abs() < 1e-9);
    }
}
