//! The built-in question catalog.
//!
//! Twenty-seven questions across the psychometric, aptitude/knowledge and
//! WISCAR sections. Built once on first access and never modified.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::model::{Answer, Category, Question, QuestionType, Scale, Section};

const AGREEMENT_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

const INTEREST_LABELS: [&str; 2] = ["Not at all interested", "Extremely interested"];

struct Catalog {
    questions: Vec<Question>,
    by_id: HashMap<String, usize>,
}

fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let questions = build_questions();
        let by_id = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id.clone(), i))
            .collect();
        Catalog { questions, by_id }
    })
}

/// All questions in presentation order.
pub fn questions() -> &'static [Question] {
    &catalog().questions
}

/// Look up a question by id.
pub fn question(id: &str) -> Option<&'static Question> {
    let catalog = catalog();
    catalog.by_id.get(id).map(|&i| &catalog.questions[i])
}

/// Questions presented in `section`, in order.
pub fn section_questions(section: Section) -> Vec<&'static Question> {
    questions()
        .iter()
        .filter(|q| section.contains(q.category))
        .collect()
}

pub fn questions_by_subcategory(category: Category, subcategory: &str) -> Vec<&'static Question> {
    questions()
        .iter()
        .filter(|q| q.category == category && q.subcategory == subcategory)
        .collect()
}

/// Display title for a question's subcategory.
pub fn subcategory_title(subcategory: &str) -> &'static str {
    match subcategory {
        "interest" => "Interest & Motivation",
        "personality" => "Personality Fit",
        "cognitive" => "Cognitive Style",
        "motivation" => "Learning Motivation",
        "logical" => "Logical Reasoning",
        "numerical" => "Numerical Ability",
        "problem-solving" => "Problem Solving",
        "basics" => "Knowledge Check",
        "will" => "Persistence & Grit",
        "skill" => "Current Skills",
        "learning" => "Learning Ability",
        "alignment" => "Real-World Alignment",
        _ => "Assessment Question",
    }
}

fn likert(id: &str, category: Category, subcategory: &str, text: &str, weight: f64) -> Question {
    Question {
        id: id.into(),
        kind: QuestionType::Likert,
        category,
        subcategory: subcategory.into(),
        question: text.into(),
        scenario: None,
        options: None,
        scale: Some(Scale {
            min: 1.0,
            max: 5.0,
            labels: AGREEMENT_LABELS.iter().map(|l| l.to_string()).collect(),
        }),
        correct_answer: None,
        weight: Some(weight),
    }
}

fn slider(id: &str, subcategory: &str, text: &str, weight: f64) -> Question {
    Question {
        id: id.into(),
        kind: QuestionType::Slider,
        category: Category::Wiscar,
        subcategory: subcategory.into(),
        question: text.into(),
        scenario: None,
        options: None,
        scale: Some(Scale {
            min: 0.0,
            max: 100.0,
            labels: INTEREST_LABELS.iter().map(|l| l.to_string()).collect(),
        }),
        correct_answer: None,
        weight: Some(weight),
    }
}

#[allow(clippy::too_many_arguments)]
fn choice(
    id: &str,
    kind: QuestionType,
    category: Category,
    subcategory: &str,
    scenario: Option<&str>,
    text: &str,
    options: &[&str],
    correct: Option<&str>,
    weight: f64,
) -> Question {
    Question {
        id: id.into(),
        kind,
        category,
        subcategory: subcategory.into(),
        question: text.into(),
        scenario: scenario.map(str::to_string),
        options: Some(options.iter().map(|o| o.to_string()).collect()),
        scale: None,
        correct_answer: correct.map(Answer::from),
        weight: Some(weight),
    }
}

fn build_questions() -> Vec<Question> {
    use Category::{Aptitude, Knowledge, Psychometric, Wiscar};
    use QuestionType::{MultipleChoice, Scenario};

    vec![
        // Psychometric: interest
        likert(
            "psych_001",
            Psychometric,
            "interest",
            "I often wonder how processes can be improved and made more efficient.",
            1.2,
        ),
        likert(
            "psych_002",
            Psychometric,
            "interest",
            "I enjoy analyzing systems to find bottlenecks and inefficiencies.",
            1.3,
        ),
        likert(
            "psych_003",
            Psychometric,
            "interest",
            "I find it satisfying to optimize workflows and eliminate waste.",
            1.2,
        ),
        // Psychometric: personality
        likert(
            "psych_004",
            Psychometric,
            "personality",
            "I prefer structured environments over completely open-ended ones.",
            1.0,
        ),
        likert(
            "psych_005",
            Psychometric,
            "personality",
            "I enjoy working with both people and technical systems.",
            1.1,
        ),
        // Psychometric: cognitive style
        likert(
            "psych_006",
            Psychometric,
            "cognitive",
            "I enjoy finding logical flaws in arguments and processes.",
            1.2,
        ),
        likert(
            "psych_007",
            Psychometric,
            "cognitive",
            "I prefer data-driven decision making over intuition-based choices.",
            1.3,
        ),
        // Psychometric: motivation
        likert(
            "psych_008",
            Psychometric,
            "motivation",
            "I want to learn Industrial Engineering to solve real-world problems.",
            1.4,
        ),
        likert(
            "psych_009",
            Psychometric,
            "motivation",
            "I am motivated by the challenge of optimizing complex systems.",
            1.3,
        ),
        // Aptitude: logical reasoning
        choice(
            "apt_001",
            MultipleChoice,
            Aptitude,
            "logical",
            None,
            "In a sequence: 2, 6, 18, 54, ?, what is the next number?",
            &["108", "162", "216", "324"],
            Some("162"),
            1.0,
        ),
        choice(
            "apt_002",
            MultipleChoice,
            Aptitude,
            "logical",
            None,
            "If all engineers are problem-solvers, and some problem-solvers are creative, which conclusion is valid?",
            &[
                "All engineers are creative",
                "Some engineers might be creative",
                "No engineers are creative",
                "All creative people are engineers",
            ],
            Some("Some engineers might be creative"),
            1.2,
        ),
        // Aptitude: numerical ability
        choice(
            "apt_003",
            MultipleChoice,
            Aptitude,
            "numerical",
            None,
            "A factory produces 240 units per day with 8 workers. What is the productivity per worker per hour (8-hour workday)?",
            &["3 units/hour", "3.75 units/hour", "4 units/hour", "5 units/hour"],
            Some("3.75 units/hour"),
            1.1,
        ),
        choice(
            "apt_004",
            MultipleChoice,
            Aptitude,
            "numerical",
            None,
            "If defect rate decreases by 20% each month, and starts at 100 defects, how many defects after 2 months?",
            &["60", "64", "80", "76"],
            Some("64"),
            1.1,
        ),
        // Aptitude: problem solving
        choice(
            "apt_005",
            Scenario,
            Aptitude,
            "problem-solving",
            Some("A manufacturing line has three stations: A (2 min/unit), B (3 min/unit), C (1.5 min/unit)."),
            "What is the bottleneck and maximum throughput per hour?",
            &[
                "Station A, 30 units/hour",
                "Station B, 20 units/hour",
                "Station C, 40 units/hour",
                "No bottleneck, 60 units/hour",
            ],
            Some("Station B, 20 units/hour"),
            1.4,
        ),
        // Knowledge check
        choice(
            "know_001",
            MultipleChoice,
            Knowledge,
            "basics",
            None,
            "What does \"Just-in-Time\" manufacturing primarily aim to reduce?",
            &["Labor costs", "Inventory waste", "Machine downtime", "Quality defects"],
            Some("Inventory waste"),
            0.8,
        ),
        choice(
            "know_002",
            MultipleChoice,
            Knowledge,
            "basics",
            None,
            "Which tool is commonly used for process improvement in Industrial Engineering?",
            &["SWOT Analysis", "Six Sigma", "Porter's Five Forces", "PESTEL Analysis"],
            Some("Six Sigma"),
            0.8,
        ),
        // WISCAR: will
        likert(
            "wiscar_001",
            Wiscar,
            "will",
            "I persist in learning topics that initially seem hard or complex.",
            1.0,
        ),
        likert(
            "wiscar_002",
            Wiscar,
            "will",
            "I maintain focus on long-term goals even when facing setbacks.",
            1.1,
        ),
        // WISCAR: interest
        slider(
            "wiscar_003",
            "interest",
            "How interested are you in optimizing systems and processes?",
            1.3,
        ),
        slider(
            "wiscar_004",
            "interest",
            "How interested are you in working with data and analytics?",
            1.2,
        ),
        // WISCAR: skill
        likert(
            "wiscar_005",
            Wiscar,
            "skill",
            "I can use basic mathematical and statistical tools confidently.",
            1.1,
        ),
        likert(
            "wiscar_006",
            Wiscar,
            "skill",
            "I am comfortable with spreadsheet software and data analysis.",
            1.0,
        ),
        // WISCAR: cognitive readiness
        choice(
            "wiscar_007",
            MultipleChoice,
            Wiscar,
            "cognitive",
            None,
            "Which pattern comes next: Triangle, Square, Pentagon, ?",
            &["Hexagon", "Circle", "Rectangle", "Octagon"],
            Some("Hexagon"),
            1.0,
        ),
        // WISCAR: ability to learn
        likert(
            "wiscar_008",
            Wiscar,
            "learning",
            "Mistakes and failures are key opportunities for learning and growth.",
            1.2,
        ),
        likert(
            "wiscar_009",
            Wiscar,
            "learning",
            "I actively seek feedback to improve my understanding and skills.",
            1.1,
        ),
        // WISCAR: real-world alignment
        choice(
            "wiscar_010",
            Scenario,
            Wiscar,
            "alignment",
            Some("You are asked to redesign a warehouse layout to improve efficiency and reduce worker fatigue."),
            "How appealing does this project sound to you?",
            &[
                "Very appealing - I would love this challenge",
                "Somewhat appealing - Interesting but not exciting",
                "Neutral - Just another task to complete",
                "Not very appealing - Seems tedious",
                "Not appealing at all - Would prefer different work",
            ],
            None,
            1.4,
        ),
        choice(
            "wiscar_011",
            Scenario,
            Wiscar,
            "alignment",
            Some("A company wants to reduce production costs by 15% while maintaining quality standards."),
            "How confident are you in tackling this type of challenge?",
            &[
                "Very confident - This is exactly what I want to do",
                "Confident - I could learn and succeed at this",
                "Somewhat confident - With training, I could handle it",
                "Not very confident - This seems quite difficult",
                "Not confident at all - This is not for me",
            ],
            None,
            1.3,
        ),
    ]
}
