//! Rule-based next steps and insights.
//!
//! Both lists are produced by walking a fixed sequence of threshold checks
//! against the unrounded scores. Order of the output follows rule order.

use crate::scoring::{Recommendation, WiscarScores};

pub fn next_steps(
    recommendation: Recommendation,
    wiscar: &WiscarScores,
    technical: f64,
) -> Vec<String> {
    let mut steps: Vec<&str> = Vec::new();

    match recommendation {
        Recommendation::Yes => {
            steps.push("Enroll in an Introduction to Industrial Engineering course");
            steps.push("Start learning Lean Manufacturing principles");
            if technical < 70.0 {
                steps.push("Strengthen your mathematical and statistical foundations");
            }
            steps.push("Explore internship opportunities in manufacturing or operations");
        }
        Recommendation::Maybe => {
            if wiscar.skill < 60.0 {
                steps.push("Complete a foundations course in mathematics and statistics");
            }
            if wiscar.interest < 60.0 {
                steps.push("Job shadow an Industrial Engineer to understand the field better");
            }
            steps.push("Take an online course in Operations Management");
            steps.push("Reassess your interests after gaining more exposure to the field");
        }
        Recommendation::NotRecommended => {
            steps.push("Consider alternative fields like Business Analysis or Project Management");
            steps.push("Explore your strongest areas identified in this assessment");
            if wiscar.cognitive > 70.0 {
                steps.push("Consider Data Analytics or Systems Analysis roles");
            }
            if wiscar.real_world_alignment > 60.0 {
                steps.push("Look into Logistics or Supply Chain roles");
            }
        }
    }

    steps.into_iter().map(String::from).collect()
}

pub fn insights(psychometric: f64, technical: f64, wiscar: &WiscarScores) -> Vec<String> {
    let mut insights: Vec<&str> = Vec::new();

    insights.push(if psychometric >= 75.0 {
        "Your personality and interests align strongly with Industrial Engineering"
    } else if psychometric >= 50.0 {
        "You show moderate personality fit for Industrial Engineering"
    } else {
        "Your personality profile suggests you might prefer other engineering disciplines"
    });

    insights.push(if technical >= 80.0 {
        "Your technical aptitude is excellent for engineering work"
    } else if technical >= 60.0 {
        "Your technical skills are adequate but could benefit from strengthening"
    } else {
        "Focus on building fundamental technical and analytical skills"
    });

    if wiscar.interest > 80.0 {
        insights.push("Your high interest level is a strong predictor of success in IE");
    }
    if wiscar.will > 80.0 {
        insights.push("Your persistence and grit will serve you well in challenging coursework");
    }
    if wiscar.ability_to_learn > 80.0 {
        insights.push("Your growth mindset and learning ability are key strengths");
    }

    if wiscar.min() < 40.0 {
        if wiscar.skill < 40.0 {
            insights.push("Consider building technical skills before pursuing IE programs");
        }
        if wiscar.cognitive < 40.0 {
            insights.push("Work on logical reasoning and problem-solving skills");
        }
    }

    insights.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(value: f64) -> WiscarScores {
        WiscarScores {
            will: value,
            interest: value,
            skill: value,
            cognitive: value,
            ability_to_learn: value,
            real_world_alignment: value,
        }
    }

    #[test]
    fn yes_with_weak_technical_adds_foundations_step() {
        let steps = next_steps(Recommendation::Yes, &uniform(90.0), 60.0);
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[2], "Strengthen your mathematical and statistical foundations");
        assert_eq!(
            steps[3],
            "Explore internship opportunities in manufacturing or operations"
        );

        let strong = next_steps(Recommendation::Yes, &uniform(90.0), 70.0);
        assert_eq!(strong.len(), 3);
    }

    #[test]
    fn maybe_branches_on_skill_and_interest() {
        let mut wiscar = uniform(70.0);
        wiscar.skill = 59.0;
        wiscar.interest = 60.0;
        let steps = next_steps(Recommendation::Maybe, &wiscar, 50.0);
        assert_eq!(
            steps,
            vec![
                "Complete a foundations course in mathematics and statistics",
                "Take an online course in Operations Management",
                "Reassess your interests after gaining more exposure to the field",
            ]
        );
    }

    #[test]
    fn not_recommended_uses_strict_greater_than() {
        let mut wiscar = uniform(10.0);
        wiscar.cognitive = 70.0;
        wiscar.real_world_alignment = 60.5;
        let steps = next_steps(Recommendation::NotRecommended, &wiscar, 0.0);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2], "Look into Logistics or Supply Chain roles");
    }

    #[test]
    fn insight_bands_and_strengths() {
        let insights = insights(75.0, 80.0, &uniform(85.0));
        assert_eq!(
            insights,
            vec![
                "Your personality and interests align strongly with Industrial Engineering",
                "Your technical aptitude is excellent for engineering work",
                "Your high interest level is a strong predictor of success in IE",
                "Your persistence and grit will serve you well in challenging coursework",
                "Your growth mindset and learning ability are key strengths",
            ]
        );
    }

    #[test]
    fn weak_dimensions_trigger_skill_and_cognitive_messages() {
        let insights = insights(10.0, 10.0, &uniform(0.0));
        assert_eq!(insights.len(), 4);
        assert_eq!(
            insights[1],
            "Focus on building fundamental technical and analytical skills"
        );
        assert_eq!(
            insights[2],
            "Consider building technical skills before pursuing IE programs"
        );
        assert_eq!(insights[3], "Work on logical reasoning and problem-solving skills");
    }

    #[test]
    fn low_minimum_elsewhere_adds_nothing() {
        let mut wiscar = uniform(60.0);
        wiscar.will = 20.0;
        let insights = insights(55.0, 65.0, &wiscar);
        assert_eq!(
            insights,
            vec![
                "You show moderate personality fit for Industrial Engineering",
                "Your technical skills are adequate but could benefit from strengthening",
            ]
        );
    }
}
