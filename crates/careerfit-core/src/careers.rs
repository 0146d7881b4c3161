//! Career role matching.
//!
//! Each role's fit score is the mean of three role-specific inputs drawn from
//! the WISCAR dimensions and the technical score.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scoring::{round_score, WiscarDimension, WiscarScores};

/// Suitability tier derived from a fit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitLevel {
    High,
    Medium,
    Low,
}

impl FitLevel {
    pub fn from_score(fit_score: u8) -> Self {
        if fit_score >= 75 {
            FitLevel::High
        } else if fit_score >= 50 {
            FitLevel::Medium
        } else {
            FitLevel::Low
        }
    }
}

impl fmt::Display for FitLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitLevel::High => write!(f, "High"),
            FitLevel::Medium => write!(f, "Medium"),
            FitLevel::Low => write!(f, "Low"),
        }
    }
}

/// One input to a role's fit formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitInput {
    Wiscar(WiscarDimension),
    Technical,
}

impl FitInput {
    fn value(self, wiscar: &WiscarScores, technical: f64) -> f64 {
        match self {
            FitInput::Wiscar(dimension) => wiscar.get(dimension),
            FitInput::Technical => technical,
        }
    }
}

/// A career role and the inputs its fit score averages.
#[derive(Debug, Clone, Copy)]
pub struct CareerRole {
    pub role: &'static str,
    pub description: &'static str,
    pub skills_needed: &'static [&'static str],
    pub inputs: [FitInput; 3],
}

impl CareerRole {
    /// Unrounded mean of the role's three inputs.
    pub fn fit(&self, wiscar: &WiscarScores, technical: f64) -> f64 {
        self.inputs
            .iter()
            .map(|input| input.value(wiscar, technical))
            .sum::<f64>()
            / self.inputs.len() as f64
    }
}

/// The roles scored for every assessment, in declaration order.
pub const ROLES: [CareerRole; 4] = [
    CareerRole {
        role: "Process Engineer",
        description: "Designs and improves manufacturing workflows",
        skills_needed: &["Process optimization", "Data analysis", "Systems thinking"],
        inputs: [
            FitInput::Wiscar(WiscarDimension::Skill),
            FitInput::Wiscar(WiscarDimension::RealWorldAlignment),
            FitInput::Technical,
        ],
    },
    CareerRole {
        role: "Supply Chain Analyst",
        description: "Manages flow of goods and data through supply networks",
        skills_needed: &["Forecasting", "Excel/Analytics", "Optimization"],
        inputs: [
            FitInput::Wiscar(WiscarDimension::Interest),
            FitInput::Wiscar(WiscarDimension::Cognitive),
            FitInput::Technical,
        ],
    },
    CareerRole {
        role: "Quality Engineer",
        description: "Ensures standards and reduces waste in production",
        skills_needed: &["Quality control tools", "Six Sigma", "Statistical analysis"],
        inputs: [
            FitInput::Wiscar(WiscarDimension::Skill),
            FitInput::Technical,
            FitInput::Wiscar(WiscarDimension::Will),
        ],
    },
    CareerRole {
        role: "Operations Manager",
        description: "Oversees day-to-day operations and process improvements",
        skills_needed: &["Leadership", "Process management", "Problem-solving"],
        inputs: [
            FitInput::Wiscar(WiscarDimension::RealWorldAlignment),
            FitInput::Wiscar(WiscarDimension::AbilityToLearn),
            FitInput::Wiscar(WiscarDimension::Will),
        ],
    },
];

/// A scored career role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerMatch {
    pub role: String,
    pub description: String,
    pub skills_needed: Vec<String>,
    pub fit_score: u8,
    pub fit_level: FitLevel,
}

/// Score every role and sort by fit score, highest first.
///
/// Roles with equal scores keep their declaration order.
pub fn match_careers(wiscar: &WiscarScores, technical: f64) -> Vec<CareerMatch> {
    let mut matches: Vec<CareerMatch> = ROLES
        .iter()
        .map(|role| {
            let fit_score = round_score(role.fit(wiscar, technical));
            CareerMatch {
                role: role.role.to_string(),
                description: role.description.to_string(),
                skills_needed: role.skills_needed.iter().map(|s| s.to_string()).collect(),
                fit_score,
                fit_level: FitLevel::from_score(fit_score),
            }
        })
        .collect();

    matches.sort_by(|a, b| b.fit_score.cmp(&a.fit_score));
    matches
}
