//! Score report types with JSON persistence and markdown rendering.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::careers::CareerMatch;
use crate::scoring::{round_score, Recommendation, WiscarDimension, WiscarScores};

/// Rounded WISCAR subscores as shown to the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarReport {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability_to_learn: u8,
    pub real_world_alignment: u8,
}

impl WiscarReport {
    pub fn get(&self, dimension: WiscarDimension) -> u8 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::AbilityToLearn => self.ability_to_learn,
            WiscarDimension::RealWorldAlignment => self.real_world_alignment,
        }
    }
}

impl From<&WiscarScores> for WiscarReport {
    fn from(scores: &WiscarScores) -> Self {
        Self {
            will: round_score(scores.will),
            interest: round_score(scores.interest),
            skill: round_score(scores.skill),
            cognitive: round_score(scores.cognitive),
            ability_to_learn: round_score(scores.ability_to_learn),
            real_world_alignment: round_score(scores.real_world_alignment),
        }
    }
}

/// The result of one completed assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub psychometric_fit_score: u8,
    pub technical_readiness_score: u8,
    pub wiscar_scores: WiscarReport,
    pub overall_confidence_score: u8,
    pub recommendation: Recommendation,
    /// Sorted by fit score, highest first.
    pub career_matches: Vec<CareerMatch>,
    pub next_steps: Vec<String>,
    pub insights: Vec<String>,
}

/// One-line reading of an overall score.
pub fn score_band(score: u8) -> &'static str {
    if score >= 70 {
        "Strong alignment with Industrial Engineering"
    } else if score >= 40 {
        "Moderate potential for success in IE"
    } else {
        "Limited alignment with Industrial Engineering"
    }
}

impl ScoreReport {
    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ScoreReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {}\n\n", self.recommendation.headline()));
        md.push_str(&format!(
            "**Overall confidence:** {}% ({})\n\n",
            self.overall_confidence_score,
            score_band(self.overall_confidence_score)
        ));
        md.push_str(&format!("**Recommendation:** {}\n\n", self.recommendation));

        md.push_str("### Scores\n\n");
        md.push_str("| Area | Score |\n");
        md.push_str("|------|-------|\n");
        md.push_str(&format!(
            "| Psychometric Fit | {}% |\n",
            self.psychometric_fit_score
        ));
        md.push_str(&format!(
            "| Technical Readiness | {}% |\n",
            self.technical_readiness_score
        ));
        for dimension in WiscarDimension::ALL {
            md.push_str(&format!(
                "| {} | {}% |\n",
                dimension,
                self.wiscar_scores.get(dimension)
            ));
        }
        md.push('\n');

        if !self.career_matches.is_empty() {
            md.push_str("### Career Matches\n\n");
            md.push_str("| Role | Fit | Level | Skills |\n");
            md.push_str("|------|-----|-------|--------|\n");
            for m in &self.career_matches {
                md.push_str(&format!(
                    "| {} | {}% | {} | {} |\n",
                    m.role,
                    m.fit_score,
                    m.fit_level,
                    m.skills_needed.join(", ")
                ));
            }
            md.push('\n');
        }

        if !self.next_steps.is_empty() {
            md.push_str("### Next Steps\n\n");
            for (i, step) in self.next_steps.iter().enumerate() {
                md.push_str(&format!("{}. {}\n", i + 1, step));
            }
            md.push('\n');
        }

        if !self.insights.is_empty() {
            md.push_str("### Insights\n\n");
            for insight in &self.insights {
                md.push_str(&format!("- {insight}\n"));
            }
        }

        md
    }
}
