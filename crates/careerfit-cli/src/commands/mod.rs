//! Subcommand implementations.

pub mod init;
pub mod questions;
pub mod score;
pub mod take;
pub mod validate;

use anyhow::Result;
use comfy_table::{Cell, Table};

use careerfit_core::report::score_band;
use careerfit_core::scoring::WiscarDimension;
use careerfit_core::ScoreReport;

use crate::config::OutputFormat;

/// Print a score report to stdout in the requested format.
pub(crate) fn print_report(report: &ScoreReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Markdown => println!("{}", report.to_markdown()),
        OutputFormat::Text => print_text(report),
    }
    Ok(())
}

fn print_text(report: &ScoreReport) {
    println!("{}", report.recommendation.headline());
    println!(
        "Overall confidence: {}% ({})",
        report.overall_confidence_score,
        score_band(report.overall_confidence_score)
    );
    println!("Recommendation: {}", report.recommendation);

    let mut scores = Table::new();
    scores.set_header(vec!["Area", "Score"]);
    scores.add_row(vec![
        Cell::new("Psychometric Fit"),
        Cell::new(format!("{}%", report.psychometric_fit_score)),
    ]);
    scores.add_row(vec![
        Cell::new("Technical Readiness"),
        Cell::new(format!("{}%", report.technical_readiness_score)),
    ]);
    for dimension in WiscarDimension::ALL {
        scores.add_row(vec![
            Cell::new(dimension),
            Cell::new(format!("{}%", report.wiscar_scores.get(dimension))),
        ]);
    }
    println!("\n{scores}");

    let mut careers = Table::new();
    careers.set_header(vec!["Role", "Fit", "Level", "Skills"]);
    for m in &report.career_matches {
        careers.add_row(vec![
            Cell::new(&m.role),
            Cell::new(format!("{}%", m.fit_score)),
            Cell::new(m.fit_level),
            Cell::new(m.skills_needed.join(", ")),
        ]);
    }
    println!("\nCareer matches:\n{careers}");

    println!("\nNext steps:");
    for (i, step) in report.next_steps.iter().enumerate() {
        println!("  {}. {step}", i + 1);
    }

    println!("\nInsights:");
    for insight in &report.insights {
        println!("  - {insight}");
    }
}
