//! The `careerfit validate` command.

use std::path::PathBuf;

use anyhow::Result;

use careerfit_core::catalog;
use careerfit_core::parser;
use careerfit_core::scoring::ResponseSet;

pub fn execute(responses_path: PathBuf) -> Result<()> {
    let responses = parser::load_responses(&responses_path)?;
    let answered = ResponseSet::from_responses(&responses);
    let known = answered
        .question_ids()
        .filter(|id| catalog::question(id).is_some())
        .count();

    println!(
        "Responses: {} ({} of {} questions answered)",
        responses.len(),
        known,
        catalog::questions().len()
    );

    let warnings = parser::validate_responses(&responses);
    for w in &warnings {
        println!("  [{}] WARNING: {}", w.question_id, w.message);
    }

    if warnings.is_empty() {
        println!("All responses valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
