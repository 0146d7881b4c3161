//! The `careerfit score` command.

use std::path::PathBuf;

use anyhow::Result;

use careerfit_core::{evaluate, parser};

use crate::config::{load_config_from, OutputFormat};

pub fn execute(
    responses_path: PathBuf,
    format: Option<String>,
    save: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let format: OutputFormat = match format {
        Some(f) => f.parse().map_err(|e: String| anyhow::anyhow!("{}", e))?,
        None => config.default_format,
    };

    let responses = parser::load_responses(&responses_path)?;
    tracing::info!(
        "scoring {} response(s) from {}",
        responses.len(),
        responses_path.display()
    );

    let warnings = parser::validate_responses(&responses);
    for w in &warnings {
        eprintln!("  [{}] WARNING: {}", w.question_id, w.message);
    }
    if config.strict {
        anyhow::ensure!(
            warnings.is_empty(),
            "{} validation warning(s) in {}, refusing to score in strict mode",
            warnings.len(),
            responses_path.display()
        );
    }

    let report = evaluate(&responses);
    super::print_report(&report, format)?;

    if save {
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
        let path = config.output_dir.join(format!("report-{timestamp}.json"));
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}
