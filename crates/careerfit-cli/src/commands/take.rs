//! The `careerfit take` command.
//!
//! Reads one answer per line from stdin. Scale questions take a number,
//! choice questions take the option number (or its exact text). `b` goes back
//! one question, `q` quits, and an empty line keeps the answer already given.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;

use careerfit_core::catalog;
use careerfit_core::model::{Answer, Question};
use careerfit_core::parser::save_responses;
use careerfit_core::session::{AssessmentSession, Step};
use careerfit_core::{evaluate, Section};

use crate::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = AssessmentSession::start(Utc::now());
    let mut shown_section: Option<Section> = None;

    loop {
        let question = session.current_question();
        if shown_section != Some(session.section()) {
            println!("\n== {} ==", session.section().title());
            shown_section = Some(session.section());
        }
        print_question(&session, question);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            anyhow::bail!(
                "input ended at question {} of {}",
                session.step_number(),
                session.total_steps()
            );
        };
        let line = line?;
        let input = line.trim();

        match input {
            "q" | "quit" => {
                println!("Assessment abandoned, nothing was scored.");
                return Ok(());
            }
            "b" | "back" => {
                session = session.previous(Utc::now());
                continue;
            }
            "" if session.current_answer().is_some() => {}
            _ => match parse_input(question, input) {
                Ok(answer) => session = session.answer(answer, Utc::now()),
                Err(message) => {
                    println!("  {message}");
                    continue;
                }
            },
        }

        match session.next(Utc::now()) {
            Step::Question(next) => session = next,
            Step::Complete(responses) => {
                let report = evaluate(&responses);
                println!();
                super::print_report(&report, config.default_format)?;

                let timestamp = Utc::now().format("%Y-%m-%dT%H%M%S");
                let responses_path = config
                    .output_dir
                    .join(format!("responses-{timestamp}.json"));
                let report_path = config.output_dir.join(format!("report-{timestamp}.json"));
                save_responses(&responses, &responses_path)?;
                report.save_json(&report_path)?;
                eprintln!("Responses saved to: {}", responses_path.display());
                eprintln!("Report saved to: {}", report_path.display());
                return Ok(());
            }
        }
    }
}

fn print_question(session: &AssessmentSession, question: &Question) {
    println!(
        "\nQuestion {}/{} · {}",
        session.step_number(),
        session.total_steps(),
        catalog::subcategory_title(&question.subcategory)
    );
    if let Some(scenario) = &question.scenario {
        println!("{scenario}");
    }
    println!("{}", question.question);

    if question.kind.is_choice() {
        for (i, option) in question.options().iter().enumerate() {
            println!("  {}. {option}", i + 1);
        }
    } else if let Some(scale) = &question.scale {
        let labels = match (scale.labels.first(), scale.labels.last()) {
            (Some(low), Some(high)) => format!(" ({low} .. {high})"),
            _ => String::new(),
        };
        println!("  Enter a number from {} to {}{labels}", scale.min, scale.max);
    }

    if let Some(current) = session.current_answer() {
        println!("  Current answer: {current} (press enter to keep)");
    }
}

/// Turn one line of input into an answer the question accepts.
fn parse_input(question: &Question, input: &str) -> Result<Answer, String> {
    if input.is_empty() {
        return Err("Please enter an answer.".into());
    }

    let answer = if question.kind.is_choice() {
        let options = question.options();
        if options.iter().any(|o| o == input) {
            Answer::Text(input.to_string())
        } else {
            match input.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => {
                    Answer::Text(options[n - 1].clone())
                }
                Ok(_) => return Err(format!("Choose an option from 1 to {}.", options.len())),
                Err(_) => Answer::Text(input.to_string()),
            }
        }
    } else {
        let value = input
            .parse::<f64>()
            .map_err(|_| format!("\"{input}\" is not a number."))?;
        Answer::Numeric(value)
    };

    question.check_answer(&answer).map_err(|e| e.to_string())?;
    Ok(answer)
}
