//! careerfit CLI: take the questionnaire and score response sets.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "careerfit",
    version,
    about = "Career-fit questionnaire and scoring engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a response file
    Score {
        /// Path to a .json or .toml response file
        #[arg(long)]
        responses: PathBuf,

        /// Output format: text, json, markdown (defaults to the config value)
        #[arg(long)]
        format: Option<String>,

        /// Also save the report JSON to the output directory
        #[arg(long)]
        save: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a response file against the question catalog
    Validate {
        /// Path to a .json or .toml response file
        #[arg(long)]
        responses: PathBuf,
    },

    /// List catalog questions
    Questions {
        /// Only show one section: psychometric, aptitude, wiscar
        #[arg(long)]
        section: Option<String>,
    },

    /// Take the questionnaire interactively
    Take {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example response file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("careerfit=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            responses,
            format,
            save,
            config,
        } => commands::score::execute(responses, format, save, config),
        Commands::Validate { responses } => commands::validate::execute(responses),
        Commands::Questions { section } => commands::questions::execute(section),
        Commands::Take { config } => commands::take::execute(config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
