//! CLI configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How score reports are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Top-level careerfit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerfitConfig {
    /// Format used when `--format` is not given.
    #[serde(default)]
    pub default_format: OutputFormat,
    /// Refuse to score response sets that fail validation.
    #[serde(default)]
    pub strict: bool,
    /// Where saved reports and responses go.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./careerfit-results")
}

impl Default for CareerfitConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::default(),
            strict: false,
            output_dir: default_output_dir(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `careerfit.toml` in the current directory
/// 2. `~/.config/careerfit/config.toml`
///
/// Environment variable overrides: `CAREERFIT_FORMAT`, `CAREERFIT_STRICT`.
pub fn load_config_from(path: Option<&Path>) -> Result<CareerfitConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("careerfit.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            toml::from_str::<CareerfitConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => CareerfitConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    Ok(config)
}

fn apply_env_overrides<F>(config: &mut CareerfitConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(format) = lookup("CAREERFIT_FORMAT") {
        config.default_format = format
            .parse()
            .map_err(|e: String| anyhow::anyhow!("CAREERFIT_FORMAT: {e}"))?;
    }

    if let Some(strict) = lookup("CAREERFIT_STRICT") {
        config.strict = matches!(strict.trim().to_lowercase().as_str(), "1" | "true" | "yes");
    }

    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("careerfit"))
}
