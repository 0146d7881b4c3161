//! Response file loading and boundary validation.
//!
//! Response lists are read from JSON (an array of `{questionId, answer,
//! timeSpent}` objects) or TOML (`[[responses]]` tables with the same keys).
//! Validation reports problems without changing what gets scored.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::AnswerError;
use crate::model::{Question, Response};

/// TOML wrapper: a bare top-level array is not valid TOML.
#[derive(Debug, Deserialize, Serialize)]
struct TomlResponseFile {
    #[serde(default)]
    responses: Vec<Response>,
}

/// Load an ordered response list, picking the format from the extension.
pub fn load_responses(path: &Path) -> Result<Vec<Response>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read responses file: {}", path.display()))?;

    let is_toml = path.extension().is_some_and(|ext| ext == "toml");
    if is_toml {
        parse_responses_toml(&content, path)
    } else {
        parse_responses_json(&content, path)
    }
}

/// Parse a JSON response array (useful for testing).
pub fn parse_responses_json(content: &str, source_path: &Path) -> Result<Vec<Response>> {
    serde_json::from_str(content)
        .with_context(|| format!("failed to parse JSON: {}", source_path.display()))
}

/// Parse `[[responses]]` tables (useful for testing).
pub fn parse_responses_toml(content: &str, source_path: &Path) -> Result<Vec<Response>> {
    let parsed: TomlResponseFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;
    Ok(parsed.responses)
}

/// Write a response list as pretty JSON.
pub fn save_responses(responses: &[Response], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(responses).context("failed to serialize responses")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write responses to {}", path.display()))?;
    Ok(())
}

/// A warning from response validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID the warning refers to.
    pub question_id: String,
    /// Warning message.
    pub message: String,
}

impl From<AnswerError> for ValidationWarning {
    fn from(err: AnswerError) -> Self {
        Self {
            question_id: err.question_id().to_string(),
            message: err.to_string(),
        }
    }
}

/// Validate responses against the built-in catalog.
pub fn validate_responses(responses: &[Response]) -> Vec<ValidationWarning> {
    validate_against(catalog::questions(), responses)
}

/// Validate responses against an explicit question list.
pub fn validate_against(questions: &[Question], responses: &[Response]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Later duplicates replace earlier answers when scored
    let mut seen_ids = HashSet::new();
    for response in responses {
        if !seen_ids.insert(response.question_id.as_str()) {
            warnings.push(ValidationWarning {
                question_id: response.question_id.clone(),
                message: format!(
                    "duplicate response for {}, the later answer is used",
                    response.question_id
                ),
            });
        }
    }

    let by_id: HashMap<&str, &Question> = questions.iter().map(|q| (q.id.as_str(), q)).collect();
    for response in responses {
        let result = match by_id.get(response.question_id.as_str()) {
            Some(q) => q.check_answer(&response.answer),
            None => Err(AnswerError::UnknownQuestion(response.question_id.clone())),
        };
        if let Err(err) = result {
            warnings.push(err.into());
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Answer;
    use std::path::PathBuf;

    const VALID_JSON: &str = r#"[
        {"questionId": "psych_001", "answer": 4, "timeSpent": 3200},
        {"questionId": "apt_001", "answer": "162"},
        {"questionId": "wiscar_003", "answer": 75}
    ]"#;

    const VALID_TOML: &str = r#"
[[responses]]
questionId = "psych_001"
answer = 4

[[responses]]
questionId = "apt_004"
answer = "64"
timeSpent = 1500
"#;

    #[test]
    fn parse_valid_json() {
        let responses = parse_responses_json(VALID_JSON, &PathBuf::from("r.json")).unwrap();
        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0].answer, Answer::Numeric(4.0));
        assert_eq!(responses[0].time_spent, Some(3200));
        assert_eq!(responses[1].answer, Answer::Text("162".into()));
        assert!(validate_responses(&responses).is_empty());
    }

    #[test]
    fn parse_valid_toml() {
        let responses = parse_responses_toml(VALID_TOML, &PathBuf::from("r.toml")).unwrap();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].answer, Answer::Numeric(4.0));
        assert_eq!(responses[1].time_spent, Some(1500));
    }

    #[test]
    fn parse_malformed_json() {
        let result = parse_responses_json("{ not json", &PathBuf::from("bad.json"));
        assert!(result.is_err());
    }

    #[test]
    fn validate_flags_unknown_and_duplicate_ids() {
        let responses = vec![
            Response::new("psych_001", 3.0),
            Response::new("psych_001", 4.0),
            Response::new("psych_999", 4.0),
        ];
        let warnings = validate_responses(&responses);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
        assert!(warnings
            .iter()
            .any(|w| w.question_id == "psych_999" && w.message.contains("unknown question")));
    }

    #[test]
    fn validate_flags_shape_problems() {
        let responses = vec![
            Response::new("psych_002", "Agree"),
            Response::new("wiscar_004", 120.0),
            Response::new("know_002", "Kaizen"),
        ];
        let warnings = validate_responses(&responses);
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].message.contains("expected a numeric answer"));
        assert!(warnings[1].message.contains("outside"));
        assert!(warnings[2].message.contains("not one of the offered options"));
    }

    #[test]
    fn validate_against_custom_question_list() {
        let questions: Vec<Question> = catalog::questions()[..2].to_vec();
        let responses = vec![
            Response::new("psych_002", 6.0),
            Response::new("psych_001", 4.0),
            Response::new("apt_001", "162"),
        ];
        let warnings = validate_against(&questions, &responses);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].question_id, "psych_002");
        assert!(warnings[0].message.contains("outside"));
        assert_eq!(warnings[1].question_id, "apt_001");
        assert!(warnings[1].message.contains("unknown question"));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("responses.json");
        let responses = vec![Response::new("psych_001", 5.0).with_time_spent(900)];

        save_responses(&responses, &path).unwrap();
        let loaded = load_responses(&path).unwrap();
        assert_eq!(loaded, responses);
    }
}
