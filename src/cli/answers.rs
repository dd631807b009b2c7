//! Loading a prepared policy document instead of asking for it.

use crate::{
    constants::{JSON_EXTENSIONS, STDIN_INDICATOR, YAML_EXTENSIONS},
    error::{Error, Result},
    ioutils::read_from,
    model::NetworkSecurityConfig,
};
use std::path::Path;

/// Loads the policy from `--answers` or `--answers-file`.
///
/// `--answers` wins when both are given. Returns `None` when neither is set.
pub fn load_answers(
    answers: Option<&str>,
    answers_file: Option<&Path>,
) -> Result<Option<NetworkSecurityConfig>> {
    if let Some(answers) = answers {
        let content = if answers == STDIN_INDICATOR {
            read_from(std::io::stdin())?
        } else {
            answers.to_string()
        };
        return parse_json(&content).map(Some);
    }

    if let Some(path) = answers_file {
        return load_answers_file(path).map(Some);
    }

    Ok(None)
}

/// Reads a policy document, picking the format from the file extension.
pub fn load_answers_file(path: &Path) -> Result<NetworkSecurityConfig> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let content = std::fs::read_to_string(path)?;
    log::debug!("Loaded answers file {}", path.display());

    if JSON_EXTENSIONS.contains(&extension.as_str()) {
        parse_json(&content)
    } else if YAML_EXTENSIONS.contains(&extension.as_str()) {
        Ok(serde_yaml::from_str(&content)?)
    } else {
        Err(Error::AnswersFileTypeError {
            path: path.display().to_string(),
            extensions: JSON_EXTENSIONS.iter().chain(YAML_EXTENSIONS).copied().collect::<Vec<_>>().join(", "),
        })
    }
}

fn parse_json(content: &str) -> Result<NetworkSecurityConfig> {
    Ok(serde_json::from_str(content)?)
}
