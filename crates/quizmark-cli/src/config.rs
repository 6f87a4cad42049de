//! CLI configuration (`quizmark.toml`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizmark configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizmarkConfig {
    /// Directory holding question set files.
    #[serde(default = "default_question_dir")]
    pub question_dir: PathBuf,
    /// Directory where graded session reports are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Output format for `grade` when none is given: text, json or markdown.
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_question_dir() -> PathBuf {
    PathBuf::from("./question-sets")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./quizmark-results")
}
fn default_format() -> String {
    "text".to_string()
}

impl Default for QuizmarkConfig {
    fn default() -> Self {
        Self {
            question_dir: default_question_dir(),
            output_dir: default_output_dir(),
            default_format: default_format(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied through as-is and never expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or from `quizmark.toml` in the current
/// directory if present. Falls back to defaults.
///
/// `QUIZMARK_QUESTION_DIR` overrides the question directory.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizmarkConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizmark.toml");
        local.exists().then_some(local)
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<QuizmarkConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => QuizmarkConfig::default(),
    };

    if let Ok(dir) = std::env::var("QUIZMARK_QUESTION_DIR") {
        config.question_dir = PathBuf::from(dir);
    }

    config.question_dir = resolve_path(&config.question_dir);
    config.output_dir = resolve_path(&config.output_dir);
    config.default_format = resolve_env_vars(&config.default_format);

    Ok(config)
}
