//! Question set loader.
//!
//! Loads question sets from TOML or JSON files and directories, and
//! validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Question, QuestionSet};

/// Intermediate TOML structure for question set files.
#[derive(Debug, Deserialize)]
struct TomlQuestionFile {
    question_set: TomlQuestionSetHeader,
    #[serde(default)]
    questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestionSetHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

/// JSON question files are either a bare list or a full set.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonQuestionFile {
    Bare(Vec<Question>),
    Full(QuestionSet),
}

/// Parse a single question set file. `.json` files are read as JSON,
/// everything else as TOML.
pub fn parse_question_set(path: &Path) -> Result<QuestionSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question set file: {}", path.display()))?;

    parse_question_set_str(&content, path)
}

/// Parse question set content, choosing the format from `source_path`.
pub fn parse_question_set_str(content: &str, source_path: &Path) -> Result<QuestionSet> {
    if is_json(source_path) {
        parse_json_str(content, source_path)
    } else {
        parse_toml_str(content, source_path)
    }
}

fn parse_toml_str(content: &str, source_path: &Path) -> Result<QuestionSet> {
    let parsed: TomlQuestionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    Ok(QuestionSet {
        id: parsed.question_set.id,
        name: parsed.question_set.name,
        description: parsed.question_set.description,
        questions: parsed.questions,
    })
}

fn parse_json_str(content: &str, source_path: &Path) -> Result<QuestionSet> {
    let parsed: JsonQuestionFile = serde_json::from_str(content)
        .with_context(|| format!("failed to parse JSON: {}", source_path.display()))?;

    match parsed {
        JsonQuestionFile::Full(set) => Ok(set),
        JsonQuestionFile::Bare(questions) => {
            let id = source_path
                .file_stem()
                .and_then(|s| s.to_str())
                .filter(|s| !s.is_empty())
                .with_context(|| {
                    format!("cannot derive a set id from {}", source_path.display())
                })?
                .to_string();
            Ok(QuestionSet {
                name: id.replace(['-', '_'], " "),
                id,
                description: String::new(),
                questions,
            })
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Recursively load all `.toml` and `.json` question sets from a directory,
/// sorted by id.
pub fn load_question_directory(dir: &Path) -> Result<Vec<QuestionSet>> {
    let mut sets = Vec::new();
    collect_question_sets(dir, &mut sets)?;
    sets.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(sets)
}

fn collect_question_sets(dir: &Path, sets: &mut Vec<QuestionSet>) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_question_sets(&path, sets)?;
        } else if path
            .extension()
            .is_some_and(|ext| ext == "toml" || ext == "json")
        {
            match parse_question_set(&path) {
                Ok(set) => sets.push(set),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(())
}

/// Load a single file, or every set under a directory.
pub fn load_question_sets(path: &Path) -> Result<Vec<QuestionSet>> {
    if path.is_dir() {
        load_question_directory(path)
    } else {
        Ok(vec![parse_question_set(path)?])
    }
}

/// A warning from question set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Zero-based question index (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a question set for common authoring issues.
pub fn validate_question_set(set: &QuestionSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if set.questions.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "question set has no questions and cannot be scored".into(),
        });
    }

    let mut seen_prompts = HashSet::new();
    for (i, q) in set.questions.iter().enumerate() {
        let prompt = q.prompt.trim();
        let answer = q.expected_answer.trim();

        if prompt.is_empty() {
            warnings.push(ValidationWarning {
                question: Some(i),
                message: "prompt is empty".into(),
            });
        } else if !seen_prompts.insert(prompt.to_lowercase()) {
            warnings.push(ValidationWarning {
                question: Some(i),
                message: format!("duplicate prompt: {prompt}"),
            });
        }

        if answer.is_empty() {
            warnings.push(ValidationWarning {
                question: Some(i),
                message: "expected answer is empty".into(),
            });
        } else if answer.chars().count() < 2 {
            warnings.push(ValidationWarning {
                question: Some(i),
                message: "expected answer is a single character and only matches exactly".into(),
            });
        }
    }

    warnings
}
