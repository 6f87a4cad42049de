//! Session report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregator::SCORE_SCALE;
use crate::error::GradingError;
use crate::model::{FeedbackBand, ScoreResult, Verification};
use crate::session::QuizSession;

/// A snapshot of a fully graded session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the question set.
    pub question_set: QuestionSetSummary,
    /// Per-question outcomes in question order.
    pub responses: Vec<ResponseRecord>,
    /// Aggregated score.
    pub result: ScoreResult,
}

/// Summary of a question set (without the questions themselves).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSetSummary {
    pub id: String,
    pub name: String,
    pub question_count: usize,
}

/// Outcome of one question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub index: usize,
    pub prompt: String,
    pub expected_answer: String,
    pub submitted_text: String,
    pub verification: Verification,
    pub band: FeedbackBand,
}

impl SessionReport {
    /// Build a report from a session in which every question is verified.
    pub fn from_session(session: &QuizSession) -> Result<Self, GradingError> {
        let result = session.score()?;

        // `score` succeeded, so every entry carries a verification.
        let responses: Vec<ResponseRecord> = session
            .entries()
            .enumerate()
            .filter_map(|(index, (question, state))| {
                state.verification.map(|verification| ResponseRecord {
                    index,
                    prompt: question.prompt.clone(),
                    expected_answer: question.expected_answer.clone(),
                    submitted_text: state.submitted_text.clone(),
                    verification,
                    band: verification.band(),
                })
            })
            .collect();

        let set = session.question_set();
        Ok(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            question_set: QuestionSetSummary {
                id: set.id.clone(),
                name: set.name.clone(),
                question_count: set.len(),
            },
            responses,
            result,
        })
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {}\n\n", self.question_set.name));
        md.push_str(&format!(
            "**Score:** {}/{} ({} of {} correct), tier: {}\n\n",
            self.result.score,
            SCORE_SCALE,
            self.result.correct_count,
            self.result.total,
            self.result.tier
        ));

        md.push_str("| # | Question | Answer | Expected | Similarity | Result |\n");
        md.push_str("|---|----------|--------|----------|------------|--------|\n");
        for r in &self.responses {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {:.1}% | {} |\n",
                r.index + 1,
                escape_cell(&r.prompt),
                escape_cell(&r.submitted_text),
                escape_cell(&r.expected_answer),
                r.verification.similarity * 100.0,
                r.band
            ));
        }

        md
    }
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}
