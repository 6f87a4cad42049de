//! Core data model types for quizmark.
//!
//! Questions and question sets are read-only inputs; verifications and score
//! results are the values the grading core hands back to its callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::verifier::{CORRECT_THRESHOLD, NEAR_PERFECT_THRESHOLD};

/// A single quiz question with its reference answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The text shown to the person taking the quiz.
    #[serde(alias = "question")]
    pub prompt: String,
    /// The answer submissions are compared against.
    #[serde(rename = "answer", alias = "expected_answer")]
    pub expected_answer: String,
}

impl Question {
    pub fn new(prompt: impl Into<String>, expected_answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            expected_answer: expected_answer.into(),
        }
    }
}

/// A named collection of questions, e.g. one quiz subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    /// Unique identifier for this set.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of the subject.
    #[serde(default)]
    pub description: String,
    /// The questions, in presentation order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Outcome of grading one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    /// Whether the similarity reached the correctness threshold.
    pub is_correct: bool,
    /// Bigram similarity between the normalized answers, in `[0, 1]`.
    pub similarity: f64,
}

impl Verification {
    /// Build a verification from a similarity value, applying the threshold.
    pub fn from_similarity(similarity: f64) -> Self {
        Self {
            is_correct: similarity >= CORRECT_THRESHOLD,
            similarity,
        }
    }

    /// The feedback band for this verification.
    pub fn band(&self) -> FeedbackBand {
        if !self.is_correct {
            FeedbackBand::Incorrect
        } else if self.similarity >= NEAR_PERFECT_THRESHOLD {
            FeedbackBand::NearPerfect
        } else {
            FeedbackBand::Imprecise
        }
    }
}

/// Per-answer feedback classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackBand {
    /// Correct, and close enough that the reference answer need not be shown.
    NearPerfect,
    /// Correct, but far enough off that the reference answer is worth showing.
    Imprecise,
    Incorrect,
}

impl fmt::Display for FeedbackBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackBand::NearPerfect => write!(f, "near-perfect"),
            FeedbackBand::Imprecise => write!(f, "imprecise"),
            FeedbackBand::Incorrect => write!(f, "incorrect"),
        }
    }
}

/// Coarse session-level feedback derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackTier {
    Gold,
    Silver,
    Fail,
}

impl FeedbackTier {
    /// Short message a front end can show next to the score.
    pub fn headline(&self) -> &'static str {
        match self {
            FeedbackTier::Gold => "Gold medal: a flawless run.",
            FeedbackTier::Silver => "Silver medal: one step away from perfect.",
            FeedbackTier::Fail => "Not there yet: keep training.",
        }
    }
}

impl fmt::Display for FeedbackTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackTier::Gold => write!(f, "gold"),
            FeedbackTier::Silver => write!(f, "silver"),
            FeedbackTier::Fail => write!(f, "fail"),
        }
    }
}

impl FromStr for FeedbackTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gold" => Ok(FeedbackTier::Gold),
            "silver" => Ok(FeedbackTier::Silver),
            "fail" => Ok(FeedbackTier::Fail),
            other => Err(format!("unknown feedback tier: {other}")),
        }
    }
}

/// Aggregated result of a fully graded session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Number of answers graded correct.
    pub correct_count: usize,
    /// Number of questions in the session.
    pub total: usize,
    /// Score on the 0..=20 scale.
    pub score: u32,
    /// Feedback tier for the score.
    pub tier: FeedbackTier,
}
