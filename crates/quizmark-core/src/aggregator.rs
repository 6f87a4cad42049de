//! Session scoring and tier mapping.
//!
//! The score is `round(correct / total * SCORE_SCALE)`, rounding halves away
//! from zero. It is computed in integer arithmetic so results near `.5` do
//! not depend on float representation.

use crate::error::GradingError;
use crate::model::{FeedbackTier, ScoreResult, Verification};

/// Maximum score of a session.
pub const SCORE_SCALE: u32 = 20;

/// Lowest score that still earns [`FeedbackTier::Silver`].
pub const SILVER_MIN_SCORE: u32 = 17;

/// Score a fully graded session.
///
/// # Errors
///
/// [`GradingError::EmptySession`] for an empty slice,
/// [`GradingError::IncompleteSession`] if any entry is still `None`.
pub fn score(verifications: &[Option<Verification>]) -> Result<ScoreResult, GradingError> {
    let total = verifications.len();
    if total == 0 {
        return Err(GradingError::EmptySession);
    }

    let pending = verifications.iter().filter(|v| v.is_none()).count();
    if pending > 0 {
        return Err(GradingError::IncompleteSession { pending });
    }

    let correct_count = verifications
        .iter()
        .flatten()
        .filter(|v| v.is_correct)
        .count();
    let score = scaled_score(correct_count, total);

    Ok(ScoreResult {
        correct_count,
        total,
        score,
        tier: tier_for(score),
    })
}

/// Map a score to its feedback tier. First match wins.
pub fn tier_for(score: u32) -> FeedbackTier {
    if score == SCORE_SCALE {
        FeedbackTier::Gold
    } else if score >= SILVER_MIN_SCORE {
        FeedbackTier::Silver
    } else {
        FeedbackTier::Fail
    }
}

/// `round(correct / total * SCORE_SCALE)` with halves rounded up.
fn scaled_score(correct: usize, total: usize) -> u32 {
    let scale = SCORE_SCALE as u64;
    let (correct, total) = (correct as u64, total as u64);
    ((2 * correct * scale + total) / (2 * total)) as u32
}
