//! Answer verification: normalization, similarity and the correctness cutoff.

use crate::error::GradingError;
use crate::model::Verification;
use crate::similarity::similarity;

/// Minimum similarity for an answer to count as correct.
pub const CORRECT_THRESHOLD: f64 = 0.5;

/// Minimum similarity for a correct answer to count as near-perfect.
pub const NEAR_PERFECT_THRESHOLD: f64 = 0.85;

/// Trim surrounding whitespace and fold to lowercase.
///
/// Inner whitespace and accents are kept as they are.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Grade one submitted answer against the expected answer.
///
/// # Errors
///
/// Returns [`GradingError::EmptyAnswer`] if `submitted` is blank after
/// trimming.
pub fn verify(submitted: &str, expected: &str) -> Result<Verification, GradingError> {
    let submitted = normalize(submitted);
    if submitted.is_empty() {
        return Err(GradingError::EmptyAnswer);
    }
    let expected = normalize(expected);

    Ok(Verification::from_similarity(similarity(&submitted, &expected)))
}
