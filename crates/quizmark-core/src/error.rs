//! Grading error types.
//!
//! Every error here is recoverable: it is returned to the immediate caller,
//! which decides what the user sees. The core never logs or retries them.

use thiserror::Error;

/// Errors raised by the verifier, the response store and the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradingError {
    /// Verification attempted with blank (post-trim) submitted text.
    #[error("answer is empty")]
    EmptyAnswer,

    /// An operation referenced a question index outside `[0, len)`.
    #[error("question index {index} out of range (session has {len} questions)")]
    InvalidIndex { index: usize, len: usize },

    /// Mutation attempted on an index that was already graded.
    #[error("question {index} is already verified")]
    AlreadyVerified { index: usize },

    /// Scoring attempted while some questions are still unverified.
    #[error("session incomplete: {pending} question(s) not yet verified")]
    IncompleteSession { pending: usize },

    /// Scoring attempted on a zero-length question set.
    #[error("session has no questions")]
    EmptySession,
}
