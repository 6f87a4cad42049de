//! quizmark-core: Similarity-based answer verification and session scoring.
//!
//! This crate defines the quiz data model, the bigram similarity engine, the
//! per-question response state machine and the session aggregator, plus the
//! question set loader and session reports built on top of them.

pub mod aggregator;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod session;
pub mod similarity;
pub mod store;
pub mod verifier;

pub use error::GradingError;
pub use session::QuizSession;
