//! Per-question response state machine.
//!
//! Each index moves `Unverified -> Unverified(text) -> Verified`. Graded
//! answers are locked; the only way back is a full [`ResponseStore::reset`].

use crate::error::GradingError;
use crate::model::Verification;

/// The submitted text and grading outcome for one question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseState {
    /// The raw text last submitted for this question.
    pub submitted_text: String,
    /// `None` until the answer has been graded.
    pub verification: Option<Verification>,
}

impl ResponseState {
    pub fn is_verified(&self) -> bool {
        self.verification.is_some()
    }
}

/// Response states for every question of a session, indexed like the
/// question list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseStore {
    entries: Vec<ResponseState>,
}

impl ResponseStore {
    /// Create a store with `n` empty, unverified entries.
    pub fn new(n: usize) -> Self {
        Self {
            entries: vec![ResponseState::default(); n],
        }
    }

    /// Reinitialize to `n` empty, unverified entries.
    pub fn reset(&mut self, n: usize) {
        self.entries.clear();
        self.entries.resize(n, ResponseState::default());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The state at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&ResponseState> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResponseState> {
        self.entries.iter()
    }

    /// Replace the submitted text of an unverified question.
    ///
    /// # Errors
    ///
    /// [`GradingError::InvalidIndex`] when out of range,
    /// [`GradingError::AlreadyVerified`] when the answer is locked. The state
    /// is left untouched on error.
    pub fn set_submitted_text(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), GradingError> {
        let entry = self.entry_mut(index)?;
        if entry.is_verified() {
            return Err(GradingError::AlreadyVerified { index });
        }
        entry.submitted_text = text.into();
        Ok(())
    }

    /// Lock in the grading outcome for a question.
    ///
    /// # Errors
    ///
    /// [`GradingError::InvalidIndex`] when out of range,
    /// [`GradingError::AlreadyVerified`] on a second call without a reset,
    /// [`GradingError::EmptyAnswer`] when no answer text was submitted.
    pub fn record_verification(
        &mut self,
        index: usize,
        verification: Verification,
    ) -> Result<(), GradingError> {
        let entry = self.entry_mut(index)?;
        if entry.is_verified() {
            return Err(GradingError::AlreadyVerified { index });
        }
        if entry.submitted_text.trim().is_empty() {
            return Err(GradingError::EmptyAnswer);
        }
        entry.verification = Some(verification);
        Ok(())
    }

    /// `true` iff every question has been graded.
    pub fn all_verified(&self) -> bool {
        self.entries.iter().all(ResponseState::is_verified)
    }

    /// Indices of questions that are still unverified.
    pub fn pending(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.is_verified())
            .map(|(i, _)| i)
            .collect()
    }

    /// Grading outcomes in question order.
    pub fn verifications(&self) -> Vec<Option<Verification>> {
        self.entries.iter().map(|e| e.verification).collect()
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut ResponseState, GradingError> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(GradingError::InvalidIndex { index, len })
    }
}
