//! A single grading session over one question set.
//!
//! `QuizSession` owns its questions and their response store, keeping both
//! index-aligned. All mutation goes through `&mut self`.

use crate::aggregator;
use crate::error::GradingError;
use crate::model::{Question, QuestionSet, ScoreResult, Verification};
use crate::report::SessionReport;
use crate::store::{ResponseState, ResponseStore};
use crate::verifier;

/// One pass over a question set.
#[derive(Debug, Clone)]
pub struct QuizSession {
    set: QuestionSet,
    responses: ResponseStore,
}

impl QuizSession {
    pub fn new(set: QuestionSet) -> Self {
        let responses = ResponseStore::new(set.len());
        Self { set, responses }
    }

    pub fn question_set(&self) -> &QuestionSet {
        &self.set
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.set.questions.get(index)
    }

    pub fn response(&self, index: usize) -> Option<&ResponseState> {
        self.responses.get(index)
    }

    /// Questions paired with their current response state.
    pub fn entries(&self) -> impl Iterator<Item = (&Question, &ResponseState)> {
        self.set.questions.iter().zip(self.responses.iter())
    }

    /// Store answer text for a question that has not been graded yet.
    pub fn submit(&mut self, index: usize, text: impl Into<String>) -> Result<(), GradingError> {
        self.responses.set_submitted_text(index, text)
    }

    /// Grade the stored answer for `index` and lock it in.
    pub fn verify(&mut self, index: usize) -> Result<Verification, GradingError> {
        let len = self.len();
        let (question, state) = self
            .set
            .questions
            .get(index)
            .zip(self.responses.get(index))
            .ok_or(GradingError::InvalidIndex { index, len })?;
        if state.is_verified() {
            return Err(GradingError::AlreadyVerified { index });
        }

        let verification = verifier::verify(&state.submitted_text, &question.expected_answer)?;
        self.responses.record_verification(index, verification)?;

        tracing::debug!(
            set = %self.set.id,
            index,
            similarity = verification.similarity,
            correct = verification.is_correct,
            "answer verified"
        );
        Ok(verification)
    }

    /// Submit and grade in one step.
    pub fn answer(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<Verification, GradingError> {
        self.submit(index, text)?;
        self.verify(index)
    }

    /// Discard every answer and verification.
    pub fn reset(&mut self) {
        self.responses.reset(self.set.len());
        tracing::debug!(set = %self.set.id, "session reset");
    }

    pub fn all_verified(&self) -> bool {
        self.responses.all_verified()
    }

    /// Indices still waiting for a graded answer.
    pub fn pending(&self) -> Vec<usize> {
        self.responses.pending()
    }

    /// Compute the session score. Recomputed on every call.
    pub fn score(&self) -> Result<ScoreResult, GradingError> {
        aggregator::score(&self.responses.verifications())
    }

    /// Snapshot of a fully graded session.
    pub fn report(&self) -> Result<SessionReport, GradingError> {
        SessionReport::from_session(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FeedbackTier;

    fn gulf_war() -> QuestionSet {
        QuestionSet {
            id: "gulf-war".into(),
            name: "Gulf War".into(),
            description: String::new(),
            questions: vec![
                Question::new("Which country did Iraq invade in August 1990?", "Kuwait"),
                Question::new("What was the name of the 1991 air campaign?", "Operation Desert Storm"),
                Question::new("What is the conflict also called?", "Guerra del Golfo Pérsico"),
            ],
        }
    }

    #[test]
    fn full_pass_to_gold() {
        let mut session = QuizSession::new(gulf_war());
        assert!(session.answer(0, "kuwait").unwrap().is_correct);
        assert!(session.answer(1, "desert storm").unwrap().is_correct);
        assert!(session.answer(2, "guerra del golfo persico").unwrap().is_correct);

        assert!(session.all_verified());
        let result = session.score().unwrap();
        assert_eq!(result.correct_count, 3);
        assert_eq!(result.tier, FeedbackTier::Gold);
    }

    #[test]
    fn scoring_requires_every_answer() {
        let mut session = QuizSession::new(gulf_war());
        session.answer(0, "Kuwait").unwrap();
        assert_eq!(
            session.score(),
            Err(GradingError::IncompleteSession { pending: 2 })
        );
        assert_eq!(session.pending(), vec![1, 2]);
    }

    #[test]
    fn blank_answer_leaves_question_unverified() {
        let mut session = QuizSession::new(gulf_war());
        assert_eq!(session.answer(0, "  "), Err(GradingError::EmptyAnswer));
        assert!(!session.response(0).unwrap().is_verified());
        assert_eq!(session.verify(1), Err(GradingError::EmptyAnswer));
    }

    #[test]
    fn graded_answers_cannot_change() {
        let mut session = QuizSession::new(gulf_war());
        session.answer(0, "Kuwait").unwrap();
        assert_eq!(
            session.submit(0, "Saudi Arabia"),
            Err(GradingError::AlreadyVerified { index: 0 })
        );
        assert_eq!(session.verify(0), Err(GradingError::AlreadyVerified { index: 0 }));
        assert_eq!(session.response(0).unwrap().submitted_text, "Kuwait");
    }

    #[test]
    fn reset_does_not_leak_old_verification() {
        let mut session = QuizSession::new(gulf_war());
        let first = session.answer(0, "Kuwait").unwrap();
        assert!(first.is_correct);

        session.reset();
        assert!(session.response(0).unwrap().verification.is_none());
        assert_eq!(session.response(0).unwrap().submitted_text, "");

        let second = session.answer(0, "Mongolia").unwrap();
        assert!(!second.is_correct);
        assert_eq!(session.response(0).unwrap().verification, Some(second));
    }

    #[test]
    fn out_of_range_question() {
        let mut session = QuizSession::new(gulf_war());
        assert_eq!(
            session.answer(3, "x"),
            Err(GradingError::InvalidIndex { index: 3, len: 3 })
        );
        assert_eq!(
            session.verify(9),
            Err(GradingError::InvalidIndex { index: 9, len: 3 })
        );
    }

    #[test]
    fn empty_set_cannot_be_scored() {
        let session = QuizSession::new(QuestionSet {
            id: "empty".into(),
            name: "Empty".into(),
            description: String::new(),
            questions: vec![],
        });
        assert!(session.all_verified());
        assert_eq!(session.score(), Err(GradingError::EmptySession));
    }
}
