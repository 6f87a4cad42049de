//! The `quizmark take` command: an interactive quiz on stdin/stdout.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use quizmark_core::aggregator::SCORE_SCALE;
use quizmark_core::model::{FeedbackBand, FeedbackTier};
use quizmark_core::parser;
use quizmark_core::{GradingError, QuizSession};

const RESET_COMMAND: &str = ":reset";
const QUIT_COMMAND: &str = ":quit";

pub fn execute(questions_path: PathBuf) -> Result<()> {
    let set = parser::parse_question_set(&questions_path)?;
    tracing::info!("starting quiz '{}' ({} questions)", set.id, set.len());

    let mut session = QuizSession::new(set);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_quiz(&mut session, stdin.lock(), stdout.lock())
}

/// Drive one quiz over `session`, reading answers line by line.
pub fn run_quiz<R: BufRead, W: Write>(
    session: &mut QuizSession,
    input: R,
    mut out: W,
) -> Result<()> {
    let total = session.len();
    anyhow::ensure!(total > 0, GradingError::EmptySession);

    writeln!(out, "{} ({total} questions)", session.question_set().name)?;
    writeln!(out, "Type {RESET_COMMAND} to start over or {QUIT_COMMAND} to stop.")?;

    let mut lines = input.lines();
    let mut index = 0;
    while index < total {
        if let Some(question) = session.question(index) {
            write!(out, "\n[{}/{total}] {}\n> ", index + 1, question.prompt)?;
        }
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match line.trim() {
            RESET_COMMAND => {
                session.reset();
                index = 0;
                writeln!(out, "Answers cleared.")?;
                continue;
            }
            QUIT_COMMAND => break,
            _ => {}
        }

        match session.answer(index, line) {
            Ok(verification) => {
                let expected = session
                    .question(index)
                    .map(|q| q.expected_answer.as_str())
                    .unwrap_or_default();
                let similarity = verification.similarity * 100.0;
                match verification.band() {
                    FeedbackBand::NearPerfect => writeln!(out, "Correct!")?,
                    FeedbackBand::Imprecise => writeln!(
                        out,
                        "Almost perfect. Similarity: {similarity:.1}%. Correct answer: {expected}"
                    )?,
                    FeedbackBand::Incorrect => writeln!(
                        out,
                        "Incorrect. Similarity: {similarity:.1}%. Correct answer: {expected}"
                    )?,
                }
                index += 1;
            }
            Err(GradingError::EmptyAnswer) => writeln!(out, "Please type an answer.")?,
            Err(e) => return Err(e.into()),
        }
    }

    if !session.all_verified() {
        writeln!(
            out,
            "\nQuiz stopped with {} question(s) unanswered.",
            session.pending().len()
        )?;
        return Ok(());
    }

    let result = session.score()?;
    writeln!(
        out,
        "\nYour score: {}/{SCORE_SCALE} ({} of {} correct)",
        result.score, result.correct_count, result.total
    )?;
    writeln!(out, "{}", result.tier.headline())?;
    if result.tier == FeedbackTier::Gold {
        writeln!(out, "*** Congratulations! ***")?;
    }

    Ok(())
}
