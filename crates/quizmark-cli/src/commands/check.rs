//! The `quizmark check` command.

use anyhow::Result;

use quizmark_core::verifier::verify;

pub fn execute(expected: String, answer: String) -> Result<()> {
    let verification = verify(&answer, &expected)?;

    println!("Similarity: {:.1}%", verification.similarity * 100.0);
    println!(
        "Verdict: {}",
        if verification.is_correct {
            "correct"
        } else {
            "incorrect"
        }
    );
    println!("Feedback: {}", verification.band());

    Ok(())
}
