//! The `quizmark grade` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use quizmark_core::aggregator::SCORE_SCALE;
use quizmark_core::model::FeedbackTier;
use quizmark_core::parser;
use quizmark_core::report::SessionReport;
use quizmark_core::{GradingError, QuizSession};

use crate::config::load_config_from;

pub fn execute(
    questions_path: PathBuf,
    answers_path: PathBuf,
    format: Option<String>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = format.unwrap_or(config.default_format);
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json" | "markdown" | "md"),
        "unknown format: {format} (expected text, json or markdown)"
    );

    let set = parser::parse_question_set(&questions_path)?;
    let answers = load_answers(&answers_path)?;
    anyhow::ensure!(
        answers.len() <= set.len(),
        "{} answers given but {} has only {} questions",
        answers.len(),
        set.name,
        set.len()
    );
    tracing::info!("grading {} answers against '{}'", answers.len(), set.id);

    let mut session = QuizSession::new(set);
    for (index, answer) in answers.into_iter().enumerate() {
        match session.answer(index, answer) {
            Ok(_) | Err(GradingError::EmptyAnswer) => {}
            Err(e) => return Err(e.into()),
        }
    }

    let report = match session.report() {
        Err(e @ GradingError::IncompleteSession { .. }) => {
            let listed: Vec<String> = session
                .pending()
                .iter()
                .map(|i| format!("#{}", i + 1))
                .collect();
            return Err(anyhow::Error::new(e)
                .context(format!("unanswered questions: {}", listed.join(", "))));
        }
        other => other?,
    };

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "markdown" | "md" => println!("{}", report.to_markdown()),
        _ => print_text(&report),
    }

    if let Some(dir) = output {
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
        let path = dir.join(format!("report-{}-{timestamp}.json", report.question_set.id));
        report.save_json(&path)?;
        tracing::info!("report saved to {}", path.display());
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

/// Read answers from a JSON array of strings or from a plain text file with
/// one answer per line. Blank lines keep their position, except trailing ones
/// which are dropped.
fn load_answers(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers file: {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse answers JSON: {}", path.display()))
    } else {
        let mut answers: Vec<String> = content.lines().map(str::to_string).collect();
        while answers.last().is_some_and(|line| line.trim().is_empty()) {
            answers.pop();
        }
        Ok(answers)
    }
}

fn print_text(report: &SessionReport) {
    let mut table = Table::new();
    table.set_header(vec!["#", "Answer", "Expected", "Similarity", "Result"]);

    for r in &report.responses {
        table.add_row(vec![
            Cell::new(r.index + 1),
            Cell::new(&r.submitted_text),
            Cell::new(&r.expected_answer),
            Cell::new(format!("{:.1}%", r.verification.similarity * 100.0)),
            Cell::new(r.band),
        ]);
    }

    println!("{}\n{table}", report.question_set.name);
    println!(
        "\nScore: {}/{SCORE_SCALE} ({} of {} correct)",
        report.result.score, report.result.correct_count, report.result.total
    );
    println!("Tier: {}", report.result.tier);
    println!("{}", report.result.tier.headline());
    if report.result.tier == FeedbackTier::Gold {
        println!("*** Congratulations! ***");
    }
}
