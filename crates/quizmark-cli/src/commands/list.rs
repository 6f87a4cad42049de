//! The `quizmark list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizmark_core::parser::load_question_directory;

use crate::config::load_config_from;

pub fn execute(dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir,
        None => load_config_from(config_path.as_deref())?.question_dir,
    };
    anyhow::ensure!(
        dir.is_dir(),
        "question directory not found: {}",
        dir.display()
    );

    let sets = load_question_directory(&dir)?;
    if sets.is_empty() {
        println!("No question sets found in {}", dir.display());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Questions", "Description"]);
    for set in &sets {
        table.add_row(vec![
            Cell::new(&set.id),
            Cell::new(&set.name),
            Cell::new(set.len()),
            Cell::new(&set.description),
        ]);
    }

    println!("{table}");
    Ok(())
}
