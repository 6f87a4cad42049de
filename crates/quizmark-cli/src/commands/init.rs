//! The `quizmark init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizmark.toml").exists() {
        println!("quizmark.toml already exists, skipping.");
    } else {
        std::fs::write("quizmark.toml", SAMPLE_CONFIG)?;
        println!("Created quizmark.toml");
    }

    std::fs::create_dir_all("question-sets")?;
    let example_path = std::path::Path::new("question-sets/example.toml");
    if example_path.exists() {
        println!("question-sets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUESTION_SET)?;
        println!("Created question-sets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Add your own question sets under question-sets/");
    println!("  2. Run: quizmark validate --questions question-sets");
    println!("  3. Run: quizmark take --questions question-sets/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizmark configuration

question_dir = "./question-sets"
output_dir = "./quizmark-results"
default_format = "text"
"#;

const EXAMPLE_QUESTION_SET: &str = r#"[question_set]
id = "example"
name = "Example Question Set"
description = "A short set to get started"

[[questions]]
prompt = "Which ocean lies between Africa and Australia?"
answer = "Indian Ocean"

[[questions]]
prompt = "What is the capital city of Peru?"
answer = "Lima"

[[questions]]
prompt = "Which planet is known as the red planet?"
answer = "Mars"
"#;
