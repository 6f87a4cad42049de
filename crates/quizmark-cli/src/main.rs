//! quizmark CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "quizmark", version, about = "Fuzzy-matching quiz grader")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate question set files
    Validate {
        /// Path to a question set file or directory
        #[arg(long)]
        questions: PathBuf,
    },

    /// List available question sets
    List {
        /// Directory to scan (default: question_dir from config)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Grade a single answer against an expected answer
    Check {
        /// The reference answer
        #[arg(long)]
        expected: String,

        /// The submitted answer
        #[arg(long)]
        answer: String,
    },

    /// Grade an answers file against a question set
    Grade {
        /// Question set file
        #[arg(long)]
        questions: PathBuf,

        /// Answers file: JSON array of strings, or one answer per line
        #[arg(long)]
        answers: PathBuf,

        /// Output format: text, json, markdown (default: from config)
        #[arg(long)]
        format: Option<String>,

        /// Directory to save the JSON report in
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Take a quiz interactively on the terminal
    Take {
        /// Question set file
        #[arg(long)]
        questions: PathBuf,
    },

    /// Create a starter config and example question set
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizmark=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { questions } => commands::validate::execute(questions),
        Commands::List { dir, config } => commands::list::execute(dir, config),
        Commands::Check { expected, answer } => commands::check::execute(expected, answer),
        Commands::Grade {
            questions,
            answers,
            format,
            output,
            config,
        } => commands::grade::execute(questions, answers, format, output, config),
        Commands::Take { questions } => commands::take::execute(questions),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
