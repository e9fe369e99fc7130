//! CLI binary for trivia.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use trivia::{AnswerConfig, Solver};

/// Answer a multiple-choice trivia question from web search results.
#[derive(Parser)]
#[command(name = "trivia", version, about)]
struct Cli {
    /// The question, e.g. "Which of these is NOT a planet?"
    question: String,

    /// Candidate answers.
    #[arg(required = true, num_args = 1..)]
    answers: Vec<String>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full JSON report instead of just the answer.
    #[arg(long)]
    json: bool,

    /// Pages fetched for the question query.
    #[arg(long)]
    question_results: Option<usize>,

    /// Pages fetched per answer for the cross-evidence check.
    #[arg(long)]
    answer_results: Option<usize>,

    /// Skip the cross-evidence check.
    #[arg(long)]
    no_cross_check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the answer or report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("trivia=info,trivia_search=warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => AnswerConfig::from_file(path)?,
        None => AnswerConfig::default(),
    };
    if let Some(n) = cli.question_results {
        config.question_results = n;
    }
    if let Some(n) = cli.answer_results {
        config.answer_results = n;
    }
    if cli.no_cross_check {
        config.cross_check = false;
    }

    let solver = Solver::web(config)?;
    let report = solver
        .answer_with_report(&cli.question, cli.answers.as_slice())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "could not answer question");
            anyhow::anyhow!("trivia failed: {e}")
        })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.answer);
    }
    Ok(())
}
