//! Handback — distribute graded feedback into student repositories.
//!
//! # Usage
//!
//! ```text
//! handback feedback <assignment> [--github] [--scrub] [--course <dir>]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::feedback::FeedbackArgs;

#[derive(Parser, Debug)]
#[command(
    name = "handback",
    version,
    about = "Copy graded feedback into each student's cloned repository",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Copy feedback for an assignment, commit, and optionally push.
    Feedback(FeedbackArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Feedback(args) => args.run(),
    }
}
