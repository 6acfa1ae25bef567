//! `handback feedback <assignment> [--github] [--scrub]`

use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Args;

use handback_core::{config, Assignment};
use handback_distribute::{
    distribute_feedback, DistributeOptions, SkipReason, StudentOutcome,
};

/// Arguments for `handback feedback`.
#[derive(Args, Debug)]
pub struct FeedbackArgs {
    /// Assignment name (directory segment in both the feedback tree and
    /// the clone tree).
    pub assignment: String,

    /// Push each student's commit to GitHub after committing.
    #[arg(long)]
    pub github: bool,

    /// Strip hidden-test regions from HTML reports before copying.
    #[arg(long)]
    pub scrub: bool,

    /// Course directory containing config.yml (defaults to the current
    /// directory).
    #[arg(long, value_name = "DIR")]
    pub course: Option<PathBuf>,
}

impl FeedbackArgs {
    pub fn run(self) -> Result<()> {
        ensure!(
            !self.assignment.trim().is_empty(),
            "assignment name must not be empty"
        );

        let course_dir = match self.course {
            Some(dir) => dir,
            None => std::env::current_dir().context("could not determine current directory")?,
        };
        let config = config::load_at(&course_dir).with_context(|| {
            format!("failed to load configuration from '{}'", course_dir.display())
        })?;

        let assignment = Assignment::from(self.assignment);
        let options = DistributeOptions {
            push: self.github,
            scrub: self.scrub,
        };
        let outcomes = distribute_feedback(&config, &assignment, options)
            .with_context(|| format!("feedback distribution failed for '{assignment}'"))?;

        print_outcomes(&assignment, &outcomes);

        // Per-student failures are reported above but never change the exit
        // code; only infrastructure failures exit non-zero.
        Ok(())
    }
}

fn print_outcomes(assignment: &Assignment, outcomes: &[StudentOutcome]) {
    let committed = outcomes
        .iter()
        .filter(|o| {
            matches!(
                o,
                StudentOutcome::Committed { .. } | StudentOutcome::CommittedAndPushed { .. }
            )
        })
        .count();
    let skipped = outcomes
        .iter()
        .filter(|o| matches!(o, StudentOutcome::Skipped { .. }))
        .count();
    let failed = outcomes.len() - committed - skipped;

    if outcomes.is_empty() {
        println!("✓ '{assignment}' — roster is empty, nothing to do");
        return;
    }

    println!("✓ '{assignment}' feedback processed ({committed} committed, {skipped} skipped, {failed} failed)");

    for outcome in outcomes {
        match outcome {
            StudentOutcome::Skipped {
                student,
                reason: SkipReason::CloneMissing,
            } => println!("  ·  {student} — local repository missing, skipped"),
            StudentOutcome::Skipped {
                student,
                reason: SkipReason::NoFeedbackFiles,
            } => println!("  ·  {student} — no feedback files, skipped"),
            StudentOutcome::Committed { student } => println!("  ✎  {student} — committed"),
            StudentOutcome::CommittedAndPushed { student } => {
                println!("  ↑  {student} — committed and pushed")
            }
            StudentOutcome::PushFailed { student, detail } => {
                println!("  ✗  {student} — push failed: {detail}")
            }
            StudentOutcome::Failed { student, detail } => {
                println!("  ✗  {student} — failed: {detail}")
            }
        }
    }
}
