//! Feedback distribution pipeline — one run per assignment.
//!
//! The loop is resilient per-student: a missing clone, an empty feedback
//! directory, or a rejected push is recorded in that student's outcome and
//! the run moves on, so one pass delivers feedback to as many students as
//! possible. Only infrastructure failures (unreadable roster, missing
//! feedback root, broken config) abort the whole run.

use tracing::{info, warn};

use handback_core::{roster, Assignment, CourseConfig, Student};

use crate::copy;
use crate::error::DistributeError;
use crate::git::{CommitOutcome, GitRepo, PushOutcome};
use crate::scrub;

/// Options for one distribution run.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistributeOptions {
    /// Push each student's commit to `origin` after committing.
    pub push: bool,
    /// Strip hidden-test regions from HTML reports before copying.
    pub scrub: bool,
}

/// Why a student was skipped without touching their repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The student's cloned repository does not exist yet. Expected for
    /// students who never accepted the assignment.
    CloneMissing,
    /// The feedback source directory is absent, empty, or holds only
    /// hidden files.
    NoFeedbackFiles,
}

/// Outcome of processing a single roster entry.
///
/// Exactly one is recorded per student; the pipeline never reports through
/// console output alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentOutcome {
    /// Nothing was copied or committed for this student.
    Skipped {
        student: Student,
        reason: SkipReason,
    },
    /// Feedback was copied and committed locally.
    Committed { student: Student },
    /// Feedback was copied, committed, and pushed to the remote.
    CommittedAndPushed { student: Student },
    /// The commit landed but the remote refused the push.
    PushFailed { student: Student, detail: String },
    /// An unexpected error (e.g. a copy permission failure) stopped this
    /// student mid-way. Recorded, not propagated — see the note in
    /// [`distribute_feedback`].
    Failed { student: Student, detail: String },
}

impl StudentOutcome {
    pub fn student(&self) -> &Student {
        match self {
            StudentOutcome::Skipped { student, .. }
            | StudentOutcome::Committed { student }
            | StudentOutcome::CommittedAndPushed { student }
            | StudentOutcome::PushFailed { student, .. }
            | StudentOutcome::Failed { student, .. } => student,
        }
    }
}

/// Run one full distribution pass for `assignment`.
///
/// For every roster entry, in roster order: locate the feedback source and
/// the student clone, scrub if requested, copy non-ignored files, commit,
/// and optionally push. Returns one [`StudentOutcome`] per roster entry.
pub fn distribute_feedback(
    config: &CourseConfig,
    assignment: &Assignment,
    options: DistributeOptions,
) -> Result<Vec<StudentOutcome>, DistributeError> {
    let students = roster::read_roster(&config.roster)?;

    let feedback_root = config.feedback_root();
    if !feedback_root.is_dir() {
        return Err(DistributeError::FeedbackRootMissing {
            path: feedback_root,
        });
    }

    let mut outcomes = Vec::with_capacity(students.len());
    for student in students {
        // Policy choice: unexpected per-student errors (copy failures,
        // broken repos) are recorded as Failed and the loop continues,
        // the same way a rejected push is handled. Only the precondition
        // checks above this loop abort the run.
        let outcome = match process_student(config, assignment, &student, options) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("processing failed for {student}: {e}");
                StudentOutcome::Failed {
                    student: student.clone(),
                    detail: e.to_string(),
                }
            }
        };
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

fn process_student(
    config: &CourseConfig,
    assignment: &Assignment,
    student: &Student,
    options: DistributeOptions,
) -> Result<StudentOutcome, DistributeError> {
    let source = config.feedback_source(student, assignment);
    let destination = config.clone_destination(assignment, student);

    if !destination.is_dir() {
        info!(
            "local student repository {} does not exist; skipping {student}",
            destination.display()
        );
        return Ok(StudentOutcome::Skipped {
            student: student.clone(),
            reason: SkipReason::CloneMissing,
        });
    }

    if !copy::feedback_files_present(&source) {
        warn!("no feedback files found in {}", source.display());
        return Ok(StudentOutcome::Skipped {
            student: student.clone(),
            reason: SkipReason::NoFeedbackFiles,
        });
    }

    if options.scrub {
        let stats = scrub::scrub_reports(&source)?;
        info!(
            "{student}: scrubbed {} of {} feedback files",
            stats.files_scrubbed, stats.files_seen
        );
    }

    let copied = copy::copy_files(&source, &destination, config)?;
    info!("{student}: copied {copied} files to {}", destination.display());

    let repo = GitRepo::new(&destination);
    let message = format!("Add feedback for {assignment}");
    match repo.commit_all(&message)? {
        CommitOutcome::Committed => {}
        CommitOutcome::NothingToCommit => {
            info!("{student}: feedback already up to date, nothing to commit");
        }
    }

    if !options.push {
        return Ok(StudentOutcome::Committed {
            student: student.clone(),
        });
    }

    let branch = repo.current_branch()?;
    match repo.push(&branch)? {
        PushOutcome::Pushed => Ok(StudentOutcome::CommittedAndPushed {
            student: student.clone(),
        }),
        PushOutcome::Rejected { detail } => {
            warn!("push failed for repo {}: {detail}", destination.display());
            Ok(StudentOutcome::PushFailed {
                student: student.clone(),
                detail,
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Tests (require a `git` binary on PATH)
// ---------------------------------------------------------------------------
