//! Error types for handback-distribute.

use std::path::PathBuf;

use thiserror::Error;

use handback_core::CoreError;

/// Infrastructure-level errors that abort a distribution run.
///
/// Per-student conditions (missing clone, empty feedback, push rejection)
/// are *not* errors — they are [`crate::StudentOutcome`] variants.
#[derive(Debug, Error)]
pub enum DistributeError {
    /// An error from config or roster loading.
    #[error("course error: {0}")]
    Core(#[from] CoreError),

    /// The top-level feedback directory is missing — nothing to distribute.
    #[error("feedback directory not found at {path}")]
    FeedbackRootMissing { path: PathBuf },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An error from the git gateway.
    #[error("git error: {0}")]
    Git(#[from] GitError),
}

/// Errors from running `git` against a local repository.
///
/// A rejected push is deliberately *not* represented here — it is a
/// [`crate::PushOutcome::Rejected`] value, so the pipeline's
/// continue-on-failure policy is a branch, not a catch.
#[derive(Debug, Error)]
pub enum GitError {
    /// The `git` binary could not be spawned at all.
    #[error("failed to run git in {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A git command exited non-zero.
    #[error("`git {command}` failed in {path}: {stderr}")]
    Command {
        command: String,
        path: PathBuf,
        stderr: String,
    },

    /// HEAD is detached; there is no branch to push.
    #[error("detached HEAD in {path}; cannot determine branch")]
    DetachedHead { path: PathBuf },
}

/// Convenience constructor for [`DistributeError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> DistributeError {
    DistributeError::Io {
        path: path.into(),
        source,
    }
}
