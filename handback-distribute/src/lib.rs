//! # handback-distribute
//!
//! The feedback distribution pipeline.
//!
//! Call [`distribute_feedback`] to copy one assignment's graded feedback into
//! every student clone named by the roster, committing (and optionally
//! pushing) each repository. One [`StudentOutcome`] is returned per roster
//! entry; per-student failures never abort the batch.

pub mod copy;
pub mod error;
pub mod git;
pub mod pipeline;
pub mod scrub;

pub use error::{DistributeError, GitError};
pub use git::{CommitOutcome, GitRepo, PushOutcome};
pub use pipeline::{distribute_feedback, DistributeOptions, SkipReason, StudentOutcome};
pub use scrub::ScrubStats;
