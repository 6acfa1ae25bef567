//! Version-control gateway — a small, explicit wrapper around `git`
//! subprocess calls in a student repository.
//!
//! Every operation blocks until git exits; the pipeline is strictly
//! sequential so there is nothing to coordinate. Push rejection is a
//! [`PushOutcome`] value rather than an error, because the pipeline treats
//! it as a recordable per-student condition, not a reason to stop.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::debug;

use crate::error::GitError;

/// Outcome of [`GitRepo::commit_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A new commit was created.
    Committed,
    /// The working tree was already clean; committing was a no-op.
    NothingToCommit,
}

/// Outcome of [`GitRepo::push`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// The remote branch now reflects the local commit.
    Pushed,
    /// The remote refused the push (diverged history, unreachable remote, …).
    Rejected { detail: String },
}

/// Wrapper for executing git commands in one repository's working directory.
#[derive(Debug, Clone)]
pub struct GitRepo {
    workdir: PathBuf,
}

impl GitRepo {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Initialize a repository in the working directory.
    pub fn init(&self) -> Result<(), GitError> {
        self.run_checked(&["init", "-q"])?;
        Ok(())
    }

    /// Set the repo-local committer identity.
    ///
    /// Fixture helper: test repositories have no global git config to
    /// inherit, and `git commit` refuses to run without an identity.
    pub fn configure_user(&self, name: &str, email: &str) -> Result<(), GitError> {
        self.run_checked(&["config", "user.name", name])?;
        self.run_checked(&["config", "user.email", email])?;
        Ok(())
    }

    /// Stage everything and commit with `message`.
    ///
    /// A clean working tree is a successful no-op
    /// ([`CommitOutcome::NothingToCommit`]), never an error.
    pub fn commit_all(&self, message: &str) -> Result<CommitOutcome, GitError> {
        self.run_checked(&["add", "-A"])?;
        let status = self.run_checked(&["status", "--porcelain"])?;
        if status.trim().is_empty() {
            debug!("nothing to commit in {}", self.workdir.display());
            return Ok(CommitOutcome::NothingToCommit);
        }
        self.run_checked(&["commit", "-q", "-m", message])?;
        debug!("committed in {}", self.workdir.display());
        Ok(CommitOutcome::Committed)
    }

    /// Return the current branch name (errors on detached HEAD).
    pub fn current_branch(&self) -> Result<String, GitError> {
        let name = self
            .run_checked(&["rev-parse", "--abbrev-ref", "HEAD"])?
            .trim()
            .to_string();
        if name == "HEAD" {
            return Err(GitError::DetachedHead {
                path: self.workdir.clone(),
            });
        }
        Ok(name)
    }

    /// Push `branch` to `origin`.
    ///
    /// Returns [`PushOutcome::Rejected`] with git's stderr when the remote
    /// refuses; only a failure to spawn git at all is an error.
    pub fn push(&self, branch: &str) -> Result<PushOutcome, GitError> {
        let output = self.run(&["push", "-q", "origin", branch])?;
        if output.status.success() {
            debug!("pushed {} from {}", branch, self.workdir.display());
            return Ok(PushOutcome::Pushed);
        }
        Ok(PushOutcome::Rejected {
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }

    /// Check whether a remote with this name is configured.
    pub fn remote_exists(&self, name: &str) -> Result<bool, GitError> {
        let remotes = self.run_checked(&["remote"])?;
        Ok(remotes.lines().any(|r| r.trim() == name))
    }

    /// Add a named remote.
    pub fn remote_add(&self, name: &str, url: &str) -> Result<(), GitError> {
        self.run_checked(&["remote", "add", name, url])?;
        Ok(())
    }

    fn run(&self, args: &[&str]) -> Result<Output, GitError> {
        debug!("git {} (in {})", args.join(" "), self.workdir.display());
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| GitError::Spawn {
                path: self.workdir.clone(),
                source: e,
            })
    }

    fn run_checked(&self, args: &[&str]) -> Result<String, GitError> {
        let output = self.run(args)?;
        if !output.status.success() {
            return Err(GitError::Command {
                command: args.join(" "),
                path: self.workdir.clone(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

// ---------------------------------------------------------------------------
// Tests (require a `git` binary on PATH)
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_repo(dir: &Path) -> GitRepo {
        let repo = GitRepo::new(dir);
        repo.init().expect("git init");
        repo.configure_user("Test Instructor", "instructor@example.edu")
            .expect("git config");
        repo
    }

    fn init_bare(dir: &Path) {
        let out = Command::new("git")
            .args(["init", "-q", "--bare"])
            .current_dir(dir)
            .output()
            .expect("spawn git");
        assert!(out.status.success(), "git init --bare failed");
    }

    #[test]
    fn commit_all_creates_a_commit() {
        let dir = TempDir::new().expect("tempdir");
        let repo = init_repo(dir.path());
        std::fs::write(dir.path().join("feedback.html"), "<p>good</p>").unwrap();
        let outcome = repo.commit_all("Add feedback").expect("commit");
        assert_eq!(outcome, CommitOutcome::Committed);
        let head = repo.run_checked(&["log", "--oneline"]).expect("log");
        assert_eq!(head.lines().count(), 1);
    }

    #[test]
    fn clean_tree_is_nothing_to_commit() {
        let dir = TempDir::new().expect("tempdir");
        let repo = init_repo(dir.path());
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        repo.commit_all("first").expect("commit");
        let outcome = repo.commit_all("second").expect("commit");
        assert_eq!(outcome, CommitOutcome::NothingToCommit);
    }

    #[test]
    fn current_branch_resolves_after_first_commit() {
        let dir = TempDir::new().expect("tempdir");
        let repo = init_repo(dir.path());
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        repo.commit_all("first").expect("commit");
        let branch = repo.current_branch().expect("branch");
        assert!(!branch.is_empty());
        assert_ne!(branch, "HEAD");
    }

    #[test]
    fn remote_add_then_exists() {
        let dir = TempDir::new().expect("tempdir");
        let repo = init_repo(dir.path());
        assert!(!repo.remote_exists("origin").expect("remote"));
        repo.remote_add("origin", "/nowhere/remote.git")
            .expect("remote add");
        assert!(repo.remote_exists("origin").expect("remote"));
    }

    #[test]
    fn push_to_bare_remote_succeeds() {
        let remote = TempDir::new().expect("tempdir");
        init_bare(remote.path());

        let dir = TempDir::new().expect("tempdir");
        let repo = init_repo(dir.path());
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        repo.commit_all("first").expect("commit");
        repo.remote_add("origin", &remote.path().to_string_lossy())
            .expect("remote add");

        let branch = repo.current_branch().expect("branch");
        let outcome = repo.push(&branch).expect("push");
        assert_eq!(outcome, PushOutcome::Pushed);
    }

    #[test]
    fn push_to_unreachable_remote_is_rejected_not_error() {
        let dir = TempDir::new().expect("tempdir");
        let repo = init_repo(dir.path());
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        repo.commit_all("first").expect("commit");
        repo.remote_add("origin", "/nonexistent/remote.git")
            .expect("remote add");

        let branch = repo.current_branch().expect("branch");
        let outcome = repo.push(&branch).expect("push");
        assert!(matches!(outcome, PushOutcome::Rejected { .. }));
    }

    #[test]
    fn failed_command_reports_stderr() {
        let dir = TempDir::new().expect("tempdir");
        // Not a repository: status should fail loudly.
        let repo = GitRepo::new(dir.path());
        let err = repo.commit_all("nope").unwrap_err();
        assert!(matches!(err, GitError::Command { .. }));
        assert!(err.to_string().contains("git"));
    }
}
