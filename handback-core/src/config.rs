//! Course configuration — `config.yml` in the course directory.
//!
//! # Keys
//!
//! ```text
//! roster: classroom_roster.csv        # required; path to the roster CSV
//! course_directory: /course/demo      # required; course root
//! clone_dir: cloned-repos             # required; where student clones live
//! course_materials: nbgrader          # required; materials dir under the course root
//! files_to_ignore: [".DS_Store"]      # optional; file names never copied
//! ```
//!
//! # API pattern
//!
//! Loading takes an explicit course directory (`load_at`) so tests can point
//! at a `TempDir` instead of the process working directory. Relative `roster`,
//! `course_directory` and `clone_dir` values are resolved against that
//! directory at load time, so the derived path contracts
//! (`<course_directory>/<course_materials>/feedback/...` and
//! `<clone_dir>/<assignment>/<assignment>-<student>`) hold regardless of
//! where the process happens to run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{Assignment, Student};

/// File name of the course configuration inside the course directory.
pub const CONFIG_FILE: &str = "config.yml";

/// Resolved course configuration, passed by value into the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseConfig {
    /// Path to the roster CSV.
    pub roster: PathBuf,
    /// Course root directory.
    pub course_directory: PathBuf,
    /// Directory holding the per-assignment student clones.
    pub clone_dir: PathBuf,
    /// Materials directory name under the course root (e.g. `nbgrader`).
    pub course_materials: PathBuf,
    /// File names excluded from every copy operation.
    #[serde(default)]
    pub files_to_ignore: Vec<String>,
}

impl CourseConfig {
    /// `<course_directory>/<course_materials>/feedback/`
    pub fn feedback_root(&self) -> PathBuf {
        self.course_directory
            .join(&self.course_materials)
            .join("feedback")
    }

    /// `<course_directory>/<course_materials>/feedback/<student>/<assignment>/`
    pub fn feedback_source(&self, student: &Student, assignment: &Assignment) -> PathBuf {
        self.feedback_root().join(&student.0).join(&assignment.0)
    }

    /// `<clone_dir>/<assignment>/<assignment>-<student>/`
    pub fn clone_destination(&self, assignment: &Assignment, student: &Student) -> PathBuf {
        self.clone_dir
            .join(&assignment.0)
            .join(assignment.repo_name(student))
    }

    /// Whether a file name is excluded by the `files_to_ignore` list.
    pub fn is_ignored(&self, file_name: &str) -> bool {
        self.files_to_ignore.iter().any(|f| f == file_name)
    }
}

/// `<course_dir>/config.yml` — pure, no I/O.
pub fn config_path_at(course_dir: &Path) -> PathBuf {
    course_dir.join(CONFIG_FILE)
}

/// Load the configuration from `<course_dir>/config.yml`.
///
/// Returns `CoreError::ConfigNotFound` if absent, `CoreError::Parse`
/// (with path + line context) if malformed or missing a required key.
pub fn load_at(course_dir: &Path) -> Result<CourseConfig, CoreError> {
    let path = config_path_at(course_dir);
    if !path.exists() {
        return Err(CoreError::ConfigNotFound { path });
    }
    let contents = std::fs::read_to_string(&path)?;
    let mut config: CourseConfig =
        serde_yaml::from_str(&contents).map_err(|e| CoreError::Parse { path, source: e })?;
    config.roster = resolve(course_dir, config.roster);
    config.course_directory = resolve(course_dir, config.course_directory);
    config.clone_dir = resolve(course_dir, config.clone_dir);
    Ok(config)
}

/// Write the configuration to `<course_dir>/config.yml`.
///
/// Same atomic flow as every other write: serialize → `.tmp` sibling → rename.
pub fn write_at(config: &CourseConfig, course_dir: &Path) -> Result<(), CoreError> {
    let path = config_path_at(course_dir);
    let tmp = course_dir.join(format!("{CONFIG_FILE}.tmp"));
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(&tmp, yaml)?;
    std::fs::rename(&tmp, &path)?;
    Ok(())
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
