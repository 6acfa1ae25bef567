//! Domain types for handback.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A strongly-typed student identifier (the GitHub username from the roster).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student(pub String);

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Student {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Student {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed assignment name, used as a directory segment in both the
/// feedback tree and the clone tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment(pub String);

impl Assignment {
    /// Repository directory name for one student: `<assignment>-<student>`.
    pub fn repo_name(&self, student: &Student) -> String {
        format!("{}-{}", self.0, student.0)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Assignment {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Assignment {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
