//! Error types for handback-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from config and roster loading.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error (write path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    /// A missing required key (e.g. `clone_dir`) surfaces here.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The `config.yml` file did not exist at the expected path.
    #[error("config not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// The roster CSV did not exist at the configured path.
    #[error("roster not found at {path}")]
    RosterNotFound { path: PathBuf },

    /// The roster CSV was malformed.
    #[error("failed to read roster at {path}: {source}")]
    RosterRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The roster CSV header row lacks the required column.
    #[error("roster at {path} has no '{column}' column")]
    RosterColumnMissing { path: PathBuf, column: String },
}
