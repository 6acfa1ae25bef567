//! Handback core library — domain types, course configuration, roster.
//!
//! Public API surface:
//! - [`types`] — newtypes ([`Student`], [`Assignment`])
//! - [`error`] — [`CoreError`]
//! - [`config`] — load / write the course `config.yml`
//! - [`roster`] — ordered student list from the roster CSV

pub mod config;
pub mod error;
pub mod roster;
pub mod types;

pub use config::CourseConfig;
pub use error::CoreError;
pub use types::{Assignment, Student};
