//! Countdown Core - shared types for release preparation
//!
//! This crate provides the error taxonomy, configuration loading and the
//! release tag type used by the changelog and git crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{ChangelogError, ConfigError, CountdownError, GitError, Result};
pub use types::{version_from_tag, ReleaseTag};
