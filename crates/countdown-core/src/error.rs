//! Error types for Countdown

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using CountdownError
pub type Result<T> = std::result::Result<T, CountdownError>;

/// Main error type for Countdown operations
#[derive(Debug, Error)]
pub enum CountdownError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No target tag was supplied
    #[error("No release tag given: set the TAG environment variable or pass --tag")]
    MissingTag,

    /// The target tag does not parse as a semantic version
    #[error("Release tag '{tag}' is not a semantic version: {reason}")]
    InvalidTag { tag: String, reason: String },

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// The release tag has no reference in the repository
    #[error("Tag not found in repository: {0}")]
    TagNotFound(String),

    /// The commit range for a release is empty
    #[error("No commits found between {from} and {to}")]
    NoCommits { from: String, to: String },

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Changelog file not found
    #[error("Changelog file not found at {0}")]
    FileNotFound(PathBuf),

    /// No `## Unreleased` heading ahead of the release sections
    #[error("Couldn't find an 'Unreleased' section in the changelog")]
    MissingUnreleased,

    /// No `## [<tag>]` heading in the changelog
    #[error("Couldn't find a release section for {0} in the changelog")]
    MissingReleaseSection(String),

    /// The release section exists but is not the newest release
    #[error("Release section for {tag} appears below the newer release {newer}")]
    ReleaseOutOfOrder { tag: String, newer: String },

    /// The release section has no content
    #[error("Release section for {0} is empty")]
    EmptySection(String),

    /// Failed to write changelog
    #[error("Failed to write changelog: {0}")]
    WriteFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CountdownError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
