//! Exit codes for the CLI

use countdown_core::{ChangelogError, ConfigError, CountdownError, GitError};

/// General error
pub const ERROR: i32 = 1;

/// Configuration error, including a missing or malformed TAG
pub const CONFIG_ERROR: i32 = 2;

/// Git error
pub const GIT_ERROR: i32 = 3;

/// Changelog document error
pub const CHANGELOG_ERROR: i32 = 6;

/// Pick the exit code for the first Countdown error in the chain
pub fn for_error(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<CountdownError>() {
            return match e {
                CountdownError::Config(_) => CONFIG_ERROR,
                CountdownError::Git(_) => GIT_ERROR,
                CountdownError::Changelog(_) => CHANGELOG_ERROR,
                _ => ERROR,
            };
        }
        if cause.is::<ConfigError>() {
            return CONFIG_ERROR;
        }
        if cause.is::<GitError>() {
            return GIT_ERROR;
        }
        if cause.is::<ChangelogError>() {
            return CHANGELOG_ERROR;
        }
    }
    ERROR
}
