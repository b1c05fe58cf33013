//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    validate_release_notes(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file.as_os_str().is_empty() {
        return Err(invalid("changelog.file", "file cannot be empty"));
    }

    if config.changelog.date_format.trim().is_empty() {
        return Err(invalid("changelog.date_format", "date format cannot be empty"));
    }

    if let Some(url) = &config.changelog.release_url {
        if !url.contains("{tag}") {
            return Err(invalid(
                "changelog.release_url",
                "must contain {tag} placeholder",
            ));
        }
    }

    Ok(())
}

fn validate_release_notes(config: &Config) -> Result<()> {
    let notes = &config.release_notes;

    if notes.tag_pattern.trim().is_empty() {
        return Err(invalid("release_notes.tag_pattern", "pattern cannot be empty"));
    }

    if notes.banner.trim().is_empty() {
        return Err(invalid("release_notes.banner", "banner cannot be empty"));
    }

    if notes.include_commits && notes.commits_header.trim().is_empty() {
        return Err(invalid(
            "release_notes.commits_header",
            "header cannot be empty when commits are included",
        ));
    }

    Ok(())
}

fn invalid(field: &str, message: &str) -> crate::error::CountdownError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
    .into()
}
