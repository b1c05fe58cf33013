//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_BANNER, DEFAULT_CHANGELOG_FILE, DEFAULT_COMMITS_HEADER, DEFAULT_DATE_FORMAT,
    DEFAULT_TAG_PATTERN,
};

/// Main configuration for Countdown
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog configuration
    pub changelog: ChangelogConfig,

    /// Release notes configuration
    pub release_notes: ReleaseNotesConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path, relative to the working directory
    pub file: PathBuf,

    /// `chrono` format string for the release date in new headings
    pub date_format: String,

    /// Link template for new headings; `{tag}` is replaced by the tag name
    pub release_url: Option<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CHANGELOG_FILE),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            release_url: None,
        }
    }
}

impl ChangelogConfig {
    /// Render the release link for a tag, if a template is configured
    pub fn release_link(&self, tag: &str) -> Option<String> {
        self.release_url
            .as_ref()
            .map(|template| template.replace("{tag}", tag))
    }
}

/// Release notes configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseNotesConfig {
    /// First line of the rendered notes
    pub banner: String,

    /// Heading placed above the commit list
    pub commits_header: String,

    /// Glob used to select version tags (git `fnmatch` syntax)
    pub tag_pattern: String,

    /// Only follow first parents when listing commits
    pub first_parent: bool,

    /// Whether to append the commit list at all
    pub include_commits: bool,
}

impl Default for ReleaseNotesConfig {
    fn default() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_string(),
            commits_header: DEFAULT_COMMITS_HEADER.to_string(),
            tag_pattern: DEFAULT_TAG_PATTERN.to_string(),
            first_parent: true,
            include_commits: true,
        }
    }
}
