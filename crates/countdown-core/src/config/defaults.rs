//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "countdown.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "countdown.yaml";

/// Default changelog location
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Date format used in release headings
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// First line of the release notes
pub const DEFAULT_BANNER: &str = "## What's new";

/// Heading above the commit list
pub const DEFAULT_COMMITS_HEADER: &str = "## Commits";

/// Tags considered when looking for the previous release
pub const DEFAULT_TAG_PATTERN: &str = "v*";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".countdown.toml",
        ".countdown.yaml",
    ]
}
