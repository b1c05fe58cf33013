//! CLI commands

mod completions;
mod notes;
mod prepare;

pub use completions::CompletionsCommand;
pub use notes::NotesCommand;
pub use prepare::PrepareCommand;

use std::path::{Path, PathBuf};

use countdown_core::{Config, ConfigError, ReleaseTag};

/// Parse the tag given on the command line or through `TAG`
fn resolve_tag(tag: Option<&str>) -> countdown_core::Result<ReleaseTag> {
    let tag = tag.ok_or(ConfigError::MissingTag)?;
    ReleaseTag::parse(tag)
}

/// Changelog path: the flag wins over the config, relative paths are taken
/// from the working directory
fn changelog_path(cwd: &Path, flag: Option<&Path>, config: &Config) -> PathBuf {
    cwd.join(flag.unwrap_or(config.changelog.file.as_path()))
}
