//! Notes command: release notes for the release tag

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use countdown_changelog::{ChangelogDocument, ReleaseNotesComposer};
use countdown_core::config::load_config_or_default;
use countdown_git::{GitHistory, GitRepo};

use super::{changelog_path, resolve_tag};
use crate::cli::{output, Cli, OutputFormat};

/// Print release notes for the release tag
#[derive(Debug, Args)]
pub struct NotesCommand {
    /// Release tag (e.g. v1.2.0)
    #[arg(long, env = "TAG", value_name = "TAG")]
    pub tag: Option<String>,

    /// Changelog file (defaults to the configured changelog file)
    #[arg(long, value_name = "PATH")]
    pub changelog: Option<PathBuf>,

    /// Write the notes to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Leave out the commit list
    #[arg(long)]
    pub no_commits: bool,
}

impl NotesCommand {
    /// Execute the notes command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        self.run(cli, &cwd)
    }

    fn run(&self, cli: &Cli, cwd: &Path) -> anyhow::Result<()> {
        info!(tag = ?self.tag, no_commits = self.no_commits, "executing notes command");
        let (config, _) = load_config_or_default(cwd)?;
        let tag = resolve_tag(self.tag.as_deref())?;
        let path = changelog_path(cwd, self.changelog.as_deref(), &config);
        let document = ChangelogDocument::read(&path)?;

        let mut notes_config = config.release_notes.clone();
        if self.no_commits {
            notes_config.include_commits = false;
        }
        let first_parent = notes_config.first_parent;
        let include_commits = notes_config.include_commits;
        let composer = ReleaseNotesComposer::new(notes_config);

        let notes = if include_commits {
            let repo = GitRepo::discover(cwd)?;
            let history = GitHistory::new(&repo).with_first_parent(first_parent);
            composer.compose(&document, &tag, Some(&history))?
        } else {
            composer.compose(&document, &tag, None)?
        };

        let rendered = match cli.format {
            OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&notes)?),
            OutputFormat::Text => notes.markdown.clone(),
        };

        match &self.output {
            Some(target) => {
                let target = cwd.join(target);
                std::fs::write(&target, &rendered)?;
                if !cli.quiet {
                    output::success(&format!(
                        "Release notes for {} written to {}",
                        output::tag(tag.name()),
                        output::path(&target)
                    ));
                }
            }
            None => print!("{}", rendered),
        }

        Ok(())
    }
}
