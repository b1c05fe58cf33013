//! Prepare command: file unreleased changelog entries under the release tag

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::Args;
use tracing::info;

use countdown_changelog::{ChangelogDocument, ChangelogUpdater, UpdateOutcome};
use countdown_core::config::load_config_or_default;

use super::{changelog_path, resolve_tag};
use crate::cli::{output, Cli, OutputFormat};

/// Move unreleased changelog entries under a heading for the release tag
#[derive(Debug, Args)]
pub struct PrepareCommand {
    /// Release tag (e.g. v1.2.0)
    #[arg(long, env = "TAG", value_name = "TAG")]
    pub tag: Option<String>,

    /// Changelog file (defaults to the configured changelog file)
    #[arg(long, value_name = "PATH")]
    pub changelog: Option<PathBuf>,

    /// Release date for the new heading (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Print the updated changelog instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl PrepareCommand {
    /// Execute the prepare command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        self.run(cli, &cwd)
    }

    fn run(&self, cli: &Cli, cwd: &Path) -> anyhow::Result<()> {
        info!(tag = ?self.tag, dry_run = self.dry_run, "executing prepare command");
        let (config, _) = load_config_or_default(cwd)?;
        let tag = resolve_tag(self.tag.as_deref())?;
        let path = changelog_path(cwd, self.changelog.as_deref(), &config);
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());

        let updater = ChangelogUpdater::new(config.changelog.clone());

        let (outcome, preview) = if self.dry_run {
            let mut document = ChangelogDocument::read(&path)?;
            let outcome = updater.update(&mut document, &tag, date)?;
            (outcome, Some(document.to_string()))
        } else {
            (updater.update_file(&path, &tag, date)?, None)
        };

        match cli.format {
            OutputFormat::Json => {
                let heading = match &outcome {
                    UpdateOutcome::Inserted { heading, .. } => Some(heading.as_str()),
                    UpdateOutcome::AlreadyUpToDate => None,
                };
                let report = serde_json::json!({
                    "tag": tag.name(),
                    "path": path.display().to_string(),
                    "changed": outcome.changed(),
                    "heading": heading,
                    "dry_run": self.dry_run,
                    "changelog": preview,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                if let Some(preview) = &preview {
                    print!("{}", preview);
                }
                if !cli.quiet {
                    match &outcome {
                        UpdateOutcome::AlreadyUpToDate => output::info(&format!(
                            "{} already up-to-date for {}",
                            output::path(&path),
                            output::tag(tag.name())
                        )),
                        UpdateOutcome::Inserted { heading, .. } if self.dry_run => {
                            output::info(&format!("Would add '{}' (dry run)", heading))
                        }
                        UpdateOutcome::Inserted { heading, .. } => output::success(&format!(
                            "Added '{}' to {}",
                            heading,
                            output::path(&path)
                        )),
                    }
                }
            }
        }

        Ok(())
    }
}
