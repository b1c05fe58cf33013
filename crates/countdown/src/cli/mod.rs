//! CLI definition and command handling

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use commands::{CompletionsCommand, NotesCommand, PrepareCommand};

/// Countdown - prepare changelogs and release notes
#[derive(Debug, Parser)]
#[command(name = "countdown")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Move unreleased changelog entries under a heading for the release tag
    Prepare(PrepareCommand),

    /// Print release notes for the release tag
    Notes(NotesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match &self.command {
            Commands::Prepare(cmd) => cmd.execute(self),
            Commands::Notes(cmd) => cmd.execute(self),
            Commands::Completions(cmd) => cmd.execute(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_prepare() {
        let cli = Cli::try_parse_from([
            "countdown",
            "prepare",
            "--tag",
            "v1.2.0",
            "--date",
            "2024-05-17",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Commands::Prepare(cmd) => {
                assert_eq!(cmd.tag.as_deref(), Some("v1.2.0"));
                assert!(cmd.dry_run);
                assert!(cmd.date.is_some());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_notes_with_global_flags() {
        let cli = Cli::try_parse_from([
            "countdown",
            "notes",
            "--tag",
            "v1.2.0",
            "--format",
            "json",
            "--no-commits",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Notes(ref cmd) if cmd.no_commits));
    }

    #[test]
    fn test_tag_read_from_environment() {
        let cmd = Cli::command();
        for name in ["prepare", "notes"] {
            let sub = cmd.find_subcommand(name).unwrap();
            let tag = sub
                .get_arguments()
                .find(|arg| arg.get_id() == "tag")
                .unwrap();
            assert_eq!(tag.get_env(), Some(std::ffi::OsStr::new("TAG")), "{}", name);
            assert_eq!(tag.get_long(), Some("tag"), "{}", name);
        }
    }
}
