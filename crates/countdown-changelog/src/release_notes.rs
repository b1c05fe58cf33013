//! Release notes composed from a changelog section and commit history

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use countdown_core::config::ReleaseNotesConfig;
use countdown_core::error::{ChangelogError, CountdownError, GitError, Result};
use countdown_core::{version_from_tag, ReleaseTag};
use countdown_git::{CommitInfo, ReleaseHistory};

use crate::category::SubsectionCategory;
use crate::document::{line_ending, ChangelogDocument, LineKind};

/// Release notes ready for publishing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseNotes {
    /// Tag being released
    pub tag: String,
    /// Previous release tag, if any
    pub previous_tag: Option<String>,
    /// Notes taken from the changelog, banner included
    pub notes: String,
    /// Commits in the release range, newest first
    pub commits: Vec<CommitInfo>,
    /// The full markdown document
    pub markdown: String,
}

/// Commits between the previous release and the target tag
#[derive(Debug, Clone)]
pub struct CommitHistory {
    /// Previous release tag, `None` for a first release
    pub previous_tag: Option<String>,
    /// Commits, newest first
    pub commits: Vec<CommitInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExtractState {
    Before,
    InsideTarget,
    Done,
}

/// Builds release notes for one tag
pub struct ReleaseNotesComposer {
    config: ReleaseNotesConfig,
}

impl ReleaseNotesComposer {
    /// Create a composer
    pub fn new(config: ReleaseNotesConfig) -> Self {
        Self { config }
    }

    /// Pull the notes for `tag` out of the changelog.
    ///
    /// Known subsection headers are replaced by their decorated form, all
    /// other lines are copied as they are. The result starts with the
    /// configured banner and ends with a single newline.
    #[instrument(skip(self, document), fields(tag = %tag))]
    pub fn extract_notes(
        &self,
        document: &ChangelogDocument,
        tag: &ReleaseTag,
    ) -> Result<String> {
        let mut state = ExtractState::Before;
        let mut section = String::new();

        for line in document.lines() {
            let kind = LineKind::of(line);
            state = match state {
                ExtractState::Before => match kind {
                    LineKind::Release(name) if name == tag.name() => ExtractState::InsideTarget,
                    _ => ExtractState::Before,
                },
                ExtractState::InsideTarget if kind.is_heading() => ExtractState::Done,
                ExtractState::InsideTarget => {
                    match SubsectionCategory::from_line(line) {
                        Some(category) => {
                            section.push_str(category.canonical_header());
                            section.push_str(line_ending(line));
                        }
                        None => section.push_str(line),
                    }
                    ExtractState::InsideTarget
                }
                ExtractState::Done => break,
            };
        }

        if state == ExtractState::Before {
            return Err(ChangelogError::MissingReleaseSection(tag.name().to_string()).into());
        }

        let body = section.trim();
        if body.is_empty() {
            return Err(ChangelogError::EmptySection(tag.name().to_string()).into());
        }

        debug!(bytes = body.len(), "extracted release section");
        Ok(format!("{}\n\n{}\n", self.config.banner, body))
    }

    /// Find the previous release and list the commits since it
    #[instrument(skip(self, history), fields(tag = %tag))]
    pub fn commit_history(
        &self,
        history: &dyn ReleaseHistory,
        tag: &ReleaseTag,
    ) -> Result<CommitHistory> {
        let tags = history.tags_by_version_desc(&self.config.tag_pattern)?;
        let previous_tag = previous_release(tag, &tags);
        info!(previous = ?previous_tag, candidates = tags.len(), "resolved previous release");

        let commits = history.commits_between(previous_tag.as_deref(), tag.name())?;
        if commits.is_empty() {
            return Err(GitError::NoCommits {
                from: previous_tag.unwrap_or_else(|| "the first commit".to_string()),
                to: tag.name().to_string(),
            }
            .into());
        }

        Ok(CommitHistory {
            previous_tag,
            commits,
        })
    }

    /// Render the commit list section
    pub fn format_commits(&self, commits: &[CommitInfo]) -> String {
        let lines: Vec<_> = commits.iter().map(CommitInfo::oneline).collect();
        format!("{}\n\n{}\n", self.config.commits_header, lines.join("\n"))
    }

    /// Compose the full release notes.
    ///
    /// `history` is only consulted when commits are included; asking for
    /// commits without a history source is an error.
    #[instrument(skip(self, document, history), fields(tag = %tag))]
    pub fn compose(
        &self,
        document: &ChangelogDocument,
        tag: &ReleaseTag,
        history: Option<&dyn ReleaseHistory>,
    ) -> Result<ReleaseNotes> {
        let notes = self.extract_notes(document, tag)?;

        if !self.config.include_commits {
            return Ok(ReleaseNotes {
                tag: tag.name().to_string(),
                previous_tag: None,
                markdown: notes.clone(),
                notes,
                commits: Vec::new(),
            });
        }

        let history = history.ok_or_else(|| {
            CountdownError::other("commit history requested but no repository is available")
        })?;
        let CommitHistory {
            previous_tag,
            commits,
        } = self.commit_history(history, tag)?;

        let markdown = format!("{}\n{}", notes, self.format_commits(&commits));
        info!(commits = commits.len(), bytes = markdown.len(), "release notes composed");

        Ok(ReleaseNotes {
            tag: tag.name().to_string(),
            previous_tag,
            notes,
            commits,
            markdown,
        })
    }
}

/// The newest tag whose version is strictly below `target`.
///
/// Pre-release tags only count when `target` is itself a pre-release.
/// Tags without a semantic version are ignored. On equal versions the
/// earlier entry wins.
pub fn previous_release(target: &ReleaseTag, tags: &[String]) -> Option<String> {
    let mut best: Option<(&String, semver::Version)> = None;

    for name in tags {
        let Some(version) = version_from_tag(name) else {
            continue;
        };
        if !target.is_prerelease() && !version.pre.is_empty() {
            continue;
        }
        if version >= target.version {
            continue;
        }
        if best.as_ref().map_or(true, |(_, v)| version > *v) {
            best = Some((name, version));
        }
    }

    best.map(|(name, _)| name.clone())
}
