//! Commit history operations

use chrono::{TimeZone, Utc};
use git2::Sort;
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

impl GitRepo {
    /// Get the commits reachable from tag `to` but not from tag `from`,
    /// newest first. Without `from` the range reaches back to the root commit.
    #[instrument(skip(self))]
    pub fn commits_between(
        &self,
        from: Option<&str>,
        to: &str,
        first_parent: bool,
    ) -> Result<Vec<CommitInfo>> {
        let to_commit = self.tag_commit(to)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(to_commit.id())?;
        if first_parent {
            revwalk.simplify_first_parent()?;
        }

        if let Some(from) = from {
            let from_commit = self.tag_commit(from)?;
            revwalk.hide(from_commit.id())?;
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            commits.push(commit_to_info(&commit));
        }

        debug!(count = commits.len(), "collected commits in range");
        Ok(commits)
    }
}

/// Convert a git2 Commit to CommitInfo
fn commit_to_info(commit: &git2::Commit<'_>) -> CommitInfo {
    let author = commit.author();

    let timestamp = Utc
        .timestamp_opt(commit.time().seconds(), 0)
        .single()
        .unwrap_or_else(Utc::now);

    CommitInfo::new(
        commit.id().to_string(),
        commit.summary().unwrap_or("(no message)"),
        author.name().unwrap_or("Unknown"),
        timestamp,
    )
}
