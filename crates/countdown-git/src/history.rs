//! Release history queries used by release notes

use tracing::instrument;

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

/// The two version-control queries release notes depend on
pub trait ReleaseHistory {
    /// Names of tags matching `pattern`, newest semantic version first
    fn tags_by_version_desc(&self, pattern: &str) -> Result<Vec<String>>;

    /// Commits reachable from `to_inclusive` but not from `from_exclusive`,
    /// newest first. `None` means from the beginning of history.
    fn commits_between(
        &self,
        from_exclusive: Option<&str>,
        to_inclusive: &str,
    ) -> Result<Vec<CommitInfo>>;
}

/// [`ReleaseHistory`] backed by a local git repository
pub struct GitHistory<'a> {
    repo: &'a GitRepo,
    first_parent: bool,
}

impl<'a> GitHistory<'a> {
    /// Create a history view that follows first parents only
    pub fn new(repo: &'a GitRepo) -> Self {
        Self {
            repo,
            first_parent: true,
        }
    }

    /// Choose between first-parent and full-history traversal
    pub fn with_first_parent(mut self, first_parent: bool) -> Self {
        self.first_parent = first_parent;
        self
    }
}

impl ReleaseHistory for GitHistory<'_> {
    #[instrument(skip(self))]
    fn tags_by_version_desc(&self, pattern: &str) -> Result<Vec<String>> {
        Ok(self
            .repo
            .tags_by_version_desc(pattern)?
            .into_iter()
            .map(|t| t.name)
            .collect())
    }

    #[instrument(skip(self))]
    fn commits_between(
        &self,
        from_exclusive: Option<&str>,
        to_inclusive: &str,
    ) -> Result<Vec<CommitInfo>> {
        self.repo
            .commits_between(from_exclusive, to_inclusive, self.first_parent)
    }
}
