//! Tag operations

use tracing::{debug, instrument, warn};

use crate::repository::{GitRepo, Result};
use crate::types::TagInfo;
use countdown_core::error::GitError;

impl GitRepo {
    /// Get all tags, optionally filtered by a git glob such as `v*`
    #[instrument(skip(self))]
    pub fn tags(&self, pattern: Option<&str>) -> Result<Vec<TagInfo>> {
        let names = self.repo.tag_names(pattern)?;
        let mut tags = Vec::with_capacity(names.len());

        for name in names.iter().flatten() {
            match self.tag_commit(name) {
                Ok(commit) => tags.push(TagInfo::new(name, commit.id().to_string())),
                Err(GitError::Git2(e)) => {
                    warn!(tag = name, error = %e, "skipping tag that does not point at a commit");
                }
                Err(e) => return Err(e),
            }
        }

        debug!(count = tags.len(), "listed tags");
        Ok(tags)
    }

    /// Get the tags matching `pattern` that carry a semantic version,
    /// newest version first
    #[instrument(skip(self))]
    pub fn tags_by_version_desc(&self, pattern: &str) -> Result<Vec<TagInfo>> {
        let mut tags: Vec<_> = self
            .tags(Some(pattern))?
            .into_iter()
            .filter(|t| {
                if t.version.is_none() {
                    debug!(tag = %t.name, "ignoring tag without a semantic version");
                }
                t.version.is_some()
            })
            .collect();

        sort_by_version_desc(&mut tags);
        Ok(tags)
    }
}

/// Sort tags by semantic version, newest first. Tags without a version sort last.
fn sort_by_version_desc(tags: &mut [TagInfo]) {
    tags.sort_by(|a, b| b.version.cmp(&a.version));
}
