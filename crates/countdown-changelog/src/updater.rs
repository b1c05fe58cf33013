//! Moves unreleased changelog entries under a new release heading

use std::fmt::Write as _;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use countdown_core::config::ChangelogConfig;
use countdown_core::error::{ChangelogError, ConfigError, Result};
use countdown_core::ReleaseTag;

use crate::document::{ChangelogDocument, LineKind};

/// What [`ChangelogUpdater::update`] did to the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The release heading was already the newest release; nothing changed
    AlreadyUpToDate,
    /// A heading was inserted at `line`
    Inserted {
        /// Zero-based line index of the new heading
        line: usize,
        /// The heading text, without terminator
        heading: String,
    },
}

impl UpdateOutcome {
    /// Whether the document was modified
    pub fn changed(&self) -> bool {
        matches!(self, Self::Inserted { .. })
    }
}

/// Inserts release headings below `## Unreleased`
pub struct ChangelogUpdater {
    config: ChangelogConfig,
}

impl ChangelogUpdater {
    /// Create an updater
    pub fn new(config: ChangelogConfig) -> Self {
        Self { config }
    }

    /// Make sure `document` has a section for `tag`.
    ///
    /// Scanning stops at the first release heading. If that heading is `tag`
    /// the document is left alone; otherwise a dated heading for `tag` goes
    /// directly below `## Unreleased`, so the unreleased entries end up in
    /// the new section. Existing lines are never removed or reordered.
    #[instrument(skip(self, document), fields(tag = %tag, lines = document.len()))]
    pub fn update(
        &self,
        document: &mut ChangelogDocument,
        tag: &ReleaseTag,
        date: NaiveDate,
    ) -> Result<UpdateOutcome> {
        let mut insert_at = None;
        let mut newest_release = None;

        for (index, line) in document.lines().enumerate() {
            match LineKind::of(line) {
                LineKind::Unreleased => insert_at = Some(index + 1),
                LineKind::Release(name) if name == tag.name() => {
                    info!("changelog already up to date");
                    return Ok(UpdateOutcome::AlreadyUpToDate);
                }
                LineKind::Release(name) => {
                    newest_release = Some(name.to_string());
                    break;
                }
                LineKind::OtherHeading | LineKind::Body => {}
            }
        }

        let insert_at = insert_at.ok_or(ChangelogError::MissingUnreleased)?;

        if let Some(newer) = newest_release {
            if document.find_release(tag.name()).is_some() {
                return Err(ChangelogError::ReleaseOutOfOrder {
                    tag: tag.name().to_string(),
                    newer,
                }
                .into());
            }
        }

        if unreleased_is_empty(document, insert_at) {
            warn!("unreleased section is empty, the new release section will have no notes");
        }

        let heading = self.heading(tag, date)?;
        document.insert_line(insert_at, &heading);
        info!(line = insert_at, heading = %heading, "inserted release heading");

        Ok(UpdateOutcome::Inserted {
            line: insert_at,
            heading,
        })
    }

    /// Read the changelog at `path`, update it, and replace the file if it changed
    #[instrument(skip(self), fields(path = %path.display(), tag = %tag))]
    pub fn update_file(
        &self,
        path: &Path,
        tag: &ReleaseTag,
        date: NaiveDate,
    ) -> Result<UpdateOutcome> {
        let mut document = ChangelogDocument::read(path)?;
        let outcome = self.update(&mut document, tag, date)?;

        if outcome.changed() {
            document.write_atomic(path)?;
        } else {
            debug!("skipping write");
        }

        Ok(outcome)
    }

    /// Render the heading line for a new release
    pub fn heading(&self, tag: &ReleaseTag, date: NaiveDate) -> Result<String> {
        let mut date_str = String::new();
        write!(date_str, "{}", date.format(&self.config.date_format)).map_err(|_| {
            ConfigError::InvalidValue {
                field: "changelog.date_format".to_string(),
                message: format!("'{}' is not a valid date format", self.config.date_format),
            }
        })?;

        let heading = match self.config.release_link(tag.name()) {
            Some(link) => format!("## [{}]({}) - {}", tag.name(), link, date_str),
            None => format!("## [{}] - {}", tag.name(), date_str),
        };
        Ok(heading)
    }
}

/// Whether every line between `start` and the next `## ` heading is blank
fn unreleased_is_empty(document: &ChangelogDocument, start: usize) -> bool {
    document
        .lines()
        .skip(start)
        .take_while(|line| !LineKind::of(line).is_heading())
        .all(|line| line.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use countdown_core::CountdownError;

    fn tag(name: &str) -> ReleaseTag {
        ReleaseTag::parse(name).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    fn updater() -> ChangelogUpdater {
        ChangelogUpdater::new(ChangelogConfig::default())
    }

    #[test]
    fn test_fresh_release() {
        let mut doc = ChangelogDocument::parse("## Unreleased\n### Added\n- feature X\n");
        let outcome = updater().update(&mut doc, &tag("v1.0.0"), date()).unwrap();

        assert_eq!(
            outcome,
            UpdateOutcome::Inserted {
                line: 1,
                heading: "## [v1.0.0] - 2024-05-17".to_string()
            }
        );
        assert_eq!(
            doc.to_string(),
            "## Unreleased\n## [v1.0.0] - 2024-05-17\n### Added\n- feature X\n"
        );
    }

    #[test]
    fn test_fresh_release_crlf() {
        let mut doc = ChangelogDocument::parse("## Unreleased\r\n### Added\r\n- x\r\n");
        updater().update(&mut doc, &tag("v1.0.0"), date()).unwrap();
        assert_eq!(
            doc.to_string(),
            "## Unreleased\r\n## [v1.0.0] - 2024-05-17\r\n### Added\r\n- x\r\n"
        );
    }

    #[test]
    fn test_inserts_above_previous_release() {
        let original = "# Changelog\n\n## Unreleased\n\n### Fixed\n\n- crash\n\n## [v1.0.0] - 2024-01-01\n\n### Added\n\n- start\n";
        let mut doc = ChangelogDocument::parse(original);
        updater().update(&mut doc, &tag("v1.0.1"), date()).unwrap();

        let expected = "# Changelog\n\n## Unreleased\n## [v1.0.1] - 2024-05-17\n\n### Fixed\n\n- crash\n\n## [v1.0.0] - 2024-01-01\n\n### Added\n\n- start\n";
        assert_eq!(doc.to_string(), expected);
    }

    #[test]
    fn test_pure_insertion() {
        let original = "# Changelog\n## Unreleased\n- a\n- b\n## [v0.9.0]\n- c\n## [v0.8.0]\n- d\n";
        let mut doc = ChangelogDocument::parse(original);
        updater().update(&mut doc, &tag("v1.0.0"), date()).unwrap();

        let before: Vec<_> = ChangelogDocument::parse(original)
            .lines()
            .map(str::to_string)
            .collect();
        let mut after: Vec<_> = doc.lines().map(str::to_string).collect();
        after.remove(2);
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut doc = ChangelogDocument::parse("## Unreleased\n- thing\n\n## [v0.1.0]\n- old\n");
        let first = updater().update(&mut doc, &tag("v0.2.0"), date()).unwrap();
        assert!(first.changed());
        let snapshot = doc.clone();

        let second = updater().update(&mut doc, &tag("v0.2.0"), date()).unwrap();
        assert_eq!(second, UpdateOutcome::AlreadyUpToDate);
        assert_eq!(doc, snapshot);
    }

    #[test]
    fn test_missing_unreleased() {
        let mut doc = ChangelogDocument::parse("# Changelog\n\n## [v1.0.0] - 2024-01-01\n- a\n");
        let result = updater().update(&mut doc, &tag("v1.1.0"), date());
        assert!(matches!(
            result,
            Err(CountdownError::Changelog(ChangelogError::MissingUnreleased))
        ));
    }

    #[test]
    fn test_missing_unreleased_in_empty_document() {
        let mut doc = ChangelogDocument::parse("");
        let result = updater().update(&mut doc, &tag("v1.0.0"), date());
        assert!(matches!(
            result,
            Err(CountdownError::Changelog(ChangelogError::MissingUnreleased))
        ));
    }

    #[test]
    fn test_unreleased_below_release_is_not_used() {
        let mut doc = ChangelogDocument::parse("## [v1.0.0]\n- a\n## Unreleased\n- b\n");
        let result = updater().update(&mut doc, &tag("v1.1.0"), date());
        assert!(matches!(
            result,
            Err(CountdownError::Changelog(ChangelogError::MissingUnreleased))
        ));
    }

    #[test]
    fn test_release_below_newer_release() {
        let mut doc =
            ChangelogDocument::parse("## Unreleased\n\n## [v2.0.0]\n- b\n\n## [v1.0.0]\n- a\n");
        let result = updater().update(&mut doc, &tag("v1.0.0"), date());
        assert!(matches!(
            result,
            Err(CountdownError::Changelog(ChangelogError::ReleaseOutOfOrder { .. }))
        ));
    }

    #[test]
    fn test_empty_unreleased_is_allowed() {
        let mut doc = ChangelogDocument::parse("## Unreleased\n\n## [v1.0.0]\n- a\n");
        let outcome = updater().update(&mut doc, &tag("v1.0.1"), date()).unwrap();
        assert!(outcome.changed());
    }

    #[test]
    fn test_heading_with_release_link() {
        let updater = ChangelogUpdater::new(ChangelogConfig {
            release_url: Some("https://github.com/acme/widget/releases/tag/{tag}".to_string()),
            ..Default::default()
        });
        let heading = updater.heading(&tag("v1.2.3"), date()).unwrap();
        assert_eq!(
            heading,
            "## [v1.2.3](https://github.com/acme/widget/releases/tag/v1.2.3) - 2024-05-17"
        );
    }

    #[test]
    fn test_custom_date_format() {
        let updater = ChangelogUpdater::new(ChangelogConfig {
            date_format: "%B %d, %Y".to_string(),
            ..Default::default()
        });
        let heading = updater.heading(&tag("v1.2.3"), date()).unwrap();
        assert_eq!(heading, "## [v1.2.3] - May 17, 2024");
    }

    #[test]
    fn test_update_file_already_released_leaves_bytes() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        let original = "## Unreleased\n\n## [v1.0.0] - 2024-01-01\n\n### Added\n\n- a\n";
        std::fs::write(&path, original).unwrap();

        let outcome = updater().update_file(&path, &tag("v1.0.0"), date()).unwrap();
        assert_eq!(outcome, UpdateOutcome::AlreadyUpToDate);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_update_file_writes_heading() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        std::fs::write(&path, "## Unreleased\n- a\n").unwrap();

        updater().update_file(&path, &tag("v0.1.0"), date()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "## Unreleased\n## [v0.1.0] - 2024-05-17\n- a\n"
        );
    }
}
