//! Changelog subsection categories

use serde::{Deserialize, Serialize};

/// The subsection kinds that get a decorated header in release notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubsectionCategory {
    Added,
    Changed,
    Fixed,
    Removed,
}

impl SubsectionCategory {
    /// All categories in changelog order
    pub const ALL: [Self; 4] = [Self::Added, Self::Changed, Self::Fixed, Self::Removed];

    /// Leading marker recognized in the changelog
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Added => "### Added",
            Self::Changed => "### Changed",
            Self::Fixed => "### Fixed",
            Self::Removed => "### Removed",
        }
    }

    /// Header written into release notes
    pub fn canonical_header(&self) -> &'static str {
        match self {
            Self::Added => "### Added 🎉",
            Self::Changed => "### Changed ⚠️",
            Self::Fixed => "### Fixed ✅",
            Self::Removed => "### Removed 👋",
        }
    }

    /// Categorize a line by its leading marker
    pub fn from_line(line: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| line.starts_with(category.marker()))
    }
}

impl std::fmt::Display for SubsectionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.marker().trim_start_matches("### "))
    }
}
