//! Core types for Countdown

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// A release tag together with the semantic version it names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseTag {
    /// Tag name exactly as written (e.g. `v1.2.3`)
    pub name: String,
    /// Parsed version
    pub version: Version,
}

impl ReleaseTag {
    /// Parse a tag name such as `v1.2.3` or `1.2.3`
    pub fn parse(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::MissingTag.into());
        }

        let version = Version::parse(strip_tag_prefix(name)).map_err(|e| {
            ConfigError::InvalidTag {
                tag: name.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            name: name.to_string(),
            version,
        })
    }

    /// Tag name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this tag names a pre-release version
    pub fn is_prerelease(&self) -> bool {
        !self.version.pre.is_empty()
    }
}

impl std::fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl std::str::FromStr for ReleaseTag {
    type Err = crate::error::CountdownError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Parse the version out of a tag name, if it has one
pub fn version_from_tag(name: &str) -> Option<Version> {
    Version::parse(strip_tag_prefix(name.trim())).ok()
}

fn strip_tag_prefix(name: &str) -> &str {
    name.strip_prefix('v').unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CountdownError;

    #[test]
    fn test_parse_with_prefix() {
        let tag = ReleaseTag::parse("v1.2.3").unwrap();
        assert_eq!(tag.name(), "v1.2.3");
        assert_eq!(tag.version, Version::new(1, 2, 3));
        assert!(!tag.is_prerelease());
    }

    #[test]
    fn test_parse_without_prefix() {
        let tag: ReleaseTag = "2.0.0".parse().unwrap();
        assert_eq!(tag.version, Version::new(2, 0, 0));
        assert_eq!(tag.to_string(), "2.0.0");
    }

    #[test]
    fn test_prerelease() {
        let tag = ReleaseTag::parse("v1.0.0-rc.1").unwrap();
        assert!(tag.is_prerelease());
    }

    #[test]
    fn test_invalid_tag() {
        let result = ReleaseTag::parse("release-one");
        assert!(matches!(
            result,
            Err(CountdownError::Config(ConfigError::InvalidTag { .. }))
        ));
    }

    #[test]
    fn test_empty_tag() {
        let result = ReleaseTag::parse("  ");
        assert!(matches!(
            result,
            Err(CountdownError::Config(ConfigError::MissingTag))
        ));
    }

    #[test]
    fn test_version_from_tag() {
        assert_eq!(version_from_tag("v1.10.0"), Some(Version::new(1, 10, 0)));
        assert_eq!(version_from_tag("1.9.0"), Some(Version::new(1, 9, 0)));
        assert_eq!(version_from_tag("nightly"), None);
    }
}
