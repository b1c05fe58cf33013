//! Line-oriented changelog document
//!
//! Lines are stored with their original terminators so that writing an
//! unmodified document reproduces the input byte for byte.

use std::io::Write;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

use countdown_core::error::{ChangelogError, Result};

/// `## [<tag>]` with optional link and trailing text
static RELEASE_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^## \[(?P<tag>[^\]]+)\]").expect("Invalid regex"));

/// `## Unreleased` or `## [Unreleased]`
static UNRELEASED_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^## (?:\[Unreleased\]|Unreleased)").expect("Invalid regex"));

/// The terminator of `line`: `\r\n` for CRLF lines, `\n` otherwise
pub fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// What a single changelog line is, as far as section scanning cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// The Unreleased heading
    Unreleased,
    /// A release heading, carrying the bracketed tag
    Release(&'a str),
    /// Any other `## ` heading
    OtherHeading,
    /// Everything else, including `### ` subsections
    Body,
}

impl<'a> LineKind<'a> {
    /// Classify a line
    pub fn of(line: &'a str) -> Self {
        if !line.starts_with("## ") {
            return Self::Body;
        }
        if UNRELEASED_HEADING_REGEX.is_match(line) {
            return Self::Unreleased;
        }
        match RELEASE_HEADING_REGEX.captures(line) {
            Some(caps) => match caps.name("tag") {
                Some(tag) => Self::Release(tag.as_str()),
                None => Self::OtherHeading,
            },
            None => Self::OtherHeading,
        }
    }

    /// Whether the line opens a new top-level section
    pub fn is_heading(&self) -> bool {
        !matches!(self, Self::Body)
    }
}

/// A changelog file held as an ordered list of lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogDocument {
    lines: Vec<String>,
}

impl ChangelogDocument {
    /// Split text into lines, keeping line terminators
    pub fn parse(content: &str) -> Self {
        Self {
            lines: content.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    /// Read a changelog from disk
    #[instrument(fields(path = %path.display()))]
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ChangelogError::FileNotFound(path.to_path_buf())
            } else {
                ChangelogError::Io(e)
            }
        })?;

        let document = Self::parse(&content);
        debug!(lines = document.len(), "read changelog");
        Ok(document)
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines with their terminators
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Find the line index of the heading for `tag`
    pub fn find_release(&self, tag: &str) -> Option<usize> {
        self.lines()
            .position(|line| matches!(LineKind::of(line), LineKind::Release(t) if t == tag))
    }

    /// Insert a line before `index`. A missing terminator on the line above
    /// and on the inserted text is filled in, matching the terminator of the
    /// neighbouring lines.
    pub fn insert_line(&mut self, index: usize, text: &str) {
        let ending = self.ending_near(index);

        if let Some(previous) = index.checked_sub(1).and_then(|i| self.lines.get_mut(i)) {
            if !previous.ends_with('\n') {
                previous.push_str(ending);
            }
        }

        let mut line = text.to_string();
        if !line.ends_with('\n') {
            line.push_str(ending);
        }
        self.lines.insert(index, line);
    }

    /// Terminator of the nearest terminated line, looking upwards from
    /// `index` first, then downwards; `\n` for a document without one
    fn ending_near(&self, index: usize) -> &'static str {
        let (above, below) = self.lines.split_at(index.min(self.lines.len()));
        above
            .iter()
            .rev()
            .chain(below)
            .find(|line| line.ends_with('\n'))
            .map_or("\n", |line| line_ending(line))
    }

    /// Replace `path` with this document. The content goes to a temporary
    /// file in the same directory first and is then renamed over the target,
    /// so readers never see a half-written changelog.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn write_atomic(&self, path: &Path) -> Result<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut temp = NamedTempFile::new_in(dir).map_err(ChangelogError::Io)?;
        temp.write_all(self.to_string().as_bytes())
            .map_err(ChangelogError::Io)?;
        temp.as_file().sync_all().map_err(ChangelogError::Io)?;

        if let Ok(metadata) = std::fs::metadata(path) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(ChangelogError::Io)?;
        }

        temp.persist(path)
            .map_err(|e| ChangelogError::WriteFailed(e.error.to_string()))?;

        info!(lines = self.len(), "changelog written");
        Ok(())
    }
}

impl std::fmt::Display for ChangelogDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            f.write_str(line)?;
        }
        Ok(())
    }
}
