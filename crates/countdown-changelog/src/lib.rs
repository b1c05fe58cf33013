//! Countdown Changelog - changelog rewriting and release notes
//!
//! [`ChangelogUpdater`] files the unreleased entries under a new release
//! heading. [`ReleaseNotesComposer`] turns a release section plus the commit
//! history since the previous release into publishable markdown.

pub mod category;
pub mod document;
pub mod release_notes;
pub mod updater;

pub use category::SubsectionCategory;
pub use document::{ChangelogDocument, LineKind};
pub use release_notes::{previous_release, CommitHistory, ReleaseNotes, ReleaseNotesComposer};
pub use updater::{ChangelogUpdater, UpdateOutcome};
