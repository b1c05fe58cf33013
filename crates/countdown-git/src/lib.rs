//! Countdown Git - read-only git queries for release preparation
//!
//! This crate lists version tags and the commits between them, and exposes
//! those two queries through the [`ReleaseHistory`] trait.

mod commits;
mod history;
mod repository;
mod tags;
pub mod types;

#[cfg(test)]
mod test_support;

pub use history::{GitHistory, ReleaseHistory};
pub use repository::{GitRepo, Result};
pub use types::{CommitInfo, TagInfo};
