//! # charmil-update
//!
//! Tells users of a charmil binary when a newer public release exists.
//!
//! ## Overview
//!
//! The check lists the project's GitHub releases (newest first), indexes them
//! by position until the running version is found, and compares the running
//! version's position with that of the newest non-prerelease.
//!
//! Failures never reach the caller: a network error or timeout simply means no
//! notice is shown.
//!
//! ## Usage
//!
//! ```no_run
//! use charmil_update::{notify_from_github, BuildInfo};
//! use std::time::Duration;
//!
//! # async fn run() {
//! let build = BuildInfo::detect();
//! notify_from_github(&build, Duration::from_secs(5)).await;
//! # }
//! ```

/// Running version and release coordinates
pub mod build_info;

/// Update check entry points that suppress fetch failures
pub mod checker;

/// Position-based version comparison
pub mod compare;

/// Error types for release lookups
pub mod error;

/// GitHub release listing
pub mod github;

/// Release records and the tag-to-position index
pub mod index;

pub use build_info::BuildInfo;
pub use checker::{check, check_for_update, notify_from_github, notify_if_outdated};
pub use compare::{compare, AvailableUpdate, Comparison};
pub use error::{Result, UpdateError};
pub use github::{fetch_ordered_releases, GitHubClient, ReleaseSource};
pub use index::{build_index, ReleaseIndex, ReleaseRecord};
