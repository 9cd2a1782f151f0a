use octocrab::models::repos::Release;
use std::collections::HashMap;

/// A single published release as far as the update check cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRecord {
    pub tag: String,
    pub is_prerelease: bool,
    pub url: String,
}

impl ReleaseRecord {
    pub fn new(tag: impl Into<String>, is_prerelease: bool, url: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            is_prerelease,
            url: url.into(),
        }
    }
}

impl From<Release> for ReleaseRecord {
    fn from(release: Release) -> Self {
        Self {
            tag: release.tag_name,
            is_prerelease: release.prerelease,
            url: release.html_url.to_string(),
        }
    }
}

/// Tag to recency position (0 = most recent), plus the newest public release seen.
///
/// Only the releases up to and including the running version are indexed.
#[derive(Debug, Clone, Default)]
pub struct ReleaseIndex {
    positions: HashMap<String, usize>,
    latest_public: Option<ReleaseRecord>,
}

impl ReleaseIndex {
    pub fn build(releases: &[ReleaseRecord], running_version: &str) -> Self {
        let mut index = Self::default();

        for (position, release) in releases.iter().enumerate() {
            if index.latest_public.is_none() && !release.is_prerelease {
                index.latest_public = Some(release.clone());
            }

            index.positions.insert(release.tag.clone(), position);

            if release.tag == running_version {
                break;
            }
        }

        index
    }

    pub fn position(&self, tag: &str) -> Option<usize> {
        self.positions.get(tag).copied()
    }

    pub fn latest_public(&self) -> Option<&ReleaseRecord> {
        self.latest_public.as_ref()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

pub fn build_index(releases: &[ReleaseRecord], running_version: &str) -> ReleaseIndex {
    ReleaseIndex::build(releases, running_version)
}
