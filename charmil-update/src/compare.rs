use crate::index::{ReleaseIndex, ReleaseRecord};

/// A newer public release than the one running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableUpdate {
    pub tag: String,
    pub url: String,
}

impl AvailableUpdate {
    pub fn notice(&self) -> String {
        format!("Update available! {}\n{}", self.tag, self.url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    NoOp,
    UpdateAvailable(AvailableUpdate),
}

impl Comparison {
    pub fn into_update(self) -> Option<AvailableUpdate> {
        match self {
            Comparison::NoOp => None,
            Comparison::UpdateAvailable(update) => Some(update),
        }
    }
}

/// Decide whether the running version is older than the latest public release.
///
/// A running version missing from the index is an unpublished or development
/// build and is never compared.
pub fn compare(
    running_version: &str,
    index: &ReleaseIndex,
    latest_public: Option<&ReleaseRecord>,
) -> Comparison {
    let Some(current) = index.position(running_version) else {
        tracing::debug!(
            "Version {} is not a published release, skipping comparison",
            running_version
        );
        return Comparison::NoOp;
    };

    let Some(latest) = latest_public else {
        tracing::debug!("No public release found before {}", running_version);
        return Comparison::NoOp;
    };

    let Some(latest_position) = index.position(&latest.tag) else {
        return Comparison::NoOp;
    };

    if current > latest_position {
        Comparison::UpdateAvailable(AvailableUpdate {
            tag: latest.tag.clone(),
            url: latest.url.clone(),
        })
    } else {
        Comparison::NoOp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_index;

    fn releases() -> Vec<ReleaseRecord> {
        vec![
            ReleaseRecord::new("v2.0", false, "https://github.com/o/r/releases/v2.0"),
            ReleaseRecord::new("v1.1", true, "https://github.com/o/r/releases/v1.1"),
            ReleaseRecord::new("v1.0", false, "https://github.com/o/r/releases/v1.0"),
        ]
    }

    fn run(version: &str) -> Comparison {
        let index = build_index(&releases(), version);
        compare(version, &index, index.latest_public())
    }

    #[test]
    fn test_older_version_gets_update() {
        assert_eq!(
            run("v1.0"),
            Comparison::UpdateAvailable(AvailableUpdate {
                tag: "v2.0".to_string(),
                url: "https://github.com/o/r/releases/v2.0".to_string(),
            })
        );
    }

    #[test]
    fn test_prerelease_user_gets_update() {
        let update = run("v1.1").into_update().unwrap();
        assert_eq!(update.tag, "v2.0");
    }

    #[test]
    fn test_current_version_is_noop() {
        assert_eq!(run("v2.0"), Comparison::NoOp);
    }

    #[test]
    fn test_unpublished_version_is_noop() {
        assert_eq!(run("v0.9-dev"), Comparison::NoOp);
    }

    #[test]
    fn test_prerelease_newer_than_latest_public_is_noop() {
        let releases = vec![
            ReleaseRecord::new("v3.0-beta", true, "u3"),
            ReleaseRecord::new("v2.0", false, "u2"),
        ];
        let index = build_index(&releases, "v3.0-beta");

        assert!(index.latest_public().is_none());
        assert_eq!(
            compare("v3.0-beta", &index, index.latest_public()),
            Comparison::NoOp
        );
    }

    #[test]
    fn test_notice_contains_tag_and_url() {
        let update = AvailableUpdate {
            tag: "v2.0".to_string(),
            url: "https://example.com".to_string(),
        };
        let notice = update.notice();
        assert!(notice.contains("v2.0"));
        assert!(notice.contains("https://example.com"));
    }
}
