use crate::build_info::BuildInfo;
use crate::compare::{compare, AvailableUpdate, Comparison};
use crate::error::{Result, UpdateError};
use crate::github::{fetch_ordered_releases, GitHubClient, ReleaseSource};
use crate::index::build_index;
use std::io::{self, Write};
use std::time::Duration;

/// Fetch, index and compare, surfacing any error.
pub async fn check<S: ReleaseSource>(
    source: &S,
    build: &BuildInfo,
    timeout: Duration,
) -> Result<Comparison> {
    let releases = tokio::time::timeout(
        timeout,
        fetch_ordered_releases(source, &build.owner, &build.repo),
    )
    .await
    .map_err(|_| UpdateError::Timeout(timeout))??;

    let index = build_index(&releases, &build.version);
    Ok(compare(&build.version, &index, index.latest_public()))
}

/// Check for a newer public release.
///
/// Errors and timeouts mean "no information" and are only logged at debug level.
pub async fn check_for_update<S: ReleaseSource>(
    source: &S,
    build: &BuildInfo,
    timeout: Duration,
) -> Option<AvailableUpdate> {
    if build.is_dev_build() {
        tracing::debug!("Development build, skipping update check");
        return None;
    }

    match check(source, build, timeout).await {
        Ok(comparison) => comparison.into_update(),
        Err(e) => {
            tracing::debug!("Update check skipped: {}", e);
            None
        }
    }
}

/// Run the update check and write a notice to `out` when one is due.
///
/// Writes nothing when no update exists or the check failed.
pub async fn notify_if_outdated<S: ReleaseSource, W: Write>(
    source: &S,
    build: &BuildInfo,
    timeout: Duration,
    out: &mut W,
) -> io::Result<()> {
    if let Some(update) = check_for_update(source, build, timeout).await {
        writeln!(out)?;
        writeln!(out, "{}", update.notice())?;
        writeln!(out)?;
    }
    Ok(())
}

/// Check GitHub releases and print any notice to stderr.
pub async fn notify_from_github(build: &BuildInfo, timeout: Duration) {
    if build.is_dev_build() {
        tracing::debug!("Development build, skipping update check");
        return;
    }

    let client = match GitHubClient::new() {
        Ok(client) => client,
        Err(e) => {
            tracing::debug!("Update check skipped: {}", e);
            return;
        }
    };

    if let Err(e) = notify_if_outdated(&client, build, timeout, &mut io::stderr()).await {
        tracing::debug!("Failed to print update notice: {}", e);
    }
}
