use crate::error::{Result, UpdateError};
use crate::index::ReleaseRecord;
use octocrab::Octocrab;

/// Anything that can list a repository's releases, newest first.
#[allow(async_fn_in_trait)]
pub trait ReleaseSource {
    async fn list_releases(&self, owner: &str, repo: &str) -> Result<Vec<ReleaseRecord>>;
}

pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        let octocrab = if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            Octocrab::builder().personal_token(token).build()
        } else {
            Octocrab::builder().build()
        }
        .map_err(|e| UpdateError::Client(e.to_string()))?;

        Ok(Self { octocrab })
    }
}

impl ReleaseSource for GitHubClient {
    /// Fetch the first page of releases. GitHub returns them most recent first.
    async fn list_releases(&self, owner: &str, repo: &str) -> Result<Vec<ReleaseRecord>> {
        tracing::debug!("Listing releases for {}/{}", owner, repo);

        let page = self
            .octocrab
            .repos(owner, repo)
            .releases()
            .list()
            .send()
            .await
            .map_err(|e| UpdateError::ReleaseFetch {
                owner: owner.to_string(),
                repo: repo.to_string(),
                message: e.to_string(),
            })?;

        Ok(page.items.into_iter().map(ReleaseRecord::from).collect())
    }
}

/// Fetch a project's releases in the order the remote reports them.
pub async fn fetch_ordered_releases<S: ReleaseSource>(
    source: &S,
    owner: &str,
    repo: &str,
) -> Result<Vec<ReleaseRecord>> {
    let releases = source.list_releases(owner, repo).await?;
    tracing::debug!("Fetched {} releases for {}/{}", releases.len(), owner, repo);
    Ok(releases)
}
