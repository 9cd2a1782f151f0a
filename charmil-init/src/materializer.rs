use crate::error::{InitError, Result};
use git2::build::RepoBuilder;
use git2::{FetchOptions, RemoteCallbacks, Repository};
use std::path::Path;

/// Template project cloned by `charmil init`.
pub const STARTER_REPOSITORY: &str = "https://github.com/aerogear/charmil-starter";

/// Clones the starter template into a destination directory.
#[derive(Debug, Clone)]
pub struct Materializer {
    url: String,
    branch: Option<String>,
}

impl Default for Materializer {
    fn default() -> Self {
        Self::new(STARTER_REPOSITORY)
    }
}

impl Materializer {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            branch: None,
        }
    }

    pub fn with_branch(mut self, branch: Option<String>) -> Self {
        self.branch = branch;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Clone into `destination`. libgit2 refuses destinations that exist and
    /// are not empty.
    pub fn materialize(&self, destination: &Path) -> Result<Repository> {
        tracing::info!("Cloning {} into {}", self.url, destination.display());

        let mut callbacks = RemoteCallbacks::new();
        callbacks.transfer_progress(|progress| {
            if progress.total_objects() > 0
                && progress.received_objects() == progress.total_objects()
            {
                tracing::debug!(
                    "Received {} objects ({} bytes)",
                    progress.total_objects(),
                    progress.received_bytes()
                );
            }
            true
        });

        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(callbacks);

        let mut builder = RepoBuilder::new();
        builder.fetch_options(fetch_options);
        if let Some(branch) = &self.branch {
            builder.branch(branch);
        }

        builder
            .clone(&self.url, destination)
            .map_err(|source| InitError::Clone {
                url: self.url.clone(),
                source,
            })
    }
}
