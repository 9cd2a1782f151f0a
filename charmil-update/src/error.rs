use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("Failed to create GitHub client: {0}")]
    Client(String),

    #[error("Failed to fetch releases for {owner}/{repo}: {message}")]
    ReleaseFetch {
        owner: String,
        repo: String,
        message: String,
    },

    #[error("Release lookup timed out after {0:?}")]
    Timeout(Duration),
}

pub type Result<T> = std::result::Result<T, UpdateError>;
