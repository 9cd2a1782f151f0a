pub const DEFAULT_OWNER: &str = "aerogear";
pub const DEFAULT_REPO: &str = "charmil";

/// Version reported by builds that carry no release information.
pub const DEV_VERSION: &str = "dev";

/// The running version and the GitHub project it is released from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub owner: String,
    pub repo: String,
}

impl BuildInfo {
    pub fn new(
        version: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Detect the running version from build metadata.
    ///
    /// Release builds set `CHARMIL_VERSION` to their tag at compile time. Any
    /// other build reports [`DEV_VERSION`].
    pub fn detect() -> Self {
        let version = resolve_version(option_env!("CHARMIL_VERSION"));
        Self::new(version, DEFAULT_OWNER, DEFAULT_REPO)
    }

    pub fn with_coordinates(mut self, owner: &str, repo: &str) -> Self {
        self.owner = owner.to_string();
        self.repo = repo.to_string();
        self
    }

    pub fn is_dev_build(&self) -> bool {
        self.version == DEV_VERSION
    }
}

fn resolve_version(injected: Option<&str>) -> String {
    match injected.map(str::trim).filter(|tag| !tag.is_empty()) {
        Some(tag) => tag.to_string(),
        None => DEV_VERSION.to_string(),
    }
}
