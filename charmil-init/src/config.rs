use anyhow::{Context, Result};
use charmil_update::build_info::{DEFAULT_OWNER, DEFAULT_REPO};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::director::PLACEHOLDER_DIR;
use crate::materializer::STARTER_REPOSITORY;
use crate::walker::DEFAULT_EXCLUDES;

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub template: TemplateConfig,

    #[serde(default)]
    pub update: UpdateConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TemplateConfig {
    #[serde(default = "default_template_url")]
    pub url: String,

    pub branch: Option<String>,

    #[serde(default = "default_placeholder_dir")]
    pub placeholder_dir: String,

    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            url: default_template_url(),
            branch: None,
            placeholder_dir: default_placeholder_dir(),
            exclude: default_exclude(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_owner")]
    pub owner: String,

    #[serde(default = "default_repo")]
    pub repo: String,

    /// Seconds to wait for the release list
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            owner: default_owner(),
            repo: default_repo(),
            timeout: default_timeout(),
        }
    }
}

fn default_template_url() -> String {
    STARTER_REPOSITORY.to_string()
}

fn default_placeholder_dir() -> String {
    PLACEHOLDER_DIR.to_string()
}

fn default_exclude() -> Vec<String> {
    DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect()
}

fn default_enabled() -> bool {
    true
}

fn default_owner() -> String {
    DEFAULT_OWNER.to_string()
}

fn default_repo() -> String {
    DEFAULT_REPO.to_string()
}

fn default_timeout() -> u64 {
    5
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise the user-wide configuration file.
    pub fn discover(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Self::load(&Self::default_path())
        }
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("charmil.toml"))
            .unwrap_or_else(|| PathBuf::from("~/.config/charmil.toml"))
    }

    /// Merge configuration with command line arguments
    pub fn merge_with_args(&mut self, args: &crate::cli::InitArgs) {
        if let Some(url) = &args.template {
            self.template.url = url.clone();
        }

        if args.branch.is_some() {
            self.template.branch = args.branch.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::InitArgs;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("test.toml");

        let config_content = r#"
[template]
url = "https://github.com/example/starter"
branch = "next"
exclude = [".git", "vendor"]

[update]
enabled = false
owner = "example"
repo = "tool"
timeout = 2
"#;

        fs::write(&config_path, config_content).unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.template.url, "https://github.com/example/starter");
        assert_eq!(config.template.branch, Some("next".to_string()));
        assert_eq!(config.template.placeholder_dir, "cmd/cli");
        assert_eq!(config.template.exclude, vec![".git", "vendor"]);

        assert!(!config.update.enabled);
        assert_eq!(config.update.owner, "example");
        assert_eq!(config.update.repo, "tool");
        assert_eq!(config.update.timeout, 2);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.template.url, STARTER_REPOSITORY);
        assert_eq!(config.template.exclude.len(), DEFAULT_EXCLUDES.len());
        assert!(config.update.enabled);
        assert_eq!(config.update.owner, "aerogear");
        assert_eq!(config.update.repo, "charmil");
        assert_eq!(config.update.timeout, 5);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.template.placeholder_dir, PLACEHOLDER_DIR);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("bad.toml");
        fs::write(&config_path, "[template\nurl = 3").unwrap();

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = Config::default();
        let args = InitArgs {
            template: Some("/tmp/local-starter".to_string()),
            branch: Some("dev".to_string()),
            ..Default::default()
        };

        config.merge_with_args(&args);

        assert_eq!(config.template.url, "/tmp/local-starter");
        assert_eq!(config.template.branch, Some("dev".to_string()));
    }
}
