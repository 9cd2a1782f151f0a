use crate::director::is_single_component;
use crate::error::{InitError, Result};

/// Values substituted into the starter's template markers.
///
/// All fields are checked to be non-empty when the context is built and never
/// change afterwards. The CLI name also names a directory, so it must be a
/// single path component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContext {
    owner: String,
    repo: String,
    cli_name: String,
}

impl TemplateContext {
    /// Field names available to templates, e.g. `{{.CliName}}`.
    pub const FIELDS: [&'static str; 3] = ["Owner", "Repo", "CliName"];

    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        cli_name: impl Into<String>,
    ) -> Result<Self> {
        let context = Self {
            owner: owner.into(),
            repo: repo.into(),
            cli_name: cli_name.into(),
        };

        for (field, value) in [
            ("Owner", &context.owner),
            ("Repo", &context.repo),
            ("CliName", &context.cli_name),
        ] {
            if value.is_empty() {
                return Err(InitError::InputValidation {
                    field,
                    reason: "must not be empty",
                });
            }
        }

        if !is_single_component(&context.cli_name) {
            return Err(InitError::InputValidation {
                field: "CliName",
                reason: "must be a single path component",
            });
        }

        Ok(context)
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn cli_name(&self) -> &str {
        &self.cli_name
    }

    /// Look up a template field by name.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "Owner" => Some(&self.owner),
            "Repo" => Some(&self.repo),
            "CliName" => Some(&self.cli_name),
            _ => None,
        }
    }
}
