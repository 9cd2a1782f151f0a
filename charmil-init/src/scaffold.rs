use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::InitArgs;
use crate::config::{Config, TemplateConfig};
use crate::context::TemplateContext;
use crate::director;
use crate::materializer::Materializer;
use crate::prompt::{collect_context, InputSource};
use crate::walker::{ExclusionSet, TemplateWalker, WalkSummary};

/// Clones the starter into a directory and rewrites it for a new CLI.
pub struct Scaffolder {
    root: PathBuf,
    materializer: Materializer,
    placeholder_dir: PathBuf,
    exclusions: ExclusionSet,
}

impl Scaffolder {
    pub fn new(root: impl Into<PathBuf>, template: &TemplateConfig) -> Self {
        Self {
            root: root.into(),
            materializer: Materializer::new(template.url.clone())
                .with_branch(template.branch.clone()),
            placeholder_dir: PathBuf::from(&template.placeholder_dir),
            exclusions: template.exclude.iter().map(String::as_str).collect(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Clone, rename the placeholder directory, then render every file.
    ///
    /// Nothing already written is rolled back when a later step fails.
    pub fn run(&self, context: &TemplateContext) -> Result<WalkSummary> {
        self.materializer
            .materialize(&self.root)
            .context("Failed to clone the starter template")?;

        director::relocate(&self.root, &self.placeholder_dir, context.cli_name())
            .context("Failed to rename the CLI entry point")?;

        tracing::info!("Updating starter code with names");
        let summary = TemplateWalker::new(&self.exclusions, context)
            .run(&self.root)
            .context("Failed to walk directory")?;

        tracing::info!(
            "Rendered {} file(s), {} left unchanged",
            summary.rendered.len(),
            summary.unchanged
        );
        Ok(summary)
    }
}

/// `charmil init`: collect names, then scaffold into the working directory.
pub fn run_init(config: Config, args: &InitArgs, input: &impl InputSource) -> Result<()> {
    let root = std::env::current_dir().context("Failed to determine working directory")?;
    let (context, _) = init_in(&root, config, args, input)?;

    println!(
        "Your {} CLI has been initialized in this directory.",
        context.cli_name()
    );
    Ok(())
}

/// Collect and validate the names, then scaffold into `root`.
///
/// Invalid input is rejected before anything touches `root`.
pub fn init_in(
    root: &Path,
    mut config: Config,
    args: &InitArgs,
    input: &impl InputSource,
) -> Result<(TemplateContext, WalkSummary)> {
    config.merge_with_args(args);

    let context = collect_context(args, input)?;
    let summary = Scaffolder::new(root, &config.template).run(&context)?;
    Ok((context, summary))
}
