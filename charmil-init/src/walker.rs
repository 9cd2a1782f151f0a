use crate::context::TemplateContext;
use crate::error::{InitError, Result};
use crate::renderer;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Path components the starter ships that must never be rendered.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    ".git",
    ".github",
    ".chglog",
    ".goreleaser.yml",
    "CONTRIBUTING.md",
    "bin",
];

/// Literal path-component names excluded from rendering.
///
/// Matching is exact string equality on a single component, no globbing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl Default for ExclusionSet {
    fn default() -> Self {
        DEFAULT_EXCLUDES.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl ExclusionSet {
    pub fn contains(&self, component: &str) -> bool {
        self.names.contains(component)
    }

    /// True when any component of `relative` is in the set.
    pub fn matches(&self, relative: &Path) -> bool {
        relative.components().any(|component| match component {
            Component::Normal(name) => name.to_str().is_some_and(|name| self.contains(name)),
            _ => false,
        })
    }
}

#[derive(Debug, Default)]
pub struct WalkSummary {
    /// Files whose content changed, in walk order.
    pub rendered: Vec<PathBuf>,
    /// Files visited whose content rendered to itself.
    pub unchanged: usize,
}

/// Renders every non-excluded file below a root with a template context.
pub struct TemplateWalker<'a> {
    exclusions: &'a ExclusionSet,
    context: &'a TemplateContext,
}

impl<'a> TemplateWalker<'a> {
    pub fn new(exclusions: &'a ExclusionSet, context: &'a TemplateContext) -> Self {
        Self {
            exclusions,
            context,
        }
    }

    /// Walk `root` depth-first. Excluded directories are pruned.
    ///
    /// Every file is rendered in memory before anything is written, so the
    /// first error leaves the tree as it was.
    pub fn run(&self, root: &Path) -> Result<WalkSummary> {
        let mut summary = WalkSummary::default();
        let mut pending = Vec::new();

        let entries = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_excluded(root, entry.path()));

        for entry in entries {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                InitError::walk(&path, InitError::Traverse(e))
            })?;
            let path = entry.path();

            let metadata = entry
                .metadata()
                .map_err(|e| InitError::walk(path, InitError::Traverse(e)))?;
            if !metadata.is_file() {
                continue;
            }

            match self.render_file(path) {
                Ok(Some(content)) => pending.push((path.to_path_buf(), content)),
                Ok(None) => summary.unchanged += 1,
                Err(e) => return Err(InitError::walk(path, e)),
            }
        }

        for (path, content) in pending {
            fs::write(&path, content).map_err(|e| InitError::walk(&path, e.into()))?;
            tracing::debug!("Rendered {}", path.display());
            summary.rendered.push(path);
        }

        Ok(summary)
    }

    fn is_excluded(&self, root: &Path, path: &Path) -> bool {
        let excluded = path
            .strip_prefix(root)
            .is_ok_and(|relative| self.exclusions.matches(relative));
        if excluded {
            tracing::debug!("Skipping {}", path.display());
        }
        excluded
    }

    /// Returns the rendered content, or `None` when rendering changes nothing.
    fn render_file(&self, path: &Path) -> Result<Option<String>> {
        let bytes = fs::read(path)?;
        if !bytes.windows(2).any(|pair| pair == b"{{") {
            return Ok(None);
        }

        let text = std::str::from_utf8(&bytes).map_err(|_| InitError::NotText)?;
        let rendered = renderer::render(text, self.context)?;

        Ok((rendered != text).then_some(rendered))
    }
}

/// Render every file under `root` that no exclusion matches.
pub fn walk(
    root: &Path,
    exclusions: &ExclusionSet,
    context: &TemplateContext,
) -> Result<WalkSummary> {
    TemplateWalker::new(exclusions, context).run(root)
}
