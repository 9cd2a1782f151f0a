use crate::error::{InitError, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Entry-point directory of the starter that gets renamed after the new CLI.
pub const PLACEHOLDER_DIR: &str = "cmd/cli";

/// Rename `root/old_relative` to a sibling directory called `new_name`.
///
/// Returns the new path. Renaming a directory to its own name is a no-op.
pub fn relocate(root: &Path, old_relative: &Path, new_name: &str) -> Result<PathBuf> {
    let source = root.join(old_relative);
    let rename_error = |to: &Path, reason: &str| InitError::Rename {
        from: source.display().to_string(),
        to: to.display().to_string(),
        reason: reason.to_string(),
    };

    if !is_single_component(new_name) {
        return Err(rename_error(
            Path::new(new_name),
            "name must be a single, non-empty path component",
        ));
    }

    let destination = source
        .parent()
        .map(|parent| parent.join(new_name))
        .unwrap_or_else(|| PathBuf::from(new_name));

    if !source.is_dir() {
        return Err(rename_error(&destination, "source directory does not exist"));
    }

    if destination == source {
        tracing::debug!("{} already has the requested name", source.display());
        return Ok(destination);
    }

    if fs::symlink_metadata(&destination).is_ok() {
        return Err(rename_error(&destination, "destination already exists"));
    }

    fs::rename(&source, &destination).map_err(|e| rename_error(&destination, &e.to_string()))?;

    tracing::info!(
        "Renamed {} to {}",
        old_relative.display(),
        destination.strip_prefix(root).unwrap_or(&destination).display()
    );
    Ok(destination)
}

/// True when `name` is exactly one normal path component.
pub(crate) fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(first)), None) if first == name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn setup() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("cmd/cli")).unwrap();
        fs::create_dir_all(dir.path().join("cmd/other")).unwrap();
        fs::write(dir.path().join("cmd/cli/main.go"), "package main\n").unwrap();
        fs::write(dir.path().join("cmd/other/keep.txt"), "keep").unwrap();
        dir
    }

    #[test]
    fn test_relocate_placeholder() {
        let dir = setup();

        let new_path = relocate(dir.path(), Path::new(PLACEHOLDER_DIR), "foo").unwrap();

        assert_eq!(new_path, dir.path().join("cmd/foo"));
        assert!(dir.path().join("cmd/foo/main.go").exists());
        assert!(!dir.path().join("cmd/cli").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("cmd/other/keep.txt")).unwrap(),
            "keep"
        );

        let mut entries: Vec<_> = fs::read_dir(dir.path().join("cmd"))
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        entries.sort();
        assert_eq!(entries, vec!["foo", "other"]);
    }

    #[test]
    fn test_missing_source() {
        let dir = tempdir().unwrap();
        let err = relocate(dir.path(), Path::new(PLACEHOLDER_DIR), "foo").unwrap_err();

        match err {
            InitError::Rename { reason, .. } => assert!(reason.contains("does not exist")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_existing_destination() {
        let dir = setup();
        let err = relocate(dir.path(), Path::new(PLACEHOLDER_DIR), "other").unwrap_err();

        assert!(matches!(err, InitError::Rename { .. }));
        assert!(dir.path().join("cmd/cli/main.go").exists());
    }

    #[test]
    fn test_same_name_is_noop() {
        let dir = setup();
        let path = relocate(dir.path(), Path::new(PLACEHOLDER_DIR), "cli").unwrap();

        assert_eq!(path, dir.path().join("cmd/cli"));
        assert!(dir.path().join("cmd/cli/main.go").exists());
    }

    #[test]
    fn test_invalid_names() {
        let dir = setup();
        for name in ["", "a/b", "..", "."] {
            assert!(
                matches!(
                    relocate(dir.path(), Path::new(PLACEHOLDER_DIR), name),
                    Err(InitError::Rename { .. })
                ),
                "{name:?} should be rejected"
            );
        }
        assert!(dir.path().join("cmd/cli").exists());
    }
}
