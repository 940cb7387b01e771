use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// One immediate child of a scanned directory.
#[derive(Debug, Clone)]
pub struct ChildEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// List the immediate children of `dir`, files and directories alike.
///
/// Order is whatever the filesystem returns; callers sort their own output.
pub fn list_children(dir: &Path) -> Result<Vec<ChildEntry>> {
    let mut children = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry =
            entry.with_context(|| format!("failed to read directory {}", dir.display()))?;
        children.push(ChildEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path().to_path_buf(),
            is_dir: entry.file_type().is_dir(),
        });
    }

    Ok(children)
}
