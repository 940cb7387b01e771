use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::BarrelConfig;
use crate::scan::{is_exportable_file, list_children};

/// Counters accumulated over one recursive run.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenerateReport {
    pub dirs_visited: usize,
    pub files_written: usize,
    pub lines_emitted: usize,
}

/// Name of the barrel file a directory owns.
///
/// The root directory gets the fixed root barrel name; every other
/// directory `X` gets `{prefix}X{extension}`.
pub fn barrel_file_name(dir_name: &str, config: &BarrelConfig) -> String {
    if dir_name == config.root_dir_name {
        config.root_barrel_name.clone()
    } else {
        format!(
            "{}{}{}",
            config.export_prefix, dir_name, config.source_extension
        )
    }
}

/// Export statement for a sibling source file.
pub fn file_export_line(file_name: &str) -> String {
    format!("export '{}';", file_name)
}

/// Export statement for a subdirectory's own barrel, always the non-root
/// form since only the top-level directory can be the root.
pub fn dir_export_line(dir_name: &str, config: &BarrelConfig) -> String {
    format!(
        "export '{}/{}{}{}';",
        dir_name, config.export_prefix, dir_name, config.source_extension
    )
}

/// Regenerate barrels for `path` and every directory below it.
///
/// Depth-first: each subdirectory is fully processed before its parent's
/// barrel is written. Every barrel is overwritten from scratch, so lines for
/// deleted sources never survive a re-run. With `dry_run` the walk and the
/// report are identical but nothing is written.
pub fn generate_tree(
    path: &Path,
    config: &BarrelConfig,
    dry_run: bool,
) -> Result<GenerateReport> {
    let mut report = GenerateReport::default();
    generate_dir(path, config, dry_run, &mut report)?;
    Ok(report)
}

fn generate_dir(
    path: &Path,
    config: &BarrelConfig,
    dry_run: bool,
    report: &mut GenerateReport,
) -> Result<()> {
    let dir_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let barrel_path = path.join(barrel_file_name(&dir_name, config));

    let mut lines = Vec::new();

    for child in list_children(path)? {
        if child.is_dir {
            lines.push(dir_export_line(&child.name, config));
            generate_dir(&child.path, config, dry_run, report)?;
        } else if is_exportable_file(&child.name, config) {
            lines.push(file_export_line(&child.name));
        }
    }

    // Listing order is filesystem-dependent; sorted output keeps runs
    // deterministic and diffs stable.
    lines.sort();

    report.dirs_visited += 1;
    report.lines_emitted += lines.len();

    if !dry_run {
        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&barrel_path, content)
            .with_context(|| format!("failed to write {}", barrel_path.display()))?;
        report.files_written += 1;
    }

    Ok(())
}
