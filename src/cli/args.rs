use std::path::PathBuf;

use clap::Parser;

/// Generate and refresh Dart barrel (export) files.
///
/// Walks the given directory tree and rewrites one barrel per folder,
/// re-exporting every sibling source file and every subfolder's barrel.
#[derive(Parser, Debug)]
#[command(name = "barrelgen", version, about)]
pub struct Args {
    /// Root directory to process
    #[arg(default_value = "lib")]
    pub path: PathBuf,

    /// TOML config file with naming rules
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Source file extension (overrides config)
    #[arg(long)]
    pub extension: Option<String>,

    /// Prefix for generated per-folder barrels (overrides config)
    #[arg(long)]
    pub prefix: Option<String>,

    /// File name of the root barrel (overrides config)
    #[arg(long)]
    pub root_barrel: Option<String>,

    /// Walk and report without writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress the summary output
    #[arg(short, long)]
    pub quiet: bool,
}
