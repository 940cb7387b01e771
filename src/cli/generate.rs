use anyhow::{Context, Result};
use console::{style, Emoji};

use crate::config::BarrelConfig;
use crate::generate::generate_tree;
use crate::Args;

static GENERATING: Emoji<'_, '_> = Emoji("📦 ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");
static DRY: Emoji<'_, '_> = Emoji("🔍 ", "");

pub fn run_generate(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => BarrelConfig::load(path)?,
        None => BarrelConfig::default(),
    };

    if let Some(extension) = &args.extension {
        config.source_extension = extension.clone();
    }
    if let Some(prefix) = &args.prefix {
        config.export_prefix = prefix.clone();
    }
    if let Some(root_barrel) = &args.root_barrel {
        config.root_barrel_name = root_barrel.clone();
    }
    config
        .validate()
        .context("invalid barrel configuration")?;

    if !args.quiet {
        println!(
            "{}Generating barrels under {}...",
            GENERATING,
            style(args.path.display()).cyan()
        );
    }

    let report = generate_tree(&args.path, &config, args.dry_run)?;

    if !args.quiet {
        if args.dry_run {
            println!("\n{}Dry run, nothing written.\n", DRY);
        } else {
            println!("\n{}Barrels up to date!\n", SUCCESS);
        }
        println!(
            "  Folders visited: {}",
            style(report.dirs_visited).green()
        );
        println!(
            "  Barrels written: {}",
            style(report.files_written).cyan()
        );
        println!(
            "  Export lines:    {}",
            style(report.lines_emitted).dim()
        );
    }

    Ok(())
}
