use anyhow::Result;
use clap::Parser;

use barrelgen::cli::{run_generate, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    run_generate(&args)
}
