//! Barrel-file generation for Dart package trees.
//!
//! One barrel per folder, each re-exporting the folder's eligible source
//! files and its subfolders' barrels, sorted and fully regenerated on
//! every run.

pub mod cli;
pub mod config;
pub mod generate;
pub mod scan;

pub use cli::Args;
