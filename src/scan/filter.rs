use crate::config::BarrelConfig;

/// Whether a plain file should appear in its parent's barrel.
///
/// Generated barrels (prefix match or the root barrel itself) are excluded
/// so a run never re-exports its own artifacts. Everything else that does
/// not carry the source extension is skipped silently.
pub fn is_exportable_file(name: &str, config: &BarrelConfig) -> bool {
    name.ends_with(&config.source_extension)
        && !name.starts_with(&config.export_prefix)
        && name != config.root_barrel_name
}
