use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Naming rules for generated barrel files.
///
/// Defaults reproduce the conventional Flutter layout: sources under `lib/`,
/// per-folder barrels named `export_<folder>.dart`, and a single root barrel
/// that consumers import.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BarrelConfig {
    /// Suffix a file must carry to be re-exported (e.g. `.dart`).
    pub source_extension: String,
    /// Prefix of generated per-folder barrel files (e.g. `export_`).
    pub export_prefix: String,
    /// Directory base name that gets the root barrel instead of the
    /// per-folder pattern.
    pub root_dir_name: String,
    /// File name of the root barrel.
    pub root_barrel_name: String,
}

impl Default for BarrelConfig {
    fn default() -> Self {
        Self {
            source_extension: ".dart".to_string(),
            export_prefix: "export_".to_string(),
            root_dir_name: "lib".to_string(),
            root_barrel_name: "flutter_enhancer.dart".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("source_extension must start with '.' (got {0:?})")]
    BadExtension(String),
    #[error("export_prefix must not be empty")]
    EmptyPrefix,
    #[error("root_barrel_name must not be empty")]
    EmptyRootBarrel,
}

impl BarrelConfig {
    /// Load config from a TOML file. All keys are optional; missing keys
    /// keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.source_extension.starts_with('.') {
            return Err(ConfigError::BadExtension(self.source_extension.clone()));
        }
        if self.export_prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        if self.root_barrel_name.is_empty() {
            return Err(ConfigError::EmptyRootBarrel);
        }
        Ok(())
    }
}
