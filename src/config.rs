use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Root configuration structure, deserialized from `.license-collector/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Directory where remote license files are cached.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
    /// Project-specific overrides, layered on top of the built-in table.
    #[serde(default)]
    pub overrides: Vec<OverrideConfig>,
}

/// A single user-supplied override.
#[derive(Debug, Clone, Deserialize)]
pub struct OverrideConfig {
    /// Dependency manager name, e.g. `ruby_bundler`.
    pub manager: String,
    /// Dependency name as reported by the manager.
    pub name: String,
    #[serde(default)]
    pub license: Option<String>,
    /// Paths relative to the dependency root, or `http(s)://` URLs.
    #[serde(default)]
    pub license_files: Option<Vec<String>>,
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.license-collector/config.toml`
/// 3. `~/.config/license-collector/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".license-collector").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-collector")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
}

/// Cache directory used when neither the CLI nor the config names one.
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("license-collector")
}
