use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::find_license_files;
use crate::models::Dependency;

#[derive(Debug, Deserialize)]
struct CargoLock {
    #[serde(default)]
    package: Vec<CargoLockPackage>,
}

#[derive(Debug, Deserialize)]
struct CargoLockPackage {
    name: String,
    version: String,
    /// Packages without a `source` field are local workspace members.
    source: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CrateManifest {
    package: Option<CratePackage>,
}

#[derive(Debug, Deserialize)]
struct CratePackage {
    license: Option<String>,
    #[serde(rename = "license-file")]
    license_file: Option<String>,
}

/// Reads `Cargo.lock` and the unpacked crate sources in the cargo registry.
pub struct CargoManager {
    project_dir: PathBuf,
    registry_src: PathBuf,
}

impl CargoManager {
    pub fn new(project_dir: &Path) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            registry_src: cargo_home().join("registry").join("src"),
        }
    }

    #[cfg(test)]
    pub fn with_registry_src(mut self, registry_src: &Path) -> Self {
        self.registry_src = registry_src.to_path_buf();
        self
    }

    /// `registry/src/<index>` directories, one per configured registry.
    fn registry_indexes(&self) -> Vec<PathBuf> {
        let Ok(entries) = std::fs::read_dir(&self.registry_src) else {
            return Vec::new();
        };
        let mut indexes: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_dir())
            .collect();
        indexes.sort();
        indexes
    }

    fn make_dep(&self, indexes: &[PathBuf], name: String, version: String) -> Result<Dependency> {
        let crate_dir = indexes
            .iter()
            .map(|index| index.join(format!("{}-{}", name, version)))
            .find(|dir| dir.is_dir());

        let Some(crate_dir) = crate_dir else {
            return Ok(Dependency::new(name, version, None, Vec::new()));
        };

        let mut license_files = find_license_files(&crate_dir);
        let mut license = None;

        let manifest_path = crate_dir.join("Cargo.toml");
        if manifest_path.exists() {
            let content = std::fs::read_to_string(&manifest_path)
                .with_context(|| format!("reading {}", manifest_path.display()))?;
            let manifest: CrateManifest = toml::from_str(&content)
                .with_context(|| format!("parsing {}", manifest_path.display()))?;
            if let Some(package) = manifest.package {
                license = package.license;
                if let Some(file) = package.license_file {
                    let path = crate_dir.join(file);
                    if path.is_file() && !license_files.contains(&path) {
                        license_files.push(path);
                    }
                }
            }
        }

        Ok(Dependency::new(name, version, license, license_files).with_path(crate_dir))
    }
}

impl super::DependencyManager for CargoManager {
    fn name(&self) -> &str {
        "rust_cargo"
    }

    fn detected(&self) -> bool {
        self.project_dir.join("Cargo.lock").exists()
    }

    fn dependencies(&self) -> Result<Vec<Dependency>> {
        let lock_path = self.project_dir.join("Cargo.lock");
        let content = std::fs::read_to_string(&lock_path)
            .with_context(|| format!("reading {}", lock_path.display()))?;
        let lock: CargoLock = toml::from_str(&content)
            .with_context(|| format!("parsing {}", lock_path.display()))?;

        let indexes = self.registry_indexes();
        lock.package
            .into_iter()
            // Skip local workspace members (they have no `source`)
            .filter(|p| p.source.is_some())
            .map(|p| self.make_dep(&indexes, p.name, p.version))
            .collect()
    }
}

fn cargo_home() -> PathBuf {
    if let Some(home) = std::env::var_os("CARGO_HOME") {
        return PathBuf::from(home);
    }
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".cargo")
}
