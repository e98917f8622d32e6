use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use super::find_license_files;
use crate::models::Dependency;

/// Reads `package-lock.json` (v2/v3) and the installed `node_modules` tree.
pub struct NpmManager {
    project_dir: PathBuf,
}

impl NpmManager {
    pub fn new(project_dir: &Path) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
        }
    }
}

impl super::DependencyManager for NpmManager {
    fn name(&self) -> &str {
        "js_npm"
    }

    fn detected(&self) -> bool {
        self.project_dir.join("package-lock.json").exists()
    }

    fn dependencies(&self) -> Result<Vec<Dependency>> {
        let lock_path = self.project_dir.join("package-lock.json");
        parse_package_lock_json(&lock_path, &self.project_dir)
    }
}

/// Parse the `packages` map of a lockfile. License data comes from the lock
/// entry when present, otherwise from the installed `package.json`.
fn parse_package_lock_json(lock_path: &Path, project_root: &Path) -> Result<Vec<Dependency>> {
    let content = std::fs::read_to_string(lock_path)
        .with_context(|| format!("reading {}", lock_path.display()))?;
    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", lock_path.display()))?;
    let mut deps = Vec::new();

    if let Some(packages) = json.get("packages").and_then(|v| v.as_object()) {
        for (pkg_path, info) in packages {
            // Skip the root entry (empty string key)
            if pkg_path.is_empty() {
                continue;
            }
            // Workspace links point back into the project itself
            if info.get("link").and_then(Value::as_bool).unwrap_or(false) {
                continue;
            }

            let version = info
                .get("version")
                .and_then(|v| v.as_str())
                .unwrap_or("*")
                .to_string();

            // "node_modules/a/node_modules/@scope/b" → "@scope/b"
            let name = pkg_path
                .rsplit_once("node_modules/")
                .map_or(pkg_path.as_str(), |(_, name)| name)
                .to_string();

            let install_dir = project_root.join(pkg_path);
            let installed = install_dir.is_dir();

            let license = info.get("license").and_then(license_from_value).or_else(|| {
                installed
                    .then(|| read_license_from_package_json(&install_dir.join("package.json")))
                    .flatten()
            });

            let dep = if installed {
                Dependency::new(name, version, license, find_license_files(&install_dir))
                    .with_path(install_dir)
            } else {
                Dependency::new(name, version, license, Vec::new())
            };
            deps.push(dep);
        }
    }

    Ok(deps)
}

fn read_license_from_package_json(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let json: Value = serde_json::from_str(&content).ok()?;
    json.get("license").and_then(license_from_value)
}

/// Accepts both `"license": "MIT"` and the legacy `"license": {"type": "MIT"}`.
fn license_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(obj) => obj.get("type").and_then(|t| t.as_str()).map(str::to_string),
        _ => None,
    }
}
