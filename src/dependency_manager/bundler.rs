use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;

use super::find_license_files;
use crate::models::Dependency;

/// Reads `Gemfile.lock` and looks for the installed gems in the project's
/// `vendor/bundle`, then `GEM_HOME`, each `GEM_PATH` entry and finally
/// `~/.gem/ruby/*`.
pub struct BundlerManager {
    project_dir: PathBuf,
    bundle_path: PathBuf,
    /// Gem homes outside the project, each holding `gems/` and `specifications/`.
    gem_homes: Vec<PathBuf>,
}

impl BundlerManager {
    pub fn new(project_dir: &Path) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            bundle_path: project_dir.join("vendor").join("bundle"),
            gem_homes: env_gem_homes(),
        }
    }

    #[cfg(test)]
    pub fn with_bundle_path(mut self, bundle_path: &Path) -> Self {
        self.bundle_path = bundle_path.to_path_buf();
        self
    }

    #[cfg(test)]
    pub fn with_gem_homes(mut self, gem_homes: Vec<PathBuf>) -> Self {
        self.gem_homes = gem_homes;
        self
    }

    /// Every gem home to search, in priority order: `ruby/<abi>` directories
    /// under the bundle path (e.g. `ruby/3.2.0`), then the configured homes.
    fn gem_homes(&self) -> Vec<PathBuf> {
        let mut homes = abi_dirs(&self.bundle_path.join("ruby"));
        for home in &self.gem_homes {
            if !homes.contains(home) {
                homes.push(home.clone());
            }
        }
        homes
    }

    fn make_dep(&self, homes: &[PathBuf], name: String, version: String) -> Dependency {
        let full_name = format!("{}-{}", name, version);

        let gem_dir = homes
            .iter()
            .map(|home| home.join("gems").join(&full_name))
            .find(|dir| dir.is_dir());

        let license = homes
            .iter()
            .map(|home| {
                home.join("specifications")
                    .join(format!("{}.gemspec", full_name))
            })
            .find_map(|spec| read_license_from_gemspec(&spec));

        let license_files = gem_dir
            .as_deref()
            .map(find_license_files)
            .unwrap_or_default();

        let dep = Dependency::new(name, version, license, license_files);
        match gem_dir {
            Some(dir) => dep.with_path(dir),
            None => dep,
        }
    }
}

impl super::DependencyManager for BundlerManager {
    fn name(&self) -> &str {
        "ruby_bundler"
    }

    fn detected(&self) -> bool {
        self.project_dir.join("Gemfile.lock").exists()
    }

    fn dependencies(&self) -> Result<Vec<Dependency>> {
        let lock_path = self.project_dir.join("Gemfile.lock");
        let content = std::fs::read_to_string(&lock_path)
            .with_context(|| format!("reading {}", lock_path.display()))?;

        let homes = self.gem_homes();
        let deps = parse_gemfile_lock(&content)?
            .into_iter()
            .map(|(name, version)| self.make_dep(&homes, name, version))
            .collect();

        Ok(deps)
    }
}

/// Gem homes named by the environment: `GEM_HOME`, each `GEM_PATH` entry,
/// then the per-user `~/.gem/ruby/<abi>` directories.
fn env_gem_homes() -> Vec<PathBuf> {
    let mut homes = Vec::new();
    if let Some(gem_home) = std::env::var_os("GEM_HOME") {
        homes.push(PathBuf::from(gem_home));
    }
    if let Some(gem_path) = std::env::var_os("GEM_PATH") {
        homes.extend(std::env::split_paths(&gem_path).filter(|p| !p.as_os_str().is_empty()));
    }
    if let Some(home) = dirs::home_dir() {
        homes.extend(abi_dirs(&home.join(".gem").join("ruby")));
    }
    homes
}

/// Subdirectories of `dir`, sorted by name.
fn abi_dirs(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    dirs
}

/// Extract `(name, version)` pairs from the `specs:` blocks of a lockfile.
///
/// Specs are indented by exactly four spaces; their own requirements are
/// indented by six and are skipped.
fn parse_gemfile_lock(content: &str) -> Result<Vec<(String, String)>> {
    let spec_re = Regex::new(r"^    ([A-Za-z0-9_.\-]+) \(([^)\s]+)\)$")?;
    let mut specs = Vec::new();
    let mut in_specs = false;

    for line in content.lines() {
        if !line.starts_with(' ') {
            // New top-level section (GEM, GIT, PATH, PLATFORMS, DEPENDENCIES ...)
            in_specs = false;
            continue;
        }
        if line.trim_end() == "  specs:" {
            in_specs = true;
            continue;
        }
        if !in_specs {
            continue;
        }
        if let Some(caps) = spec_re.captures(line) {
            specs.push((caps[1].to_string(), caps[2].to_string()));
        }
    }

    Ok(specs)
}

/// Pull the first license out of a generated `.gemspec`, e.g.
/// `s.licenses = ["MIT".freeze]` or `s.license = "Ruby"`.
fn read_license_from_gemspec(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let re = Regex::new(r#"\.licenses?\s*=\s*\[?\s*["']([^"']+)["']"#).ok()?;
    re.captures(&content).map(|caps| caps[1].to_string())
}
