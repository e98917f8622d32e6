//! Hand-curated license answers for dependencies whose own metadata is
//! missing or wrong.
//!
//! - [`defaults`] — the built-in table, grouped by dependency manager.
//! - [`Overrides`] — exact `(manager, name)` lookup over the built-in table
//!   plus any rules from the user's config.
//! - [`OverrideLicenseSet`] — license file locations of one override, resolved
//!   to local paths on demand.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::Config;
use crate::error::CollectorError;
use crate::net_fetcher::{is_remote, Fetch, NetFetcher};

pub mod defaults;

/// `(name, license, license_files)` row of the built-in table.
pub type OverrideRow = (
    &'static str,
    Option<&'static str>,
    Option<&'static [&'static str]>,
);

/// What an override says about a dependency. `None` fields defer to the
/// dependency manager.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideRule {
    pub license: Option<String>,
    pub license_files: Option<Vec<String>>,
}

impl From<&OverrideRow> for OverrideRule {
    fn from(row: &OverrideRow) -> Self {
        let (_, license, license_files) = *row;
        OverrideRule {
            license: license.map(str::to_string),
            license_files: license_files.map(|files| files.iter().map(|f| f.to_string()).collect()),
        }
    }
}

/// Lookup table keyed by dependency manager, then dependency name.
#[derive(Debug, Clone)]
pub struct Overrides {
    rules: HashMap<String, HashMap<String, OverrideRule>>,
}

impl Default for Overrides {
    /// The built-in table from [`defaults::DEFAULT_OVERRIDES`].
    fn default() -> Self {
        let mut overrides = Overrides::empty();
        for (manager, rows) in defaults::DEFAULT_OVERRIDES {
            for row in rows.iter() {
                overrides.override_license(manager, row.0, OverrideRule::from(row));
            }
        }
        overrides
    }
}

impl Overrides {
    pub fn empty() -> Self {
        Overrides {
            rules: HashMap::new(),
        }
    }

    /// Built-in table with the config's overrides layered on top.
    pub fn with_config(config: &Config) -> Self {
        let mut overrides = Overrides::default();
        for entry in &config.overrides {
            overrides.override_license(
                &entry.manager,
                &entry.name,
                OverrideRule {
                    license: entry.license.clone(),
                    license_files: entry.license_files.clone(),
                },
            );
        }
        overrides
    }

    /// Register (or replace) the rule for `name` under `manager`.
    pub fn override_license(&mut self, manager: &str, name: &str, rule: OverrideRule) {
        self.rules
            .entry(manager.to_string())
            .or_default()
            .insert(name.to_string(), rule);
    }

    pub fn has_override(&self, manager: &str, name: &str, _version: &str) -> bool {
        self.rule(manager, name).is_some()
    }

    pub fn license_for(&self, manager: &str, name: &str, _version: &str) -> Option<&str> {
        self.rule(manager, name)
            .and_then(|rule| rule.license.as_deref())
    }

    pub fn license_files_for(&self, manager: &str, name: &str, _version: &str) -> OverrideLicenseSet {
        let locations = self
            .rule(manager, name)
            .and_then(|rule| rule.license_files.clone())
            .unwrap_or_default();
        OverrideLicenseSet::new(locations)
    }

    /// Number of rules across all managers.
    pub fn len(&self) -> usize {
        self.rules.values().map(HashMap::len).sum()
    }

    fn rule(&self, manager: &str, name: &str) -> Option<&OverrideRule> {
        self.rules.get(manager).and_then(|by_name| by_name.get(name))
    }
}

/// License file locations supplied by an override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideLicenseSet {
    locations: Vec<String>,
}

impl OverrideLicenseSet {
    pub fn new(locations: Vec<String>) -> Self {
        Self { locations }
    }

    pub fn is_empty(&self) -> bool {
        self.locations().is_empty()
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Turn every location into a local file path, in order.
    ///
    /// URLs are downloaded into the fetcher's cache. Anything else must name an
    /// existing file under `dependency_root`.
    pub async fn resolve_locations<F: Fetch>(
        &self,
        dependency_root: Option<&Path>,
        fetcher: &NetFetcher<F>,
    ) -> Result<Vec<PathBuf>> {
        let mut resolved = Vec::with_capacity(self.locations.len());
        for location in &self.locations {
            let path = if is_remote(location) {
                fetcher.cache(location).await?
            } else {
                normalize_and_verify_path(location, dependency_root)?
            };
            resolved.push(path);
        }
        Ok(resolved)
    }
}

fn normalize_and_verify_path(location: &str, dependency_root: Option<&Path>) -> Result<PathBuf> {
    let invalid = || CollectorError::InvalidOverride {
        location: location.to_string(),
        root: dependency_root.map(Path::to_path_buf),
    };

    let root = dependency_root.ok_or_else(invalid)?;
    match std::fs::canonicalize(root.join(location)) {
        Ok(path) if path.is_file() => Ok(path),
        _ => Err(invalid().into()),
    }
}
