use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Version of the manifest layout written by [`Manifest`].
pub const LICENSE_MANIFEST_VERSION: u32 = 1;

/// A dependency as reported by a dependency manager.
#[derive(Debug, Clone, PartialEq)]
pub struct Dependency {
    pub name: String,
    pub version: String,
    /// License detected from the dependency's own metadata.
    pub license: Option<String>,
    /// License files found in the dependency, in the order they were reported.
    pub license_files: Vec<PathBuf>,
    /// Root directory of the installed dependency, used to resolve override
    /// locations relative to it.
    pub path: Option<PathBuf>,
}

impl Dependency {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        license: Option<String>,
        license_files: Vec<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            license,
            license_files,
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Machine-readable summary of a collection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub license_manifest_version: u32,
    pub project_name: String,
    /// Keyed by dependency manager name, in detection order.
    pub dependency_managers: IndexMap<String, Vec<ManifestEntry>>,
}

impl Manifest {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            license_manifest_version: LICENSE_MANIFEST_VERSION,
            project_name: project_name.into(),
            dependency_managers: IndexMap::new(),
        }
    }

    /// File name the manifest is written to inside the output directory.
    pub fn file_name(&self) -> String {
        format!("{}-dependency-licenses.json", self.project_name)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &ManifestEntry)> {
        self.dependency_managers
            .iter()
            .flat_map(|(manager, deps)| deps.iter().map(move |d| (manager.as_str(), d)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub version: String,
    pub license: Option<String>,
    /// File names relative to the output directory.
    pub license_files: Vec<String>,
}

impl ManifestEntry {
    /// Entries with a null license or no license files need a human to look at them.
    pub fn is_incomplete(&self) -> bool {
        self.license.is_none() || self.license_files.is_empty()
    }
}
