//! Dependency managers the collector knows how to read.
//!
//! Each implementation is constructed for one project directory, reports
//! whether that project uses it, and enumerates the project's dependencies
//! together with whatever license data the installed sources carry.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::models::Dependency;

pub mod bundler;
pub mod cargo;
pub mod npm;

pub trait DependencyManager {
    /// Stable identifier, used in the manifest and in output file names.
    fn name(&self) -> &str;

    fn detected(&self) -> bool;

    /// Dependencies in the order the manager lists them.
    fn dependencies(&self) -> Result<Vec<Dependency>>;
}

/// Every supported dependency manager, in detection order.
pub fn implementations(project_dir: &Path) -> Vec<Box<dyn DependencyManager>> {
    vec![
        Box::new(bundler::BundlerManager::new(project_dir)),
        Box::new(npm::NpmManager::new(project_dir)),
        Box::new(cargo::CargoManager::new(project_dir)),
    ]
}

const LICENSE_FILE_PREFIXES: &[&str] = &["LICENSE", "LICENCE", "COPYING", "UNLICENSE", "NOTICE"];

/// License-looking files directly inside `dir`, sorted by file name.
pub fn find_license_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .map(|name| {
                    let upper = name.to_string_lossy().to_uppercase();
                    LICENSE_FILE_PREFIXES
                        .iter()
                        .any(|prefix| upper.starts_with(prefix))
                })
                .unwrap_or(false)
        })
        .collect();

    files.sort();
    files
}
