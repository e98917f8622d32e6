use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions that abort a collection run.
///
/// Functions return `anyhow::Result`; callers recover the kind with
/// `err.downcast_ref::<CollectorError>()`.
#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("project directory '{}' does not exist", .0.display())]
    ProjectDirectoryMissing(PathBuf),

    #[error("no supported dependency manager found in '{}'", .0.display())]
    NoDependencyManagerFound(PathBuf),

    #[error(
        "provided license file path '{location}' can not be found under detected dependency path '{}'",
        display_root(.root)
    )]
    InvalidOverride {
        location: String,
        root: Option<PathBuf>,
    },

    #[error("failed to fetch license file from {url}")]
    Fetch { url: String },
}

fn display_root(root: &Option<PathBuf>) -> String {
    match root {
        Some(path) => path.display().to_string(),
        None => "<unknown>".to_string(),
    }
}
