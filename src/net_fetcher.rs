//! Fetching and caching of remote license files.
//!
//! License text behind a pinned URL is treated as immutable, so a cached copy
//! is reused forever and never revalidated.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::error::CollectorError;

/// Transport used to download a remote license file.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// [`Fetch`] implementation backed by `reqwest`.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("license-collector/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Returns `true` when a license location points at an HTTP(S) resource.
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Downloads remote license files into a cache directory, once per URL.
pub struct NetFetcher<F> {
    fetcher: F,
    cache_dir: PathBuf,
}

impl<F: Fetch> NetFetcher<F> {
    pub fn new(fetcher: F, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            cache_dir: cache_dir.into(),
        }
    }

    /// Where the content of `url` lives once cached.
    ///
    /// Layout: `{cache_dir}/{sha256(url)}/{basename}`. The basename is kept so
    /// that output files derived from it stay recognizable (`LICENSE`, `COPYING`).
    pub fn cache_path(&self, url: &str) -> PathBuf {
        let digest = Sha256::digest(url.as_bytes());
        self.cache_dir
            .join(format!("{:x}", digest))
            .join(url_basename(url))
    }

    /// Return a local path holding the content of `url`, downloading it first
    /// if it is not cached yet.
    pub async fn cache(&self, url: &str) -> Result<PathBuf> {
        let path = self.cache_path(url);
        if path.is_file() {
            return Ok(path);
        }

        let body = self
            .fetcher
            .fetch(url)
            .await
            .with_context(|| CollectorError::Fetch {
                url: url.to_string(),
            })?;

        // The entry only appears under its final name once fully written, so
        // an interrupted download never passes the `is_file` check above.
        let parent = path.parent().unwrap_or(&self.cache_dir);
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating cache directory {}", parent.display()))?;
        let mut partial = NamedTempFile::new_in(parent)
            .with_context(|| format!("creating temporary file in {}", parent.display()))?;
        partial
            .write_all(&body)
            .with_context(|| format!("writing cached license {}", path.display()))?;
        partial
            .persist(&path)
            .with_context(|| format!("writing cached license {}", path.display()))?;

        Ok(path)
    }
}

/// Last path segment of a URL, ignoring any query string or fragment.
fn url_basename(url: &str) -> String {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    let after_scheme = without_query
        .split_once("://")
        .map_or(without_query, |(_, rest)| rest);

    match after_scheme.split_once('/') {
        Some((_, path)) => match path.rsplit('/').next() {
            Some(segment) if !segment.is_empty() => segment.to_string(),
            _ => "LICENSE".to_string(),
        },
        None => "LICENSE".to_string(),
    }
}
