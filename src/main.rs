//! `license-collector` — gather dependency license files and write a license manifest.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]) and build the override table ([`overrides`]).
//! 3. Detect dependency managers ([`dependency_manager`]).
//! 4. Settle each dependency's license, copying license files into the output
//!    directory and fetching remote ones through the cache ([`collector`], [`net_fetcher`]).
//! 5. Write `<project>-dependency-licenses.json` ([`models::Manifest`]).
//! 6. Print a summary ([`report`]).
//! 7. Exit `0`, or `1` on any [`error::CollectorError`] or I/O failure.

mod cli;
mod collector;
mod config;
mod dependency_manager;
mod error;
mod models;
mod net_fetcher;
mod overrides;
mod report;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::Cli;
use collector::Collector;
use config::{default_cache_dir, load_config};
use net_fetcher::{HttpFetcher, NetFetcher};
use overrides::Overrides;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.project_dir, cli.config.as_deref())?;
    let overrides = Overrides::with_config(&config);

    let cache_dir = cli
        .cache_dir
        .clone()
        .or_else(|| config.cache_dir.clone())
        .unwrap_or_else(default_cache_dir);

    if !cli.quiet {
        eprintln!(
            "  {} {} overrides, cache at {}",
            "→".cyan(),
            overrides.len(),
            cache_dir.display()
        );
    }

    let fetcher = NetFetcher::new(HttpFetcher::new()?, cache_dir);
    let excluded = cli
        .exclude_manager
        .iter()
        .map(|m| m.manager_name().to_string())
        .collect();

    let collector = Collector::new(
        cli.project_name.clone(),
        cli.project_dir.clone(),
        cli.output_dir.clone(),
        overrides,
        fetcher,
    )
    .excluding(excluded)
    .quiet(cli.quiet);

    if !cli.quiet {
        eprintln!(
            "  {} collecting licenses for {} in {}",
            "→".cyan(),
            collector.project_name().bold(),
            collector.project_dir().display()
        );
    }

    match collector.run().await {
        Ok(manifest) => {
            report::terminal::render(&manifest, collector.output_dir(), cli.verbose, cli.quiet);
            Ok(())
        }
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            std::process::exit(1);
        }
    }
}
