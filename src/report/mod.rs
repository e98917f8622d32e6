//! Human-readable output for a finished collection run.
//!
//! - [`terminal`] — colored summary box plus tables of dependencies that still
//!   need attention; respects `--verbose` / `--quiet`.
//!
//! The machine-readable manifest is written by the collector itself.

pub mod terminal;
