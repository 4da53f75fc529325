// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! btkpc - pkg-config file generation for BTK Windows builds.
//!
//! This crate provides the functionality behind the `btk-pc` CLI tool,
//! which renders `bdk-2.0.pc`, `btk+-2.0.pc` and `bail.pc` from their
//! `.in` templates by substituting `@TOKEN@` placeholders.
//!
//! # Main Components
//!
//! - [`BaseItems`] - install directories, version and source/build dirs
//! - [`PcConfig`] - fixed version requirements and linker flags
//! - [`assemble`] - per-file token mappings and render jobs
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use btkpc::{assemble, BaseItems, PcConfig};
//!
//! let base = BaseItems::resolve(&args)?;
//! for job in assemble::jobs(PcConfig::default(), "i686-w64-mingw32", &base)? {
//!     job.run()?;
//! }
//! ```

pub mod assemble;
pub mod base;
mod cli;
pub mod config;
mod display;
pub mod env;
pub mod error;
pub mod logging;

pub use base::BaseItems;
pub use cli::{BaseArgs, Cli, OutputFormat};
pub use config::PcConfig;
pub use error::{Error, Result};

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let base = BaseItems::resolve(&cli.base)?;
    let jobs = assemble::jobs(PcConfig::default(), &cli.host, &base)?;

    if cli.dry_run {
        let stdout = std::io::stdout();
        return display::write_plan(&mut stdout.lock(), &jobs, cli.output);
    }

    for job in &jobs {
        job.run()?;
    }
    tracing::info!(count = jobs.len(), host = %cli.host, "pkg-config files generated");
    Ok(())
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
