// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! stderr logging via `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

use crate::env;

/// Picks the filter directive: `BTK_PC_LOG` when set, otherwise `info`
/// with `--verbose` and `warn` without.
pub fn filter_directive(verbose: bool, from_env: Option<String>) -> String {
    match from_env {
        Some(directive) => directive,
        None if verbose => "info".to_string(),
        None => "warn".to_string(),
    }
}

/// Installs the global subscriber. Call once, from the binary.
pub fn setup_logging(verbose: bool) {
    let directive = filter_directive(verbose, env::log_filter());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
