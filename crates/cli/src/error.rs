// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the btkpc library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid {name} '{value}': directory does not exist")]
    InvalidDirectory { name: &'static str, value: String },

    #[error("cannot resolve {name} '{value}': {source}")]
    UnresolvableDirectory {
        name: &'static str,
        value: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Core(#[from] btkpc_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for btkpc operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
