// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for btkpc-core operations.

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur in btkpc-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid token '{0}'\n  hint: tokens look like @NAME@")]
    InvalidToken(String),

    #[error("template not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for btkpc-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
