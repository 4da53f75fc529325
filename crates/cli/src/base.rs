// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Base items shared by every generated file.
//!
//! Resolves the install directories and package version into the
//! `@prefix@`, `@exec_prefix@`, `@includedir@`, `@libdir@` and `@VERSION@`
//! tokens, and locates the template and output directories.
//!
//! Directories may be given in pkg-config shorthand (`${prefix}/lib`). Such
//! values are written out unchanged so the generated file stays relocatable.

use std::path::{Path, PathBuf};

use btkpc_core::TokenMap;

use crate::cli::BaseArgs;
use crate::error::{Error, Result};

pub const PREFIX_VAR: &str = "${prefix}";
pub const EXEC_PREFIX_VAR: &str = "${exec_prefix}";

const DEFAULT_INCLUDEDIR: &str = "${prefix}/include";
const DEFAULT_LIBDIR: &str = "${exec_prefix}/lib";

/// Resolved base values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseItems {
    pub prefix: String,
    pub exec_prefix: String,
    pub includedir: String,
    pub libdir: String,
    pub version: String,
    /// Where generated files are written.
    pub srcdir: PathBuf,
    /// Where templates are read from.
    pub top_srcdir: PathBuf,
}

impl BaseItems {
    pub fn resolve(args: &BaseArgs) -> Result<Self> {
        let prefix = absolute_dir("prefix", &args.prefix)?;

        let exec_prefix = match args.exec_prefix.as_deref() {
            None => PREFIX_VAR.to_string(),
            Some(value) => match value.strip_prefix(PREFIX_VAR) {
                Some(rest) => {
                    let expanded = format!("{}{}", args.prefix, rest);
                    require_dir("exec-prefix", value, Path::new(&expanded))?;
                    forward_slashes(value)
                }
                None => absolute_dir("exec-prefix", value)?,
            },
        };

        let includedir = install_dir("includedir", args.includedir.as_deref(), DEFAULT_INCLUDEDIR)?;
        let libdir = install_dir("libdir", args.libdir.as_deref(), DEFAULT_LIBDIR)?;

        let top_srcdir = args
            .top_srcdir
            .clone()
            .unwrap_or_else(|| args.srcdir.join("..").join(".."));

        let items = BaseItems {
            prefix,
            exec_prefix,
            includedir,
            libdir,
            version: args.version.clone(),
            srcdir: args.srcdir.clone(),
            top_srcdir,
        };
        tracing::debug!(?items, "resolved base items");
        Ok(items)
    }

    /// Tokens every generated file receives.
    pub fn base_map(&self) -> Result<TokenMap> {
        let map = TokenMap::from_pairs([
            ("@VERSION@", self.version.as_str()),
            ("@prefix@", self.prefix.as_str()),
            ("@exec_prefix@", self.exec_prefix.as_str()),
            ("@includedir@", self.includedir.as_str()),
            ("@libdir@", self.libdir.as_str()),
        ])?;
        Ok(map)
    }

    pub fn template_path(&self, template_name: &str) -> PathBuf {
        self.top_srcdir.join(template_name)
    }

    pub fn output_path(&self, pc_name: &str) -> PathBuf {
        self.srcdir.join(pc_name)
    }
}

/// includedir/libdir: shorthand is kept as-is, anything else must exist.
fn install_dir(name: &'static str, value: Option<&str>, default: &str) -> Result<String> {
    match value {
        None => Ok(default.to_string()),
        Some(v) if v.starts_with(PREFIX_VAR) || v.starts_with(EXEC_PREFIX_VAR) => {
            Ok(forward_slashes(v))
        }
        Some(v) => absolute_dir(name, v),
    }
}

fn absolute_dir(name: &'static str, value: &str) -> Result<String> {
    let path = Path::new(value);
    require_dir(name, value, path)?;
    make_absolute(name, value, path)
}

fn make_absolute(name: &'static str, value: &str, path: &Path) -> Result<String> {
    let absolute = std::path::absolute(path).map_err(|source| Error::UnresolvableDirectory {
        name,
        value: value.to_string(),
        source,
    })?;
    Ok(forward_slashes(&absolute.to_string_lossy()))
}

fn require_dir(name: &'static str, value: &str, path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::InvalidDirectory {
            name,
            value: value.to_string(),
        })
    }
}

fn forward_slashes(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
#[path = "base_tests.rs"]
mod tests;
