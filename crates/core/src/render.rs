// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering templates to files.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::map::TokenMap;
use crate::substitute::{leftover_tokens, substitute};

/// One template to render: where to read, where to write, what to replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderJob {
    pub template: PathBuf,
    pub output: PathBuf,
    #[serde(rename = "tokens")]
    pub map: TokenMap,
}

impl RenderJob {
    pub fn new(template: impl Into<PathBuf>, output: impl Into<PathBuf>, map: TokenMap) -> Self {
        RenderJob {
            template: template.into(),
            output: output.into(),
            map,
        }
    }

    pub fn run(&self) -> Result<()> {
        render(&self.template, &self.output, &self.map)
    }
}

/// Reads `template`, substitutes every token in `map` and writes `output`.
///
/// The output is created or truncated. Tokens left in the rendered text are
/// not an error; they are logged at debug level.
pub fn render(template: &Path, output: &Path, map: &TokenMap) -> Result<()> {
    let text = fs::read_to_string(template).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::TemplateNotFound {
            path: template.to_path_buf(),
        },
        _ => Error::Read {
            path: template.to_path_buf(),
            source,
        },
    })?;

    let rendered = substitute(&text, map);

    let leftovers = leftover_tokens(&rendered);
    if !leftovers.is_empty() {
        tracing::debug!(
            template = %template.display(),
            tokens = %leftovers.join(", "),
            "template has unreplaced tokens"
        );
    }

    fs::write(output, rendered).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(
        template = %template.display(),
        output = %output.display(),
        tokens = map.len(),
        "rendered"
    );
    Ok(())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
