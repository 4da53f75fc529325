// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dry-run output.

use std::io::Write;

use btkpc_core::RenderJob;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Writes the render plan without touching any file.
pub(crate) fn write_plan(out: &mut impl Write, jobs: &[RenderJob], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for job in jobs {
                writeln!(
                    out,
                    "{} -> {}",
                    job.template.display(),
                    job.output.display()
                )?;
                for (token, value) in &job.map {
                    writeln!(out, "  {} = {}", token, value)?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, jobs)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
