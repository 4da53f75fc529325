// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the dry-run plan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const EXAMPLES_HELP: &str = "\
Examples:
  btk-pc --host i686-w64-mingw32 --prefix C:/btk --version 2.24.33
  btk-pc --host x86_64-w64-mingw32 --prefix C:/btk --version 2.24.33 \\
         --libdir '${prefix}/lib64' --srcdir build/win32
  btk-pc --host i686-w64-mingw32 --prefix C:/btk --version 2.24.33 --dry-run -o json";

#[derive(Parser, Debug)]
#[command(name = "btk-pc")]
#[command(about = "Generate BTK pkg-config files for Windows builds")]
#[command(
    long_about = "Generate BTK pkg-config files for Windows builds.\n\n\
    Renders bdk-2.0.pc, btk+-2.0.pc and bail.pc from their .pc.in templates \
    by replacing @TOKEN@ placeholders."
)]
#[command(after_help = EXAMPLES_HELP)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Build target identifier written to @host@ (e.g. i686-w64-mingw32)
    #[arg(long, value_name = "TRIPLE")]
    pub host: String,

    #[command(flatten)]
    pub base: BaseArgs,

    /// Print what would be rendered instead of writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Format of the --dry-run plan
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Log each rendered file
    #[arg(long, short)]
    pub verbose: bool,
}

/// Install locations, package version and source layout.
#[derive(Args, Debug, Clone)]
pub struct BaseArgs {
    /// Install prefix; must be an existing directory
    #[arg(long)]
    pub prefix: String,

    /// Prefix for installed programs (default: ${prefix})
    #[arg(long)]
    pub exec_prefix: Option<String>,

    /// Header directory (default: ${prefix}/include)
    #[arg(long)]
    pub includedir: Option<String>,

    /// Library directory (default: ${exec_prefix}/lib)
    #[arg(long)]
    pub libdir: Option<String>,

    /// Package version written to @VERSION@
    #[arg(long)]
    pub version: String,

    /// Directory the .pc files are written to
    #[arg(long, default_value = ".")]
    pub srcdir: PathBuf,

    /// Directory holding the .pc.in templates (default: <srcdir>/../..)
    #[arg(long)]
    pub top_srcdir: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
