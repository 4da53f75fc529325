// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-file token tables and the render jobs built from them.
//!
//! Every generated file gets its own literal table, then the shared table
//! (package naming plus base items) is merged over it. Shared values win on
//! collision.

use btkpc_core::{RenderJob, TokenMap};

use crate::base::BaseItems;
use crate::config::{self, PcConfig, BAIL_PC};
use crate::error::Result;

/// The three mappings, one per generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcMaps {
    pub btk: TokenMap,
    pub bdk: TokenMap,
    pub bail: TokenMap,
}

/// Tokens naming the API version and windowing backend.
pub fn package_table(config: &PcConfig) -> Result<TokenMap> {
    Ok(TokenMap::from_pairs([
        ("@BTK_API_VERSION@", config.api_version.clone()),
        ("@bdktarget@", config.backend.clone()),
    ])?)
}

/// Tokens specific to `btk+-2.0.pc`.
pub fn btk_table(config: &PcConfig, host: &str) -> Result<TokenMap> {
    Ok(TokenMap::from_pairs([
        ("@host@", host.to_string()),
        ("@BTK_BINARY_VERSION@", config.binary_version.clone()),
        ("@BTK_PACKAGES@", config.btk_packages()),
        ("@BTK_PRIVATE_PACKAGES@", config.btk_private_packages()),
        ("@BTK_EXTRA_LIBS@", String::new()),
        ("@BTK_EXTRA_CFLAGS@", String::new()),
    ])?)
}

/// Tokens specific to `bdk-2.0.pc`.
pub fn bdk_table(config: &PcConfig, host: &str) -> Result<TokenMap> {
    Ok(TokenMap::from_pairs([
        ("@host@", host.to_string()),
        ("@BDK_PACKAGES@", config.bdk_packages()),
        ("@BDK_PRIVATE_PACKAGES@", config.bdk_private_packages()),
        ("@BDK_EXTRA_LIBS@", config.win32_system_libs.clone()),
        ("@BDK_EXTRA_CFLAGS@", String::new()),
    ])?)
}

/// Builds the three mappings from the constants, target and base tokens.
pub fn assemble(config: &PcConfig, host: &str, base: &TokenMap) -> Result<PcMaps> {
    let shared = package_table(config)?.merged(base);

    let maps = PcMaps {
        btk: btk_table(config, host)?.merged(&shared),
        bdk: bdk_table(config, host)?.merged(&shared),
        bail: TokenMap::new().merged(&shared),
    };
    tracing::debug!(
        btk = maps.btk.len(),
        bdk = maps.bdk.len(),
        bail = maps.bail.len(),
        "assembled token maps"
    );
    Ok(maps)
}

/// Render jobs in output order: toolkit, windowing backend, accessibility.
pub fn jobs(config: PcConfig, host: &str, base: &BaseItems) -> Result<Vec<RenderJob>> {
    let maps = assemble(&config, host, &base.base_map()?)?;

    let files = [
        (config.btk_pc(), maps.btk),
        (config.bdk_pc(), maps.bdk),
        (BAIL_PC.to_string(), maps.bail),
    ];

    Ok(files
        .into_iter()
        .map(|(pc_name, map)| {
            RenderJob::new(
                base.template_path(&config::template_name(&pc_name)),
                base.output_path(&pc_name),
                map,
            )
        })
        .collect())
}

#[cfg(test)]
#[path = "assemble_tests.rs"]
mod tests;
