// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed values for the Windows pkg-config files.
//!
//! Minimum dependency versions, system libraries and naming used to fill the
//! per-file token tables. A [`PcConfig`] is built once per run and handed to
//! [`crate::assemble`]; nothing here is read from the environment.

/// File name of the accessibility library's pkg-config file.
pub const BAIL_PC: &str = "bail.pc";

/// Suffix of template files.
pub const TEMPLATE_SUFFIX: &str = ".in";

/// Literal values substituted into the generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcConfig {
    /// Toolkit API version, e.g. the `2.0` in `btk+-2.0`.
    pub api_version: String,
    /// Binary (module ABI) version.
    pub binary_version: String,
    /// Windowing backend name.
    pub backend: String,
    pub batk_min_version: String,
    pub bairo_min_version: String,
    pub pixbuf_min_version: String,
    /// Minimum bunnylib version, which is also the bio-2.0 requirement.
    pub bunnylib_min_version: String,
    /// System libraries the win32 backend links against.
    pub win32_system_libs: String,
}

impl Default for PcConfig {
    fn default() -> Self {
        PcConfig {
            api_version: "2.0".to_string(),
            binary_version: "2.10.0".to_string(),
            backend: "win32".to_string(),
            batk_min_version: "1.29.2".to_string(),
            bairo_min_version: "1.6".to_string(),
            pixbuf_min_version: "2.21.0".to_string(),
            bunnylib_min_version: "2.28.0".to_string(),
            win32_system_libs: "-lgdi32 -limm32 -lshell32 -lole32 -lwinmm".to_string(),
        }
    }
}

impl PcConfig {
    /// `bdk-pixbuf-2.0 >= <min>`, required by both the toolkit and the backend.
    pub fn pixbuf_requirement(&self) -> String {
        format!("bdk-pixbuf-2.0 >= {}", self.pixbuf_min_version)
    }

    pub fn bio_requirement(&self) -> String {
        format!("bio-2.0 >= {}", self.bunnylib_min_version)
    }

    pub fn bairo_requirement(&self) -> String {
        format!("bairo >= {}", self.bairo_min_version)
    }

    pub fn batk_requirement(&self) -> String {
        format!("batk >= {}", self.batk_min_version)
    }

    /// Public requirements of the windowing library.
    pub fn bdk_packages(&self) -> String {
        format!(
            "{} bangowin32 bangobairo {}",
            self.bio_requirement(),
            self.pixbuf_requirement()
        )
    }

    pub fn bdk_private_packages(&self) -> String {
        format!("{} {}", self.bio_requirement(), self.bairo_requirement())
    }

    /// Public requirements of the toolkit library.
    pub fn btk_packages(&self) -> String {
        format!(
            "{} {} {}",
            self.batk_requirement(),
            self.pixbuf_requirement(),
            self.bio_requirement()
        )
    }

    pub fn btk_private_packages(&self) -> String {
        "batk".to_string()
    }

    /// `bdk-2.0.pc`
    pub fn bdk_pc(&self) -> String {
        format!("bdk-{}.pc", self.api_version)
    }

    /// `btk+-2.0.pc`
    pub fn btk_pc(&self) -> String {
        format!("btk+-{}.pc", self.api_version)
    }
}

/// Template file name for a generated file name.
pub fn template_name(pc_name: &str) -> String {
    format!("{pc_name}{TEMPLATE_SUFFIX}")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
