// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! btkpc-core: token substitution for pkg-config templates
//!
//! This crate provides the placeholder token type, token mappings, the
//! text substitution pass and file rendering used by the `btk-pc` CLI.

pub mod error;
pub mod map;
pub mod render;
pub mod substitute;
pub mod token;

pub use error::{Error, Result};
pub use map::TokenMap;
pub use render::{render, RenderJob};
pub use substitute::{leftover_tokens, substitute};
pub use token::Token;
