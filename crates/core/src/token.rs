// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Placeholder tokens of the form `@NAME@`.

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

use crate::error::{Error, Result};

/// Delimiter that opens and closes every token.
pub const DELIMITER: char = '@';

/// A substitution point in a template, such as `@BDK_PACKAGES@`.
///
/// A token starts and ends with [`DELIMITER`] and has a non-empty name
/// in between. The name may itself contain delimiters; only the outer
/// characters are checked.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Validates `raw` and wraps it as a token.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.len() < 3 || !raw.starts_with(DELIMITER) || !raw.ends_with(DELIMITER) {
            return Err(Error::InvalidToken(raw));
        }
        Ok(Token(raw))
    }

    /// Returns the token including its delimiters.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
