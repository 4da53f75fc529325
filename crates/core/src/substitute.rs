// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass token substitution over template text.
//!
//! The text is scanned from left to right. At each delimiter the longest
//! matching token is replaced; anything else is copied as-is. Replacement
//! values are never re-scanned, so the result does not depend on the order
//! of entries in the map. Template text that becomes adjacent when a token
//! is removed is scanned again, so no mapped token survives in the output.

use regex::Regex;
use std::sync::LazyLock;

use crate::map::TokenMap;
use crate::token::{Token, DELIMITER};

// Autoconf-style placeholder: @ident@
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"@[A-Za-z_][A-Za-z0-9_]*@") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Replaces every mapped token in `text` with its value.
pub fn substitute(text: &str, map: &TokenMap) -> String {
    let mut out = String::with_capacity(text.len());
    // Template text at the tail of `out`, after the last non-empty value.
    let mut literal_start = 0;
    let mut input = text.to_string();
    let mut pos = 0;

    while let Some(found) = input[pos..].find(DELIMITER) {
        let at = pos + found;
        out.push_str(&input[pos..at]);
        match longest_match(&input[at..], map) {
            Some((token, value)) if value.is_empty() => {
                // Removing the token joins the template text on either side;
                // scan the joined run again.
                let mut joined = out.split_off(literal_start);
                joined.push_str(&input[at + token.as_str().len()..]);
                input = joined;
                pos = 0;
            }
            Some((token, value)) => {
                out.push_str(value);
                literal_start = out.len();
                pos = at + token.as_str().len();
            }
            None => {
                out.push(DELIMITER);
                pos = at + DELIMITER.len_utf8();
            }
        }
    }

    out.push_str(&input[pos..]);
    out
}

fn longest_match<'m>(tail: &str, map: &'m TokenMap) -> Option<(&'m Token, &'m String)> {
    map.iter()
        .filter(|(token, _)| tail.starts_with(token.as_str()))
        .max_by_key(|(token, _)| token.as_str().len())
}

/// Returns the distinct `@ident@` placeholders still present in `text`.
///
/// Used after rendering to report template tokens nobody supplied a value
/// for. Order follows first appearance.
pub fn leftover_tokens(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in PLACEHOLDER_RE.find_iter(text) {
        if !found.iter().any(|t| t == m.as_str()) {
            found.push(m.as_str().to_string());
        }
    }
    found
}

#[cfg(test)]
#[path = "substitute_tests.rs"]
mod tests;
