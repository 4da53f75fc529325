// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Token mappings.
//!
//! A [`TokenMap`] associates each [`Token`] with its literal replacement.
//! Writes are last-write-wins, both for single inserts and for
//! [`TokenMap::merge`], where the merged-in map overrides the receiver.

use serde::Serialize;
use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::token::Token;

/// Mapping from placeholder token to replacement text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenMap {
    entries: BTreeMap<Token, String>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from literal `(token, value)` pairs.
    ///
    /// A token listed more than once keeps its last value. Such repeats are
    /// almost always typos in a table, so each one is logged.
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self>
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new();
        for (key, value) in pairs {
            let token = Token::new(key)?;
            if let Some(previous) = map.insert(token.clone(), value) {
                tracing::warn!(
                    token = %token,
                    discarded = %previous,
                    "duplicate token in table, keeping last value"
                );
            }
        }
        Ok(map)
    }

    /// Sets `token` to `value`, returning the value it replaced.
    pub fn insert(&mut self, token: Token, value: impl Into<String>) -> Option<String> {
        self.entries.insert(token, value.into())
    }

    /// Copies every entry of `other` into `self`, overriding collisions.
    pub fn merge(&mut self, other: &TokenMap) {
        for (token, value) in &other.entries {
            if let Some(previous) = self.entries.insert(token.clone(), value.clone()) {
                if previous != *value {
                    tracing::debug!(token = %token, from = %previous, to = %value, "overridden by merge");
                }
            }
        }
    }

    /// Consuming form of [`TokenMap::merge`].
    pub fn merged(mut self, other: &TokenMap) -> Self {
        self.merge(other);
        self
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.get(token).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in token order.
    pub fn iter(&self) -> btree_map::Iter<'_, Token, String> {
        self.entries.iter()
    }

    pub fn tokens(&self) -> btree_map::Keys<'_, Token, String> {
        self.entries.keys()
    }
}

impl<'a> IntoIterator for &'a TokenMap {
    type Item = (&'a Token, &'a String);
    type IntoIter = btree_map::Iter<'a, Token, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "map_tests.rs"]
mod tests;
