// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process-local property store.
//!
//! ```text
//! Properties (BTreeMap<String, String>)
//!   set/get/remove        single keys
//!   apply_overrides()     ["KEY=VALUE", ...] from --set
//!   extend_missing()      layer another store underneath
//! ```
//!
//! Properties are distinct from environment variables: they are written at
//! runtime (for example when a default is applied) and are owned by whoever
//! holds the store, never by global state.


use serde::{Deserialize, Serialize};

use super::ConfigMap;
use crate::error::PropertyError;

/// A mutable string-to-string property store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
    values: ConfigMap,
}

impl Properties {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: ConfigMap::new(),
        }
    }

    /// Builds a store from `KEY=VALUE` overrides.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidOverride`] for the first malformed entry.
    pub fn from_overrides<I, S>(overrides: I) -> Result<Self, PropertyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut properties = Self::new();
        properties.apply_overrides(overrides)?;
        Ok(properties)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Sets a property, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn to_map(&self) -> ConfigMap {
        self.values.clone()
    }

    /// Adds every property of `other` whose key is not already set here.
    pub fn extend_missing(&mut self, other: Self) {
        for (key, value) in other.values {
            self.values.entry(key).or_insert(value);
        }
    }

    /// Applies `KEY=VALUE` overrides in order; later entries win.
    ///
    /// The value may be empty and may itself contain `=`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidOverride`] if an entry has no `=` or an
    /// empty key. Entries before the malformed one stay applied.
    pub fn apply_overrides<I, S>(&mut self, overrides: I) -> Result<(), PropertyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for option in overrides {
            let option = option.as_ref();
            match option.split_once('=') {
                Some((key, value)) if !key.is_empty() => {
                    self.set(key, value);
                }
                _ => {
                    return Err(PropertyError::InvalidOverride {
                        option: option.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl FromIterator<(String, String)> for Properties {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
