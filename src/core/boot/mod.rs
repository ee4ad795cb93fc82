// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Boot configuration accessor.
//!
//! # Lookup Rules
//!
//! ```text
//! config()        env vars + BOOT_COLOR=true (override wins)
//! get(key)        config()[key]
//! get_or_default  config()[key], else record property key=default
//!
//! boot_dir() priority (first hit wins):
//!   1. property  BOOT_HOME
//!   2. env var   BOOT_HOME
//!   3. canonical <home>/.boot
//! ```
//!
//! Properties written by `get_or_default` are not part of `config()`; they
//! are visible through [`Boot::properties`].

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use tracing::{debug, trace};

use super::ConfigMap;
use super::env::{EnvProvider, SystemEnv, is_windows_os_name};
use super::properties::Properties;
use crate::error::{BootError, BootResult};
use crate::utility::fs::canonical::canonicalize_lenient;

/// Key of the color override forced into every configuration snapshot.
pub const BOOT_COLOR: &str = "BOOT_COLOR";

/// Value forced for [`BOOT_COLOR`].
pub const BOOT_COLOR_VALUE: &str = "true";

/// Property and environment variable naming the boot directory.
pub const BOOT_HOME: &str = "BOOT_HOME";

/// Name of the default boot directory under the user home.
pub const BOOT_DIR_NAME: &str = ".boot";

/// Name of the runtime launched by the bootstrap.
pub const CLOJURE_NAME: &str = "clojure";

/// Returns the name of the runtime launched by the bootstrap.
#[must_use]
pub const fn clojure_name() -> &'static str {
    CLOJURE_NAME
}

/// Configuration accessor over an environment provider and a property store.
#[derive(Debug, Clone, Default)]
pub struct Boot<E = SystemEnv> {
    env: E,
    properties: Properties,
}

impl Boot<SystemEnv> {
    /// Creates an accessor over the real process environment.
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl<E: EnvProvider> Boot<E> {
    /// Creates an accessor with an empty property store.
    #[must_use]
    pub fn new(env: E) -> Self {
        Self::with_properties(env, Properties::new())
    }

    #[must_use]
    pub const fn with_properties(env: E, properties: Properties) -> Self {
        Self { env, properties }
    }

    #[must_use]
    pub const fn env(&self) -> &E {
        &self.env
    }

    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }

    pub const fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    /// Returns all environment variables plus `BOOT_COLOR=true`.
    ///
    /// A fresh snapshot is taken on every call.
    #[must_use]
    pub fn config(&self) -> ConfigMap {
        let mut config = self.env.vars();
        config.insert(BOOT_COLOR.to_string(), BOOT_COLOR_VALUE.to_string());
        config
    }

    /// Returns the value of `key` in [`Boot::config`].
    ///
    /// Lookup is an exact key match against the snapshot, even where the
    /// platform treats variable names case-insensitively.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.config().remove(key)
    }

    /// Returns the value of `key`, or records `default` as a property and
    /// returns it.
    ///
    /// The recorded property does not show up in later [`Boot::config`]
    /// snapshots. A later call with a different default overwrites it.
    pub fn get_or_default(&mut self, key: &str, default: impl Into<String>) -> String {
        if let Some(value) = self.get(key) {
            return value;
        }
        let default = default.into();
        debug!(key, value = %default, "applying default property");
        self.properties.set(key, default.clone());
        default
    }

    /// Resolves the boot directory.
    ///
    /// The directory is neither checked for existence nor created.
    ///
    /// # Errors
    ///
    /// Returns [`BootError::HomeNotFound`] if neither `BOOT_HOME` source is set
    /// and the provider reports no home directory, or
    /// [`BootError::Canonicalize`] if `<home>/.boot` cannot be canonicalized.
    pub fn boot_dir(&self) -> BootResult<PathBuf> {
        if let Some(dir) = self.properties.get(BOOT_HOME) {
            trace!(dir, "boot directory from property");
            return Ok(PathBuf::from(dir));
        }

        if let Some(dir) = self.env.var(BOOT_HOME) {
            trace!(dir, "boot directory from environment");
            return Ok(PathBuf::from(dir));
        }

        let home = self.env.home_dir().ok_or(BootError::HomeNotFound)?;
        let dir = canonicalize_lenient(&home.join(BOOT_DIR_NAME))?;
        trace!(dir = %dir.display(), "boot directory from user home");
        Ok(dir)
    }

    /// Returns true if the host operating system is Windows.
    #[must_use]
    pub fn is_windows_host(&self) -> bool {
        is_windows_os_name(&self.env.os_name())
    }
}
