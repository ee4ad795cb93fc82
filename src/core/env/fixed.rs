// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Deterministic provider for tests and embedding.
//!
//! ```text
//! FixedEnv::builder()
//!   .with_vars(map)        default: empty
//!   .with_home_dir(path)   default: none
//!   .with_os_name(name)    default: "Linux"
//!   .build()
//!   .with_var("K", "V")    chainable after build
//! ```

use std::path::PathBuf;

use bon::Builder;

use super::EnvProvider;
use crate::core::ConfigMap;

/// An environment with fixed contents.
#[derive(Debug, Clone, Builder)]
pub struct FixedEnv {
    #[builder(setters(name = with_vars), default)]
    vars: ConfigMap,
    #[builder(setters(name = with_home_dir), into)]
    home_dir: Option<PathBuf>,
    #[builder(setters(name = with_os_name), into, default = String::from("Linux"))]
    os_name: String,
}

impl Default for FixedEnv {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl FixedEnv {
    /// Returns this environment with one more variable set.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_var(key, value);
        self
    }

    /// Sets a variable, replacing any previous value.
    pub fn set_var(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Removes a variable.
    pub fn remove_var(&mut self, key: &str) -> &mut Self {
        self.vars.remove(key);
        self
    }
}

impl EnvProvider for FixedEnv {
    fn vars(&self) -> ConfigMap {
        self.vars.clone()
    }

    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir.clone()
    }

    fn os_name(&self) -> String {
        self.os_name.clone()
    }
}
