// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Provider backed by the running process.

use std::ffi::OsString;
use std::path::PathBuf;

use tracing::debug;

use super::{EnvProvider, os_display_name};
use crate::core::ConfigMap;

/// Reads the real process environment.
///
/// Variables whose name or value is not valid Unicode are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn vars(&self) -> ConfigMap {
        std::env::vars_os().filter_map(unicode_var).collect()
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        home::home_dir().filter(|p| !p.as_os_str().is_empty())
    }

    fn os_name(&self) -> String {
        os_display_name(std::env::consts::OS).to_string()
    }
}

fn unicode_var((key, value): (OsString, OsString)) -> Option<(String, String)> {
    match (key.into_string(), value.into_string()) {
        (Ok(key), Ok(value)) => Some((key, value)),
        (key, _) => {
            debug!(?key, "skipping non-unicode environment variable");
            None
        }
    }
}
