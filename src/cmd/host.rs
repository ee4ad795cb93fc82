// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `host` command.

use serde::Serialize;

use crate::cli::config::HostArgs;
use crate::core::boot::{Boot, clojure_name};
use crate::core::env::EnvProvider;
use crate::error::Result;

/// Host platform as reported by the `host` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostInfo {
    /// Operating system name reported by the environment provider.
    pub os_name: String,
    /// Whether `os_name` identifies a Windows host.
    pub windows: bool,
    /// Name of the runtime launched by the bootstrap.
    pub runtime: &'static str,
}

impl HostInfo {
    /// Collects the host information from `boot`'s environment provider.
    #[must_use]
    pub fn from_boot<E: EnvProvider>(boot: &Boot<E>) -> Self {
        Self {
            os_name: boot.env().os_name(),
            windows: boot.is_windows_host(),
            runtime: clojure_name(),
        }
    }

    /// Formats the host information as `key=value` lines.
    #[must_use]
    pub fn format_lines(&self) -> Vec<String> {
        vec![
            format!("os_name={}", self.os_name),
            format!("windows={}", self.windows),
            format!("runtime={}", self.runtime),
        ]
    }
}

/// Print the host platform.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run_host_command<E: EnvProvider>(args: &HostArgs, boot: &Boot<E>) -> Result<()> {
    let info = HostInfo::from_boot(boot);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        for line in info.format_lines() {
            println!("{line}");
        }
    }
    Ok(())
}
