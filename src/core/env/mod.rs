// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment providers.
//!
//! # Architecture
//!
//! ```text
//! EnvProvider (trait)
//!   vars()      full variable snapshot
//!   var(key)    single lookup
//!   home_dir()  user home directory
//!   os_name()   platform name ("Linux", "Mac OS X", "Windows")
//!
//! SystemEnv   std::env + home crate
//! FixedEnv    deterministic fake (builder)
//! ```
//!
//! Everything that reads process state goes through a provider so that
//! callers can substitute a fake without touching the real environment.

pub mod fixed;
pub mod system;


use std::path::PathBuf;

use super::ConfigMap;

pub use fixed::FixedEnv;
pub use system::SystemEnv;

/// Source of environment variables and host information.
pub trait EnvProvider {
    /// Returns a snapshot of all environment variables.
    fn vars(&self) -> ConfigMap;

    /// Returns a single environment variable.
    fn var(&self, key: &str) -> Option<String> {
        self.vars().remove(key)
    }

    /// Returns the current user's home directory, if the platform reports one.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Returns the platform name of the host operating system.
    fn os_name(&self) -> String;
}

impl<T: EnvProvider + ?Sized> EnvProvider for &T {
    fn vars(&self) -> ConfigMap {
        (**self).vars()
    }

    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        (**self).home_dir()
    }

    fn os_name(&self) -> String {
        (**self).os_name()
    }
}

/// Returns true if `os_name` names a Windows platform.
///
/// Matches any name containing `win` case-insensitively, so `Windows 10`
/// and `WIN32` both qualify.
#[must_use]
pub fn is_windows_os_name(os_name: &str) -> bool {
    os_name.to_lowercase().contains("win")
}

/// Maps a Rust target OS identifier to its conventional platform name.
#[must_use]
pub fn os_display_name(target_os: &str) -> &str {
    match target_os {
        "windows" => "Windows",
        "macos" => "Mac OS X",
        "linux" => "Linux",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        other => other,
    }
}
