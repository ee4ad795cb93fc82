// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment access and boot configuration.
//!
//! ```text
//!              core
//!               |
//!     +---------+---------+
//!     |         |         |
//!     v         v         v
//!    env    properties   boot
//!     |         |         |
//! EnvProvider Properties Boot<E>
//! SystemEnv   overrides  config / get / get_or_default
//! FixedEnv    layering   boot_dir / is_windows_host
//! ```

pub mod boot;
pub mod env;
pub mod properties;

use std::collections::BTreeMap;

/// Flat string-to-string configuration snapshot, ordered by key.
pub type ConfigMap = BTreeMap<String, String>;
