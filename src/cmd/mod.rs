// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> load_boot() --> cmd::run_* handlers
//!   config, dir, host
//!
//! load_boot():
//!   --set overrides --> Properties
//!   boot_dir()      --> <boot dir>/boot.toml, ./boot.toml layered underneath
//! ```

pub mod config;
pub mod dir;
pub mod host;


use std::path::Path;

use tracing::warn;

use crate::cli::global::GlobalOptions;
use crate::config::layer_property_files;
use crate::core::boot::Boot;
use crate::core::env::EnvProvider;
use crate::core::properties::Properties;
use crate::error::Result;

/// Builds the accessor for a command run.
///
/// `--set` properties are applied first so that a `BOOT_HOME` property
/// chooses which boot directory property file is read. If the boot directory
/// cannot be resolved only the working directory file is read.
///
/// # Errors
///
/// Returns an error if a `--set` entry is malformed or a property file is
/// invalid.
pub fn load_boot<E: EnvProvider>(env: E, global: &GlobalOptions, cwd: &Path) -> Result<Boot<E>> {
    let properties = Properties::from_overrides(&global.properties)?;
    let mut boot = Boot::with_properties(env, properties);

    if !global.no_property_files {
        let boot_dir = match boot.boot_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                warn!(error = %e, "skipping boot directory property file");
                None
            }
        };
        layer_property_files(boot.properties_mut(), boot_dir.as_deref(), cwd)?;
    }

    Ok(boot)
}
