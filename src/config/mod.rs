// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Property file configuration.
//!
//! # Property Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. <boot_dir>/boot.toml
//! 2. ./boot.toml (cwd)
//! 3. --set KEY=VALUE
//! ```
//!
//! # File Format
//!
//! ```toml
//! # flat table, scalars only
//! boot_version = "2.8.3"
//! boot_clojure_version = "1.10.1"
//! boot_emit_target = false
//! ```

pub mod loader;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use crate::core::properties::Properties;
use crate::error::Result;

use loader::PropertyLoader;

/// File name of a property file.
pub const PROPERTY_FILE_NAME: &str = "boot.toml";

/// Returns the property files to consult, lowest priority first.
///
/// Without a boot directory only the working directory file is consulted. The
/// working directory file is skipped when it is the boot directory file.
#[must_use]
pub fn property_file_paths(boot_dir: Option<&Path>, cwd: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = boot_dir
        .map(|dir| dir.join(PROPERTY_FILE_NAME))
        .into_iter()
        .collect();
    let local = cwd.join(PROPERTY_FILE_NAME);
    if !paths.contains(&local) {
        paths.push(local);
    }
    paths
}

/// Builds a loader over the optional property files for `boot_dir` and `cwd`.
#[must_use]
pub fn default_loader(boot_dir: Option<&Path>, cwd: &Path) -> PropertyLoader {
    let mut loader = PropertyLoader::new();
    for path in property_file_paths(boot_dir, cwd) {
        loader = loader.add_toml_file_optional(path);
    }
    loader
}

/// Layers the property files for `boot_dir` and `cwd` underneath `properties`.
///
/// Keys already present in `properties` keep their values.
///
/// # Errors
///
/// Returns an error if an existing property file is not valid TOML or holds
/// a non-scalar value.
pub fn layer_property_files(
    properties: &mut Properties,
    boot_dir: Option<&Path>,
    cwd: &Path,
) -> Result<()> {
    let from_files = default_loader(boot_dir, cwd).build()?;
    properties.extend_missing(from_files);
    Ok(())
}
