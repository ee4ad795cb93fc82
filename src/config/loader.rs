// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Property loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! PropertyLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!        |
//!        v
//!    build() --> Properties (scalars as strings)
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Value, ValueKind};
use tracing::debug;

use crate::core::properties::Properties;
use crate::error::{PropertyError, Result};

/// Builder for loading properties from multiple sources.
///
/// Later sources override earlier ones.
pub struct PropertyLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    files: Vec<(String, PathBuf)>,
}

impl PropertyLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            files: Vec::new(),
        }
    }

    /// Adds a TOML property file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Builds the property store from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required property files are missing.
    /// - Property files have invalid TOML syntax.
    /// - A value is a table or an array.
    pub fn build(self) -> Result<Properties> {
        let cfg = self.builder.build().map_err(PropertyError::Load)?;
        let table: HashMap<String, Value> = cfg.try_deserialize().map_err(PropertyError::Load)?;

        let properties = table
            .into_iter()
            .map(|(key, value)| scalar_to_string(key, value))
            .collect::<std::result::Result<Properties, PropertyError>>()?;
        debug!(
            count = properties.len(),
            sources = self.files.len(),
            "loaded property files"
        );
        Ok(properties)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

impl Default for PropertyLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn scalar_to_string(
    key: String,
    value: Value,
) -> std::result::Result<(String, String), PropertyError> {
    match value.kind {
        ValueKind::Table(_) | ValueKind::Array(_) => Err(PropertyError::NotScalar { key }),
        _ => {
            let value = value.into_string().map_err(PropertyError::Load)?;
            Ok((key, value))
        }
    }
}
