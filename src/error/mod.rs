// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          BootError (~32 bytes)
//!                 |
//!     +-----------+-----------+
//!     |           |           |
//!     v           v           v
//!   Home      Canonical    Property
//!             (path, io)     Box
//!
//! Sub-errors (unboxed internally):
//!   Property  InvalidOverride, InvalidValue, NotScalar, Load
//! ```

use std::path::Path;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`BootError`].
pub type BootResult<T> = std::result::Result<T, BootError>;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum BootError {
    /// The platform did not report a home directory for the current user.
    #[error("could not determine the user home directory")]
    HomeNotFound,

    /// The default boot directory could not be canonicalized.
    #[error("failed to canonicalize '{}': {source}", .path.display())]
    Canonicalize {
        path: Box<Path>,
        #[source]
        source: std::io::Error,
    },

    /// Property store error.
    #[error("property error: {0}")]
    Property(#[from] Box<PropertyError>),
}

impl From<PropertyError> for BootError {
    fn from(err: PropertyError) -> Self {
        Self::Property(Box::new(err))
    }
}

// --- Property Errors ---

/// Errors raised while building a property store.
#[derive(Debug, Error)]
pub enum PropertyError {
    /// A `KEY=VALUE` override was malformed.
    #[error("invalid property override '{option}': expected KEY=VALUE")]
    InvalidOverride { option: String },

    /// A property value was out of range or malformed.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// A property file held a table or array where a scalar was expected.
    #[error("property '{key}' must be a string, number or boolean")]
    NotScalar { key: String },

    /// A property file could not be read or parsed.
    #[error("failed to load property files: {0}")]
    Load(#[from] config::ConfigError),
}
