// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Canonical paths for directories that may not exist yet.

use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::error::{BootError, BootResult};

/// Returns the canonical form of `path` without requiring it to exist.
///
/// The path is made absolute and `.`/`..` are folded. The longest existing
/// ancestor is then resolved through the filesystem (following symlinks) and
/// the missing components are appended unchanged.
///
/// # Errors
///
/// Returns [`BootError::Canonicalize`] if the working directory is needed and
/// unavailable, or if resolving an existing ancestor fails for any reason
/// other than it not existing.
pub fn canonicalize_lenient(path: &Path) -> BootResult<PathBuf> {
    let absolute = std::path::absolute(path).map_err(|source| BootError::Canonicalize {
        path: path.into(),
        source,
    })?;
    let normalized = normalize_lexically(&absolute);

    let mut existing = normalized.as_path();
    let mut missing: Vec<&OsStr> = Vec::new();
    loop {
        match std::fs::canonicalize(existing) {
            Ok(resolved) => {
                return Ok(missing
                    .iter()
                    .rev()
                    .fold(resolved, |acc, name| acc.join(name)));
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                match (existing.parent(), existing.file_name()) {
                    (Some(parent), Some(name)) => {
                        missing.push(name);
                        existing = parent;
                    }
                    // Nothing on disk, not even the root
                    _ => return Ok(normalized.clone()),
                }
            }
            Err(source) => {
                return Err(BootError::Canonicalize {
                    path: path.into(),
                    source,
                });
            }
        }
    }
}

/// Folds `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root.
#[must_use]
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}
