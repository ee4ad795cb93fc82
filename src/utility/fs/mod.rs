// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem path utilities.
//!
//! ```text
//! canonical:  canonicalize_lenient()  absolute + symlinks resolved,
//!                                     missing tail kept lexically
//!             normalize_lexically()   fold "." and ".." without I/O
//! ```

pub mod canonical;
