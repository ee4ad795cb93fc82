// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `dir` command.

use crate::core::boot::Boot;
use crate::core::env::EnvProvider;
use crate::error::Result;

/// Print the boot directory.
///
/// # Errors
///
/// Returns an error if the boot directory cannot be resolved.
pub fn run_dir_command<E: EnvProvider>(boot: &Boot<E>) -> Result<()> {
    println!("{}", format_dir(boot)?);
    Ok(())
}

/// Formats the boot directory for display.
///
/// # Errors
///
/// Returns an error if the boot directory cannot be resolved.
pub fn format_dir<E: EnvProvider>(boot: &Boot<E>) -> Result<String> {
    Ok(boot.boot_dir()?.display().to_string())
}
