// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `config` command.

use std::collections::BTreeMap;

use anyhow::anyhow;

use crate::cli::config::ConfigArgs;
use crate::core::boot::Boot;
use crate::core::env::EnvProvider;
use crate::error::Result;

/// Run the config command.
///
/// # Errors
///
/// Returns an error if a requested key is not set and no default was given.
pub fn run_config_command<E: EnvProvider>(args: &ConfigArgs, boot: &mut Boot<E>) -> Result<()> {
    for line in format_config(args, boot)? {
        println!("{line}");
    }
    Ok(())
}

/// Formats the output of the config command.
///
/// With `--default`, a missing key is recorded as a property on `boot`.
///
/// # Errors
///
/// Returns an error if a requested key is not set and no default was given.
pub fn format_config<E: EnvProvider>(args: &ConfigArgs, boot: &mut Boot<E>) -> Result<Vec<String>> {
    let entries = match (&args.key, &args.default) {
        (None, _) => boot.config(),
        (Some(key), Some(default)) => {
            let value = boot.get_or_default(key, default.as_str());
            BTreeMap::from([(key.clone(), value)])
        }
        (Some(key), None) => {
            let value = boot.get(key).ok_or_else(|| anyhow!("{key} is not set"))?;
            BTreeMap::from([(key.clone(), value)])
        }
    };

    if args.json {
        return Ok(vec![serde_json::to_string_pretty(&entries)?]);
    }

    Ok(match &args.key {
        Some(_) => entries.into_values().collect(),
        None => entries
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect(),
    })
}
