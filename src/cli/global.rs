// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --set KEY=VAL     ← Property (can repeat), overrides boot.toml files
//! --log-level N     ← Console verbosity (0-6), overrides BOOT_LOG_LEVEL
//! --file-log-level  ← File verbosity (defaults to --log-level)
//! --log-file FILE   ← Also log to FILE
//! --no-property-files
//!
//! Precedence: --set > ./boot.toml > <boot dir>/boot.toml
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Sets a property, such as 'BOOT_HOME=/opt/boot'.
    /// Can be specified multiple times.
    #[arg(
        short = 's',
        long = "set",
        value_name = "KEY=VALUE",
        action = clap::ArgAction::Append,
        global = true
    )]
    pub properties: Vec<String>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Disables loading of boot.toml property files, only uses --set.
    #[arg(long = "no-property-files", global = true)]
    pub no_property_files: bool,
}
