// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `config` and `host` commands.

use clap::Args;

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// Key to look up; prints every entry when omitted.
    #[arg(value_name = "KEY")]
    pub key: Option<String>,

    /// Value to use (and record as a property) when KEY is not set.
    #[arg(short = 'D', long = "default", value_name = "VALUE", requires = "key")]
    pub default: Option<String>,

    /// Prints JSON instead of KEY=VALUE lines.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `host` command.
#[derive(Debug, Clone, Default, Args)]
pub struct HostArgs {
    /// Prints JSON instead of text.
    #[arg(long)]
    pub json: bool,
}
