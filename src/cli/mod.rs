// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for boot-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! boot [global options] <command>
//! config [KEY] [--default VALUE] [--json]
//! dir
//! host [--json]
//! version
//! ```

pub mod config;
pub mod global;


use crate::cli::config::{ConfigArgs, HostArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Boot Bootstrap Environment
///
/// Resolves the configuration, boot directory and host platform used to
/// bootstrap the build tool.
#[derive(Debug, Parser)]
#[command(
    name = "boot",
    author,
    version,
    about = "Boot bootstrap environment",
    long_about = "boot-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Prints the bootstrap configuration: environment variables with\n\
                  BOOT_COLOR forced to true, the boot directory and the host\n\
                  platform. See `boot <command> --help` for more information.",
    after_help = "BOOT DIRECTORY:\n\n\
                  The boot directory is the BOOT_HOME property (see --set), else\n\
                  the BOOT_HOME environment variable, else ~/.boot.\n\n\
                  PROPERTY FILES:\n\n\
                  Properties are read from boot.toml in the boot directory and\n\
                  from boot.toml in the current directory, the latter taking\n\
                  precedence. Values given with --set override both. Use\n\
                  --no-property-files to only use --set."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Prints the configuration, or a single value.
    Config(ConfigArgs),

    /// Prints the boot directory.
    Dir,

    /// Prints the host platform.
    Host(HostArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Tries to parse command-line arguments from an iterator.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
