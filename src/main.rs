// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> load_boot() --> Command Dispatch
//!   Version | Config | Dir | Host
//! ```

use std::process::ExitCode;

use anyhow::Context;
use boot_rs::cli::global::GlobalOptions;
use boot_rs::cli::{self, Command};
use boot_rs::cmd::config::run_config_command;
use boot_rs::cmd::dir::run_dir_command;
use boot_rs::cmd::host::run_host_command;
use boot_rs::cmd::load_boot;
use boot_rs::core::boot::Boot;
use boot_rs::core::env::SystemEnv;
use boot_rs::logging::{BOOT_LOG_LEVEL, LogConfig, init_logging};

use mimalloc::MiMalloc;
use tracing::warn;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let env_boot = Boot::system();
    let log_config = LogConfig::from_global(&cli.global, &env_boot);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(e) = LogConfig::env_level_error(&cli.global, &env_boot) {
        warn!("Ignoring {BOOT_LOG_LEVEL}: {e}");
    }

    dispatch_command(&cli)
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_command(cli: &cli::Cli) -> boot_rs::error::Result<()> {
    match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Config(args)) => {
            let mut boot = load_system_boot(&cli.global)?;
            run_config_command(args, &mut boot)
        }
        Some(Command::Dir) => run_dir_command(&load_system_boot(&cli.global)?),
        Some(Command::Host(args)) => run_host_command(args, &load_system_boot(&cli.global)?),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn load_system_boot(global: &GlobalOptions) -> boot_rs::error::Result<Boot<SystemEnv>> {
    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    load_boot(SystemEnv, global, &cwd)
}
