// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing and command output.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use boot_rs::cli::{Command, try_parse_from};
use boot_rs::cmd::config::format_config;
use boot_rs::cmd::load_boot;
use boot_rs::core::env::FixedEnv;
use std::path::Path;

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn cli_no_command() {
    let cli = try_parse_from(["boot"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_unknown_command_rejected() {
    assert!(try_parse_from(["boot", "build"]).is_err());
}

#[test]
fn cli_config_json_all() {
    let cli = try_parse_from(["boot", "config", "--json"]).unwrap();
    let Some(Command::Config(args)) = cli.command else {
        panic!("expected config command");
    };
    assert!(args.key.is_none());
    assert!(args.json);
}

// =============================================================================
// End to end with a fixed environment
// =============================================================================

#[test]
fn cli_config_default_flows_into_properties() {
    let cwd = tempfile::tempdir().unwrap();
    let cli = try_parse_from([
        "boot",
        "--no-property-files",
        "config",
        "BOOT_CLOJURE_VERSION",
        "--default",
        "1.10.1",
    ])
    .unwrap();
    let Some(Command::Config(args)) = &cli.command else {
        panic!("expected config command");
    };

    let mut boot = load_boot(FixedEnv::default(), &cli.global, cwd.path()).unwrap();
    let lines = format_config(args, &mut boot).unwrap();

    assert_eq!(lines, vec!["1.10.1"]);
    assert_eq!(boot.properties().get("BOOT_CLOJURE_VERSION"), Some("1.10.1"));
}

#[test]
fn cli_set_boot_home_resolves_dir() {
    let cwd = tempfile::tempdir().unwrap();
    let cli = try_parse_from(["boot", "-s", "BOOT_HOME=/opt/boot", "dir"]).unwrap();

    let boot = load_boot(FixedEnv::default(), &cli.global, cwd.path()).unwrap();
    assert_eq!(boot.boot_dir().unwrap(), Path::new("/opt/boot"));
}
