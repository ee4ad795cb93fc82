// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the boot configuration accessor.

use super::{BOOT_COLOR, BOOT_HOME, Boot, clojure_name};
use crate::core::ConfigMap;
use crate::core::env::{EnvProvider, FixedEnv};
use crate::core::properties::Properties;
use crate::error::BootError;
use std::path::PathBuf;

/// Mimics a platform whose single-variable lookup ignores case.
struct CaseInsensitiveEnv(FixedEnv);

impl EnvProvider for CaseInsensitiveEnv {
    fn vars(&self) -> ConfigMap {
        self.0.vars()
    }

    fn var(&self, key: &str) -> Option<String> {
        self.0
            .vars()
            .into_iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.0.home_dir()
    }

    fn os_name(&self) -> String {
        self.0.os_name()
    }
}

fn env_with(vars: &[(&str, &str)]) -> FixedEnv {
    vars.iter()
        .fold(FixedEnv::default(), |env, (k, v)| env.with_var(*k, *v))
}

#[test]
fn test_config_always_has_boot_color() {
    let empty = Boot::new(FixedEnv::default());
    assert_eq!(empty.config().get(BOOT_COLOR).map(String::as_str), Some("true"));
    assert_eq!(empty.config().len(), 1);

    let overridden = Boot::new(env_with(&[("BOOT_COLOR", "false")]));
    assert_eq!(
        overridden.config().get(BOOT_COLOR).map(String::as_str),
        Some("true"),
        "the fixed entry overwrites the environment"
    );
}

#[test]
fn test_config_mirrors_environment() {
    let boot = Boot::new(env_with(&[
        ("PATH", "/usr/bin"),
        ("BOOT_JVM_OPTIONS", "-Xmx2g"),
        ("lower", "case"),
    ]));

    insta::assert_debug_snapshot!(boot.config(), @r#"
    {
        "BOOT_COLOR": "true",
        "BOOT_JVM_OPTIONS": "-Xmx2g",
        "PATH": "/usr/bin",
        "lower": "case",
    }
    "#);
}

#[test]
fn test_config_is_a_fresh_snapshot() {
    let boot = Boot::new(FixedEnv::default().with_var("A", "1"));
    let mut snapshot = boot.config();
    snapshot.insert("A".to_string(), "mutated".to_string());

    assert_eq!(boot.get("A").as_deref(), Some("1"));
}

#[test]
fn test_get() {
    let boot = Boot::new(env_with(&[("BOOT_VERSION", "2.8.3"), ("BOOT_COLOR", "no")]));

    assert_eq!(boot.get("BOOT_VERSION").as_deref(), Some("2.8.3"));
    assert_eq!(boot.get("BOOT_COLOR").as_deref(), Some("true"));
    assert_eq!(boot.get("boot_version"), None);
    assert_eq!(boot.get("MISSING"), None);
}

#[test]
fn test_get_matches_snapshot_keys_exactly() {
    let env = CaseInsensitiveEnv(FixedEnv::default().with_var("Path", "C:\\bin"));
    let mut boot = Boot::new(env);

    assert!(!boot.config().contains_key("PATH"));
    assert_eq!(boot.get("PATH"), None);
    assert_eq!(boot.get("Path").as_deref(), Some("C:\\bin"));

    assert_eq!(boot.get_or_default("PATH", "/usr/bin"), "/usr/bin");
    assert_eq!(boot.properties().get("PATH"), Some("/usr/bin"));
}

#[test]
fn test_boot_dir_uses_provider_lookup() {
    let boot = Boot::new(CaseInsensitiveEnv(
        FixedEnv::default().with_var("Boot_Home", "/from/env"),
    ));

    assert_eq!(boot.get(BOOT_HOME), None);
    assert_eq!(boot.boot_dir().unwrap(), PathBuf::from("/from/env"));
}

#[test]
fn test_get_or_default_prefers_environment() {
    let mut boot = Boot::new(env_with(&[("BOOT_VERSION", "2.8.3")]));

    assert_eq!(boot.get_or_default("BOOT_VERSION", "2.7.2"), "2.8.3");
    assert!(
        boot.properties().is_empty(),
        "no property is recorded when the key is set"
    );
}

#[test]
fn test_get_or_default_records_property() {
    let mut boot = Boot::new(FixedEnv::default());

    assert_eq!(boot.get_or_default("BOOT_CLOJURE_VERSION", "1.10.1"), "1.10.1");
    assert_eq!(boot.properties().get("BOOT_CLOJURE_VERSION"), Some("1.10.1"));

    // The recorded property does not appear in later snapshots
    assert!(!boot.config().contains_key("BOOT_CLOJURE_VERSION"));
    assert_eq!(boot.get("BOOT_CLOJURE_VERSION"), None);

    // A different default is returned and overwrites the property
    assert_eq!(boot.get_or_default("BOOT_CLOJURE_VERSION", "1.11.0"), "1.11.0");
    assert_eq!(boot.properties().get("BOOT_CLOJURE_VERSION"), Some("1.11.0"));
}

#[test]
fn test_get_or_default_boot_color() {
    let mut boot = Boot::new(FixedEnv::default());
    assert_eq!(boot.get_or_default(BOOT_COLOR, "false"), "true");
    assert!(boot.properties().is_empty());
}

#[test]
fn test_boot_dir_property_wins() {
    let env = FixedEnv::builder()
        .with_home_dir("/home/u")
        .build()
        .with_var(BOOT_HOME, "/from/env");
    let props = Properties::from_overrides(["BOOT_HOME=/from/property"]).unwrap();
    let boot = Boot::with_properties(env, props);

    assert_eq!(boot.boot_dir().unwrap(), PathBuf::from("/from/property"));
}

#[test]
fn test_boot_dir_env_second() {
    let env = FixedEnv::builder()
        .with_home_dir("/home/u")
        .build()
        .with_var(BOOT_HOME, "/from/env");
    let boot = Boot::new(env);

    assert_eq!(boot.boot_dir().unwrap(), PathBuf::from("/from/env"));
}

#[test]
fn test_boot_dir_values_are_not_canonicalized() {
    let boot = Boot::new(FixedEnv::default().with_var(BOOT_HOME, "relative/../boot"));
    assert_eq!(boot.boot_dir().unwrap(), PathBuf::from("relative/../boot"));
}

#[test]
#[cfg(target_os = "linux")]
fn test_boot_dir_defaults_to_home() {
    let boot = Boot::new(FixedEnv::builder().with_home_dir("/home/u").build());
    assert_eq!(boot.boot_dir().unwrap(), PathBuf::from("/home/u/.boot"));
}

#[test]
fn test_boot_dir_default_is_canonical() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path().join("user");
    std::fs::create_dir(&home).unwrap();

    let boot = Boot::new(
        FixedEnv::builder()
            .with_home_dir(home.join("..").join("user"))
            .build(),
    );
    let expected = std::fs::canonicalize(&home).unwrap().join(".boot");

    assert_eq!(boot.boot_dir().unwrap(), expected);
    assert!(!expected.exists(), "boot_dir must not create the directory");
}

#[test]
fn test_boot_dir_without_home() {
    let boot = Boot::new(FixedEnv::default());
    assert!(matches!(boot.boot_dir(), Err(BootError::HomeNotFound)));
}

#[test]
fn test_is_windows_host() {
    let cases = [
        ("Windows 10", true),
        ("WIN32", true),
        ("Linux", false),
        ("Mac OS X", false),
    ];
    for (os_name, expected) in cases {
        let boot = Boot::new(FixedEnv::builder().with_os_name(os_name).build());
        assert_eq!(boot.is_windows_host(), expected, "os name {os_name:?}");
    }
}

#[test]
fn test_clojure_name() {
    assert_eq!(clojure_name(), "clojure");
}

#[test]
fn test_system_accessor() {
    let boot = Boot::system();
    assert_eq!(boot.get(BOOT_COLOR).as_deref(), Some("true"));
    assert_eq!(boot.is_windows_host(), cfg!(windows));
}
