// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::PropertyLoader;
use super::{PROPERTY_FILE_NAME, layer_property_files, property_file_paths};
use crate::core::properties::Properties;
use crate::error::PropertyError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_load_scalars_as_strings() {
    let props = PropertyLoader::new()
        .add_toml_str(
            r#"
version = "2.8.3"
retries = 3
ratio = 0.5
emit = false
"#,
        )
        .build()
        .unwrap();

    insta::assert_debug_snapshot!(props.to_map(), @r#"
    {
        "emit": "false",
        "ratio": "0.5",
        "retries": "3",
        "version": "2.8.3",
    }
    "#);
}

#[test]
fn test_later_sources_override() {
    let props = PropertyLoader::new()
        .add_toml_str("version = \"1\"\nkeep = \"yes\"")
        .add_toml_str("version = \"2\"")
        .build()
        .unwrap();

    assert_eq!(props.get("version"), Some("2"));
    assert_eq!(props.get("keep"), Some("yes"));
}

#[test]
fn test_nested_table_rejected() {
    let err = PropertyLoader::new()
        .add_toml_str("[nested]\nkey = \"value\"")
        .build()
        .unwrap_err();

    let err = err.downcast::<PropertyError>().unwrap();
    assert!(matches!(err, PropertyError::NotScalar { ref key } if key == "nested"));
}

#[test]
fn test_invalid_toml_rejected() {
    let err = PropertyLoader::new()
        .add_toml_str("not toml at all = = =")
        .build()
        .unwrap_err();
    assert!(matches!(
        err.downcast::<PropertyError>().unwrap(),
        PropertyError::Load(_)
    ));
}

#[test]
fn test_required_file_missing() {
    let temp = temp_dir();
    let result = PropertyLoader::new()
        .add_toml_file(temp.path().join("absent.toml"))
        .build();
    assert!(result.is_err());
}

#[test]
fn test_optional_file_missing_is_empty() {
    let temp = temp_dir();
    let loader = PropertyLoader::new()
        .add_toml_file_optional(temp.path().join("absent.toml"));
    assert!(loader.loaded_files().is_empty());
    assert!(loader.build().unwrap().is_empty());
}

#[test]
fn test_format_loaded_files() {
    let temp = temp_dir();
    let path = temp.path().join(PROPERTY_FILE_NAME);
    std::fs::write(&path, "version = \"2.8.3\"").unwrap();

    let loader = PropertyLoader::new()
        .add_toml_file(&path)
        .add_toml_str("other = \"x\"");
    let lines = loader.format_loaded_files();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("1. [file] {}", path.display()));
    assert_eq!(lines[1], "2. [string] <string>");
}

#[test]
fn test_property_file_paths() {
    let paths = property_file_paths(Some(Path::new("/home/u/.boot")), Path::new("/work"));
    assert_eq!(
        paths,
        vec![
            PathBuf::from("/home/u/.boot/boot.toml"),
            PathBuf::from("/work/boot.toml"),
        ]
    );

    let same = property_file_paths(Some(Path::new("/work")), Path::new("/work"));
    assert_eq!(same, vec![PathBuf::from("/work/boot.toml")]);

    let no_boot_dir = property_file_paths(None, Path::new("/work"));
    assert_eq!(no_boot_dir, vec![PathBuf::from("/work/boot.toml")]);
}

#[test]
fn test_layer_property_files() {
    let boot_dir = temp_dir();
    let cwd = temp_dir();
    std::fs::write(
        boot_dir.path().join(PROPERTY_FILE_NAME),
        "version = \"from-boot-dir\"\nmirror = \"central\"\nextra = \"boot\"",
    )
    .unwrap();
    std::fs::write(
        cwd.path().join(PROPERTY_FILE_NAME),
        "version = \"from-cwd\"\nextra = \"cwd\"",
    )
    .unwrap();

    let mut props = Properties::from_overrides(["extra=cli"]).unwrap();
    layer_property_files(&mut props, Some(boot_dir.path()), cwd.path()).unwrap();

    insta::assert_debug_snapshot!(props.to_map(), @r#"
    {
        "extra": "cli",
        "mirror": "central",
        "version": "from-cwd",
    }
    "#);
}
