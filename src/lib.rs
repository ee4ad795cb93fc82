// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |              config / dir / host
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  boot.toml property files |
//!              '-------------+-------------'
//!                            v
//!   +-----------------------------------------+
//!   |  core   Boot<E>, EnvProvider, Properties |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use boot_rs::core::boot::Boot;
//! use boot_rs::core::env::FixedEnv;
//!
//! let env = FixedEnv::builder().with_home_dir("/home/u").build();
//! let mut boot = Boot::new(env.with_var("BOOT_VERSION", "2.8.3"));
//!
//! assert_eq!(boot.get("BOOT_COLOR").as_deref(), Some("true"));
//! assert_eq!(boot.get_or_default("BOOT_VERSION", "2.7.2"), "2.8.3");
//! assert!(!boot.is_windows_host());
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod utility;
