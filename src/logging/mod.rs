// boot-rs: Boot Bootstrap Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging infrastructure using the `tracing` ecosystem.
//!
//! ```text
//! init_logging(&LogConfig)
//!        |
//!        v
//!    registry
//!    |       |
//!    v       v
//! stderr    File (optional)
//! EnvFilter EnvFilter
//! ANSI      non_blocking
//!           FmtSpan::CLOSE
//!        |
//!        v
//!    LogGuard (flush on drop)
//!
//! LogLevel:  0=OFF  1=ERROR  2=WARN  3=INFO
//!            4=DEBUG  5=TRACE  6=DUMP
//!
//! Console level:  --log-level > BOOT_LOG_LEVEL > info
//! File level:     --file-log-level > console level
//! Directive:      BOOT_LOG (EnvFilter syntax), unless --log-level is given;
//!                 replaces the console level
//! ```
//!
//! Console output goes to stderr so stdout only carries command output.

use anyhow::Context;
use bon::Builder;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::cli::global::GlobalOptions;
use crate::core::boot::Boot;
use crate::core::env::EnvProvider;
use crate::error::{PropertyError, Result};


/// Environment variable holding an `EnvFilter` directive for console logs.
pub const BOOT_LOG: &str = "BOOT_LOG";

/// Environment variable holding the default console log level.
pub const BOOT_LOG_LEVEL: &str = "BOOT_LOG_LEVEL";

/// Log level (0-6).
///
/// - 0: Silent - no output at all
/// - 1: Error - only errors
/// - 2: Warn - errors and warnings
/// - 3: Info - default, general information
/// - 4: Debug - applied defaults, loaded property files
/// - 5: Trace - which source resolved the boot directory
/// - 6: Dump - same filter as trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogLevel(u8);

impl Default for LogLevel {
    fn default() -> Self {
        Self::INFO
    }
}

impl LogLevel {
    pub const SILENT: Self = Self(0);
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);
    pub const TRACE: Self = Self(5);
    pub const DUMP: Self = Self(6);

    /// Create a new `LogLevel` from a u8 value (0-6).
    ///
    /// # Errors
    ///
    /// Returns a `PropertyError::InvalidValue` if the level is greater than 6.
    pub fn new(level: u8) -> std::result::Result<Self, PropertyError> {
        Self::from_u8(level).ok_or_else(|| PropertyError::InvalidValue {
            key: "log_level".to_string(),
            message: format!("log level must be 0-6, got {level}"),
        })
    }

    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Convert from u8 value, returning None if out of range.
    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        if level <= 6 { Some(Self(level)) } else { None }
    }

    /// Convert to `EnvFilter` directive string.
    #[must_use]
    pub const fn to_filter_string(self) -> &'static str {
        match self.0 {
            0 => "off",
            1 => "error",
            2 => "warn",
            3 => "info",
            4 => "debug",
            _ => "trace",
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = PropertyError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

/// Parses `0`-`6` or a level name (`off`, `error`, `warn`, `info`, `debug`,
/// `trace`, `dump`), case-insensitively.
impl FromStr for LogLevel {
    type Err = PropertyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(level) = s.parse::<u8>() {
            return Self::new(level);
        }
        match s.to_ascii_lowercase().as_str() {
            "off" | "silent" => Ok(Self::SILENT),
            "error" => Ok(Self::ERROR),
            "warn" | "warning" => Ok(Self::WARN),
            "info" => Ok(Self::INFO),
            "debug" => Ok(Self::DEBUG),
            "trace" => Ok(Self::TRACE),
            "dump" => Ok(Self::DUMP),
            _ => Err(PropertyError::InvalidValue {
                key: "log_level".to_string(),
                message: format!("unknown log level '{s}'"),
            }),
        }
    }
}

/// Configuration for the logging system.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::INFO)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::TRACE)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file), into)]
    log_file: Option<PathBuf>,
    #[builder(setters(name = with_directive), into)]
    directive: Option<String>,
    #[builder(setters(name = with_show_target), default = false)]
    show_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    /// Builds the configuration from command-line options and the
    /// environment seen through `boot`.
    ///
    /// An unparsable `BOOT_LOG_LEVEL` is ignored and the console level falls
    /// back to info; see [`LogConfig::env_level_error`].
    #[must_use]
    pub fn from_global<E: EnvProvider>(global: &GlobalOptions, boot: &Boot<E>) -> Self {
        let console_level = global
            .log_level
            .and_then(LogLevel::from_u8)
            .or_else(|| boot.get(BOOT_LOG_LEVEL)?.parse().ok())
            .unwrap_or(LogLevel::INFO);

        let file_level = global
            .file_log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(console_level);

        // An explicit --log-level beats the directive
        let directive = match global.log_level {
            Some(_) => None,
            None => boot.get(BOOT_LOG),
        };

        Self::builder()
            .with_console_level(console_level)
            .with_file_level(file_level)
            .maybe_with_log_file(global.log_file.clone())
            .maybe_with_directive(directive)
            .build()
    }

    /// Returns the parse error of a `BOOT_LOG_LEVEL` that
    /// [`LogConfig::from_global`] ignored.
    #[must_use]
    pub fn env_level_error<E: EnvProvider>(
        global: &GlobalOptions,
        boot: &Boot<E>,
    ) -> Option<PropertyError> {
        if global.log_level.is_some() {
            return None;
        }
        boot.get(BOOT_LOG_LEVEL)?.parse::<LogLevel>().err()
    }

    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Filter directive that replaces the console level, if set.
    #[must_use]
    pub fn directive(&self) -> Option<&str> {
        self.directive.as_deref()
    }

    /// Check if target (module path) should be shown in console output.
    #[must_use]
    pub const fn show_target(&self) -> bool {
        self.show_target
    }

    /// Builds the console filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the directive is not valid `EnvFilter` syntax.
    pub fn console_filter(&self) -> Result<EnvFilter> {
        match self.directive() {
            Some(directive) => EnvFilter::try_new(directive)
                .with_context(|| format!("invalid log directive '{directive}'")),
            None => Ok(EnvFilter::new(self.console_level.to_filter_string())),
        }
    }
}

/// RAII guard that keeps the logging system alive.
/// When dropped, flushes all pending log writes.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the logging system with the given configuration.
///
/// Returns a guard that must be kept alive for the duration of the program.
///
/// # Errors
///
/// Returns an error if the directive is invalid or the log directory or file
/// cannot be created.
///
/// # Example
///
/// ```no_run
/// use boot_rs::logging::{init_logging, LogConfig, LogLevel};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::WARN)
///     .with_file_level(LogLevel::DEBUG)
///     .with_log_file("boot.log")
///     .build();
///
/// let _guard = init_logging(&config).expect("Failed to initialize logging");
/// tracing::info!("Logging initialized");
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.show_target())
        .with_level(true)
        .with_ansi(true)
        .with_filter(config.console_filter()?);

    let (file_layer, file_guard) = if let Some(log_path) = config.log_file() {
        if let Some(parent) = log_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create log directory {}", parent.display()))?;
        }

        let file = std::fs::File::create(log_path)
            .with_context(|| format!("failed to create log file {}", log_path.display()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);

        let layer = fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_level(true)
            .with_ansi(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(EnvFilter::new(config.file_level().to_filter_string()));

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("a global logger is already installed")?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}
