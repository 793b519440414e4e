//! TOML configuration for the native launcher.
//!
//! The browser build takes everything from the host; natively there is no
//! host, so the values it would provide (canvas size, layout) and the cadence
//! of the frame loop come from an optional file:
//!
//! ```toml
//! [host]
//! frame_interval_ms = 16
//! max_frames = 600
//! log_level = "debug"
//!
//! [preview]
//! layout = "layout.json"
//! canvas_width = 480
//! canvas_height = 320
//! ```
//!
//! Every field is optional.  A missing file yields [`LauncherConfig::default`];
//! a malformed one is an error.  Command-line flags override file values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error other than "not found".
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level launcher configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LauncherConfig {
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// Native host loop settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HostConfig {
    /// Milliseconds between frame pump ticks.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    /// Stop after this many ticks.  Absent means run until Ctrl-C.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_frames: Option<u64>,
    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Values a browser host would report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreviewConfig {
    /// Designer layout document; when usable, no built-in demo runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<PathBuf>,
    /// Reported canvas width; `0` means unknown.
    #[serde(default)]
    pub canvas_width: i32,
    /// Reported canvas height; `0` means unknown.
    #[serde(default)]
    pub canvas_height: i32,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_frame_interval_ms() -> u64 {
    16
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: default_frame_interval_ms(),
            max_frames: None,
            log_level: default_log_level(),
        }
    }
}

impl HostConfig {
    /// The tick period, never shorter than one millisecond.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Parses configuration from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the TOML is malformed.
pub fn parse_config(content: &str) -> Result<LauncherConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Loads configuration from `path`, returning the defaults if the file does
/// not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<LauncherConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(LauncherConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
