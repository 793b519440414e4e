//! Persistent settings for the native launcher.
//!
//! - **`config`** – TOML configuration: host loop cadence, log level, and the
//!   canvas size / layout a browser host would otherwise report.

pub mod config;

pub use config::{load_config, parse_config, ConfigError, HostConfig, LauncherConfig, PreviewConfig};
