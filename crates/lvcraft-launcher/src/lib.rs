//! lvcraft-launcher library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`,
//! the native binary in `main.rs`, and the `wasm32` exports share the same
//! module tree.
//!
//! # What does the launcher do?
//!
//! The LVCraft Designer previews a screen by loading this module into a
//! webview.  On startup the launcher:
//!
//! 1. Works out the display resolution from `argv`, the host canvas, or a
//!    320x240 default.
//! 2. Creates the display and one input group holding a pointer, a wheel and
//!    a keyboard device.
//! 3. Asks the host whether it will build the UI from its own layout.  If
//!    not, it runs the requested built-in demo (or the default one).
//! 4. Hands back a frame pump whose `tick` the host calls once per frame.
//!
//! The GUI toolkit and the host are reached only through the
//! [`GuiToolkit`](application::toolkit::GuiToolkit) and
//! [`HostBridge`](application::host::HostBridge) traits.

/// Application layer: startup sequence, frame pump, and the trait seams.
pub mod application;

/// Infrastructure layer: host adapters, headless toolkit, demos, config.
pub mod infrastructure;

/// Browser exports (`lvcraft_start`, `lvcraft_tick`, ...).
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use application::bootstrap::{
    initialize_platform, DemoFn, LaunchError, LaunchReport, Launched, LaunchedDemo, Launcher,
    PlatformHandles,
};
pub use application::frame_pump::FramePump;
pub use application::host::HostBridge;
pub use application::toolkit::{GuiToolkit, InputDeviceKind, ToolkitError};
