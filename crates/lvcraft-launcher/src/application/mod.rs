//! Application layer for the launcher.
//!
//! - **`bootstrap`** – the startup sequence: resolve the resolution, bring up
//!   the platform, pick and run a demo (or defer to the host), and hand back
//!   a frame pump.
//! - **`frame_pump`** – the single-step `tick` the host calls repeatedly.
//! - **`host_calls`** – raw-handle toolkit calls the host uses to build its
//!   own layout.
//! - **`host`** – the [`HostBridge`](host::HostBridge) seam for canvas size
//!   and layout queries.
//! - **`toolkit`** – the [`GuiToolkit`](toolkit::GuiToolkit) seam and the
//!   handle types it issues.
//!
//! Nothing here touches a browser, a window system or the file system; those
//! live in `infrastructure`.

pub mod bootstrap;
pub mod frame_pump;
pub mod host;
pub mod host_calls;
pub mod toolkit;
