//! Infrastructure layer for the launcher.
//!
//! Contains the adapters behind the application-layer seams and everything
//! that touches the outside world.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `lvcraft_core`, but MUST NOT be imported by the `application` layer
//! (tests excepted).
//!
//! # Sub-modules
//!
//! - **`host_bridge`** – `HostBridge` implementations: a fixed-value host for
//!   native runs and tests, and the browser `Module` reader on `wasm32`.
//!
//! - **`toolkit`** – `HeadlessToolkit`, the in-memory `GuiToolkit`.
//!
//! - **`demos`** – the built-in demo registry.
//!
//! - **`storage`** – the native TOML configuration file.
//!
//! - **`host_loop`** – the native stand-in for the browser's animation frame
//!   loop (not built for `wasm32`).

pub mod demos;
pub mod host_bridge;
pub mod storage;
pub mod toolkit;

#[cfg(not(target_arch = "wasm32"))]
pub mod host_loop;
