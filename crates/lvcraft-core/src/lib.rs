//! # lvcraft-core
//!
//! Pure startup logic for the LVCraft preview launcher.
//!
//! The launcher runs inside a host (the Designer's webview, or a native
//! process during development) and has to answer two questions before the
//! GUI toolkit can start drawing:
//!
//! - **How big is the screen?**  The answer comes from the command line, then
//!   from the host's canvas, then from a fixed default.  See
//!   [`Resolution::resolve`].
//! - **What should be shown?**  Either a named built-in demo, the compiled-in
//!   default demo, or nothing at all when the host builds the UI from its own
//!   layout.  See [`DemoRegistry::select`].
//!
//! This crate has no I/O and no dependency on the toolkit.  Demo entry points
//! are a type parameter so the launcher crate can decide what a demo is.

pub mod args;
pub mod demo;
pub mod domain;

pub use args::{parse_dimension, LaunchArgs, DEFAULT_DEMO_ALIAS};
pub use demo::registry::{DemoEntry, DemoRegistry};
pub use demo::selection::DemoSelection;
pub use domain::color::Color;
pub use domain::resolution::{Resolution, DEFAULT_HEIGHT, DEFAULT_WIDTH};
