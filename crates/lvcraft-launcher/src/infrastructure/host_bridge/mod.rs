//! Host bridge implementations.
//!
//! | Type               | Host                     | Source of answers                        |
//! |--------------------|--------------------------|------------------------------------------|
//! | `StaticHostBridge` | native binary, tests     | values fixed at construction (CLI / config) |
//! | `WebHostBridge`    | browser (`wasm32` only)  | `Module.lvcraft_layout`, `Module.canvas`  |
//!
//! Both follow the [`HostBridge`] contract: failures become `0` / `false`.
//! For the browser bridge that mapping lives in [`HostValue`].

use crate::application::host::HostBridge;

pub mod layout;
pub mod value;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::WebHostBridge;

pub use layout::layout_file_present;
pub use value::HostValue;

/// A host whose answers never change.
///
/// The native binary builds one from `--canvas-width`, `--canvas-height` and
/// `--layout`; tests build them directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticHostBridge {
    external_layout: bool,
    canvas_width: i32,
    canvas_height: i32,
}

impl StaticHostBridge {
    /// A host reporting a `width` x `height` canvas and no layout.
    pub fn new(canvas_width: i32, canvas_height: i32) -> Self {
        Self {
            external_layout: false,
            canvas_width,
            canvas_height,
        }
    }

    pub fn with_external_layout(mut self, external_layout: bool) -> Self {
        self.external_layout = external_layout;
        self
    }
}

impl HostBridge for StaticHostBridge {
    fn has_external_layout(&self) -> bool {
        self.external_layout
    }

    fn canvas_width(&self) -> i32 {
        self.canvas_width
    }

    fn canvas_height(&self) -> i32 {
        self.canvas_height
    }
}
