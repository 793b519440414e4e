//! Browser entry points.
//!
//! The page loads the module and then drives it:
//!
//! ```js
//! lvcraft_start(Module.arguments);          // once
//! function frame() {
//!   lvcraft_tick();                         // every animation frame
//!   requestAnimationFrame(frame);
//! }
//! requestAnimationFrame(frame);
//! ```
//!
//! When the page supplied a layout (`Module.lvcraft_layout`), no demo runs
//! and the page builds the screen itself through the `lvcraft_screen_active`,
//! `lvcraft_obj_clean`, `lvcraft_*_create`, `lvcraft_label_set_text` and
//! `lvcraft_obj_set_style_text_color` exports.
//!
//! The pump lives in a thread-local slot between calls; the module is single
//! threaded.  Stopping is the page's business: it stops calling
//! `lvcraft_tick`.

use std::cell::RefCell;
use std::sync::Arc;

use lvcraft_core::LaunchArgs;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};
use wasm_bindgen::prelude::*;

use crate::application::bootstrap::Launcher;
use crate::application::frame_pump::FramePump;
use crate::application::host_calls;
use crate::application::toolkit::GuiToolkit;
use crate::infrastructure::demos::builtin_registry;
use crate::infrastructure::host_bridge::WebHostBridge;
use crate::infrastructure::toolkit::HeadlessToolkit;

thread_local! {
    static PUMP: RefCell<Option<FramePump<Box<dyn GuiToolkit>>>> = const { RefCell::new(None) };
}

/// Runs the startup sequence on the built-in toolkit.  `args` mirrors
/// `argv`, program name first.
///
/// # Errors
///
/// Throws if the module was already started or platform bring-up fails.
#[wasm_bindgen]
pub fn lvcraft_start(args: js_sys::Array) -> Result<(), JsValue> {
    let argv: Vec<String> = args
        .iter()
        .map(|v| v.as_string().unwrap_or_default())
        .collect();
    start_with_toolkit(&argv, Box::new(HeadlessToolkit::new()))
}

/// Runs the startup sequence on `toolkit`.
///
/// Embedding builds that link a real toolkit call this from their own
/// `#[wasm_bindgen]` start function instead of [`lvcraft_start`].
///
/// # Errors
///
/// Fails if the module was already started or platform bring-up fails.
pub fn start_with_toolkit(argv: &[String], toolkit: Box<dyn GuiToolkit>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_console_logging();

    if PUMP.with(|slot| slot.borrow().is_some()) {
        return Err(JsValue::from_str("lvcraft module already started"));
    }

    let launcher = Launcher::new(Arc::new(WebHostBridge), builtin_registry());
    let launched = launcher
        .launch(&LaunchArgs::from_argv(argv), toolkit)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    PUMP.with(|slot| *slot.borrow_mut() = Some(launched.pump));
    Ok(())
}

/// One frame pump iteration.  Does nothing before `lvcraft_start`.
#[wasm_bindgen]
pub fn lvcraft_tick() {
    PUMP.with(|slot| {
        if let Some(pump) = slot.borrow_mut().as_mut() {
            pump.tick();
        }
    });
}

/// Runs `call` on the started toolkit, or returns `fallback` before start.
fn with_toolkit<R>(fallback: R, call: impl FnOnce(&mut dyn GuiToolkit) -> R) -> R {
    PUMP.with(|slot| match slot.borrow_mut().as_mut() {
        Some(pump) => call(pump.toolkit_mut().as_mut()),
        None => fallback,
    })
}

#[wasm_bindgen]
pub fn lvcraft_screen_active() -> u32 {
    with_toolkit(host_calls::NULL_HANDLE, host_calls::screen_active)
}

#[wasm_bindgen]
pub fn lvcraft_obj_clean(obj: u32) {
    with_toolkit(false, |tk| host_calls::obj_clean(tk, obj));
}

#[wasm_bindgen]
pub fn lvcraft_obj_create(parent: u32) -> u32 {
    with_toolkit(host_calls::NULL_HANDLE, |tk| host_calls::obj_create(tk, parent))
}

#[wasm_bindgen]
pub fn lvcraft_label_create(parent: u32) -> u32 {
    with_toolkit(host_calls::NULL_HANDLE, |tk| host_calls::label_create(tk, parent))
}

#[wasm_bindgen]
pub fn lvcraft_button_create(parent: u32) -> u32 {
    with_toolkit(host_calls::NULL_HANDLE, |tk| host_calls::button_create(tk, parent))
}

#[wasm_bindgen]
pub fn lvcraft_label_set_text(obj: u32, text: &str) {
    with_toolkit(false, |tk| host_calls::label_set_text(tk, obj, text));
}

/// Sets an object's text colour from a `0xRRGGBB` value.  Null (`0`) and
/// unknown objects are ignored.
#[wasm_bindgen]
pub fn lvcraft_obj_set_style_text_color(obj: u32, hex_color: u32) {
    with_toolkit(false, |tk| {
        host_calls::obj_set_style_text_color(tk, obj, hex_color)
    });
}

fn init_console_logging() {
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(Level::INFO)
        .build();
    // A second start attempt keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(WASMLayer::new(config))
        .try_init();
}
