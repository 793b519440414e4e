//! Browser host bridge.
//!
//! The Designer webview prepares a global `Module` object before loading the
//! module:
//!
//! ```js
//! window.Module = {
//!   canvas: canvasEl,
//!   arguments: ['', String(w), String(h)],
//!   lvcraft_layout: layout ? JSON.stringify(layout) : null,
//! };
//! ```
//!
//! Every read goes through `Reflect::get`, so a missing `Module`, a missing
//! property or a throwing getter all end up as [`HostValue::Missing`].

use js_sys::Reflect;
use wasm_bindgen::JsValue;

use crate::application::host::HostBridge;
use crate::infrastructure::host_bridge::value::HostValue;

/// Reads answers from the page's global `Module` object.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebHostBridge;

impl WebHostBridge {
    fn module_property(path: &[&str]) -> HostValue {
        let mut current: JsValue = js_sys::global().into();
        for name in std::iter::once(&"Module").chain(path) {
            match property(&current, name) {
                Some(value) => current = value,
                None => return HostValue::Missing,
            }
        }
        to_host_value(&current)
    }
}

/// `target[name]`, or `None` when it throws or is `undefined` / `null`.
fn property(target: &JsValue, name: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn to_host_value(value: &JsValue) -> HostValue {
    if value.is_undefined() || value.is_null() {
        HostValue::Missing
    } else if let Some(flag) = value.as_bool() {
        HostValue::Bool(flag)
    } else if let Some(number) = value.as_f64() {
        HostValue::Number(number)
    } else if let Some(text) = value.as_string() {
        HostValue::Text(text)
    } else {
        HostValue::Object
    }
}

impl HostBridge for WebHostBridge {
    fn has_external_layout(&self) -> bool {
        Self::module_property(&["lvcraft_layout"]).is_truthy()
    }

    fn canvas_width(&self) -> i32 {
        Self::module_property(&["canvas", "width"]).as_dimension()
    }

    fn canvas_height(&self) -> i32 {
        Self::module_property(&["canvas", "height"]).as_dimension()
    }
}
