//! Built-in demo screens.
//!
//! These are placeholders for the toolkit's own demo applications: each one
//! puts a few objects on the active screen and returns.  `widgets` is also
//! the compiled-in default.

use lvcraft_core::{Color, DemoEntry, DemoRegistry};

use crate::application::bootstrap::DemoFn;
use crate::application::toolkit::GuiToolkit;

const ACCENT: u32 = 0x2196F3;

/// The registry the launcher ships with.
pub fn builtin_registry() -> DemoRegistry<DemoFn> {
    DemoRegistry::new(
        vec![
            DemoEntry::new("widgets", widgets as DemoFn),
            DemoEntry::new("hello", hello as DemoFn),
            DemoEntry::new("button", button as DemoFn),
        ],
        widgets as DemoFn,
    )
}

fn widgets(toolkit: &mut dyn GuiToolkit) {
    let screen = toolkit.active_screen();
    let title = toolkit.create_label(screen, "LVCraft widgets");
    toolkit.set_text_color(title, Color::from_hex(ACCENT));

    let button = toolkit.create_button(screen);
    toolkit.create_label(button, "Button");
    toolkit.create_label(screen, "Slide, tap or type to try the inputs");
}

fn hello(toolkit: &mut dyn GuiToolkit) {
    let screen = toolkit.active_screen();
    toolkit.create_label(screen, "Hello world!");
}

fn button(toolkit: &mut dyn GuiToolkit) {
    let screen = toolkit.active_screen();
    let button = toolkit.create_button(screen);
    let label = toolkit.create_label(button, "Click me");
    toolkit.set_text_color(label, Color::from_hex(0xFFFFFF));
}
