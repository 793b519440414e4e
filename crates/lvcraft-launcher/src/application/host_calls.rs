//! Toolkit calls made by the host while it builds a layout.
//!
//! When the host supplies its own layout no demo runs, and the host walks the
//! layout tree itself:
//!
//! ```text
//! scr = screen_active()
//! obj_clean(scr)
//! for widget in layout:
//!     obj = label_create(parent) | button_create(parent) | obj_create(parent)
//!     label_set_text(obj, widget.text)
//!     obj_set_style_text_color(obj, 0xRRGGBB)
//! ```
//!
//! Handles cross the boundary as raw `u32` ids.  `0` is null: every call
//! taking a null or unknown handle does nothing and returns `0` / `false`.

use lvcraft_core::Color;

use crate::application::toolkit::{GuiToolkit, ObjectHandle};

/// The null handle as seen by the host.
pub const NULL_HANDLE: u32 = 0;

fn live(toolkit: &dyn GuiToolkit, raw: u32) -> Option<ObjectHandle> {
    ObjectHandle::from_raw(raw).filter(|object| toolkit.contains(*object))
}

pub fn screen_active(toolkit: &mut dyn GuiToolkit) -> u32 {
    toolkit.active_screen().raw()
}

pub fn obj_clean(toolkit: &mut dyn GuiToolkit, obj: u32) -> bool {
    live(toolkit, obj).is_some_and(|object| toolkit.clean(object))
}

pub fn obj_create(toolkit: &mut dyn GuiToolkit, parent: u32) -> u32 {
    live(toolkit, parent).map_or(NULL_HANDLE, |parent| toolkit.create_object(parent).raw())
}

/// Creates an empty label; the host sets its text afterwards.
pub fn label_create(toolkit: &mut dyn GuiToolkit, parent: u32) -> u32 {
    live(toolkit, parent).map_or(NULL_HANDLE, |parent| {
        toolkit.create_label(parent, "").raw()
    })
}

pub fn button_create(toolkit: &mut dyn GuiToolkit, parent: u32) -> u32 {
    live(toolkit, parent).map_or(NULL_HANDLE, |parent| toolkit.create_button(parent).raw())
}

pub fn label_set_text(toolkit: &mut dyn GuiToolkit, obj: u32, text: &str) -> bool {
    live(toolkit, obj).is_some_and(|object| toolkit.set_label_text(object, text))
}

/// Sets the text colour from a `0xRRGGBB` value; the top byte is ignored.
pub fn obj_set_style_text_color(toolkit: &mut dyn GuiToolkit, obj: u32, hex_color: u32) -> bool {
    live(toolkit, obj)
        .is_some_and(|object| toolkit.set_text_color(object, Color::from_hex(hex_color)))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::toolkit::{HeadlessToolkit, ObjectKind};

    fn toolkit() -> HeadlessToolkit {
        let mut tk = HeadlessToolkit::new();
        tk.init().expect("init");
        tk
    }

    #[test]
    fn test_host_builds_a_layout_tree() {
        // Arrange
        let mut tk = toolkit();
        let scr = screen_active(&mut tk);

        // Act
        let panel = obj_create(&mut tk, scr);
        let button = button_create(&mut tk, panel);
        let caption = label_create(&mut tk, button);
        let text_set = label_set_text(&mut tk, caption, "Save");
        let coloured = obj_set_style_text_color(&mut tk, caption, 0x00FF_8800);

        // Assert
        assert!(text_set && coloured);
        let record = ObjectHandle::from_raw(caption)
            .and_then(|h| tk.object(h))
            .expect("caption exists");
        assert_eq!(record.kind, ObjectKind::Label);
        assert_eq!(record.parent, ObjectHandle::from_raw(button));
        assert_eq!(record.text.as_deref(), Some("Save"));
        assert_eq!(record.text_color, Some(Color::from_hex(0xFF8800)));
    }

    #[test]
    fn test_clean_screen_before_rebuilding() {
        let mut tk = toolkit();
        let scr = screen_active(&mut tk);
        let old = label_create(&mut tk, scr);

        assert!(obj_clean(&mut tk, scr));

        assert!(!label_set_text(&mut tk, old, "stale"));
        assert_eq!(screen_active(&mut tk), scr);
    }

    #[test]
    fn test_null_and_unknown_handles_are_ignored() {
        let mut tk = toolkit();
        screen_active(&mut tk);
        let before = tk.objects().len();

        assert_eq!(label_create(&mut tk, NULL_HANDLE), NULL_HANDLE);
        assert_eq!(button_create(&mut tk, 9_999), NULL_HANDLE);
        assert_eq!(obj_create(&mut tk, 9_999), NULL_HANDLE);
        assert!(!obj_clean(&mut tk, NULL_HANDLE));
        assert!(!label_set_text(&mut tk, 9_999, "x"));
        assert!(!obj_set_style_text_color(&mut tk, NULL_HANDLE, 0xFFFFFF));

        assert_eq!(tk.objects().len(), before);
    }

    #[test]
    fn test_calls_work_through_a_boxed_toolkit() {
        let mut boxed: Box<dyn GuiToolkit> = Box::new(toolkit());

        let scr = screen_active(boxed.as_mut());
        let label = label_create(boxed.as_mut(), scr);

        assert_ne!(label, NULL_HANDLE);
        assert!(label_set_text(boxed.as_mut(), label, "boxed"));
    }
}
