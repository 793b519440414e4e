//! The GUI toolkit seam.
//!
//! The launcher never talks to a real toolkit directly.  Everything it needs
//! (bring up a display, register input devices, build a trivial demo screen,
//! run the task handler) goes through [`GuiToolkit`].  The infrastructure
//! layer provides implementations; tests use the in-memory
//! `HeadlessToolkit`.
//!
//! Handles are opaque ids issued by the toolkit.  Id `0` is never issued, so
//! it can stand for "null" when a handle arrives from the host as a raw
//! integer.

use std::num::NonZeroU32;
use std::time::Duration;

use lvcraft_core::{Color, Resolution};
use thiserror::Error;

/// Error type for toolkit bring-up.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolkitError {
    #[error("toolkit already initialized")]
    AlreadyInitialized,
    #[error("toolkit not initialized")]
    NotInitialized,
    #[error("a display has already been created")]
    DisplayAlreadyCreated,
    #[error("no display exists for the {0:?} device")]
    NoDisplay(InputDeviceKind),
    #[error("platform error: {0}")]
    Platform(String),
}

macro_rules! handle {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw id; `0` is the null handle and yields `None`.
            pub fn from_raw(raw: u32) -> Option<Self> {
                (raw != 0).then_some(Self(raw))
            }

            pub fn raw(self) -> u32 {
                self.0
            }

            /// Wraps an id issued by a toolkit implementation.
            pub fn issue(raw: NonZeroU32) -> Self {
                Self(raw.get())
            }
        }
    };
}

handle!(
    /// A display (window / canvas surface).
    DisplayHandle
);
handle!(
    /// A focus group that input devices route into.
    GroupHandle
);
handle!(
    /// A registered input device.
    InputDeviceHandle
);
handle!(
    /// A UI object (screen, label, button, ...).
    ObjectHandle
);

/// The input devices the launcher registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputDeviceKind {
    Pointer,
    Wheel,
    Keyboard,
}

impl InputDeviceKind {
    /// Registration order used during platform bring-up.
    pub const ALL: [InputDeviceKind; 3] = [
        InputDeviceKind::Pointer,
        InputDeviceKind::Wheel,
        InputDeviceKind::Keyboard,
    ];
}

/// Toolkit operations used by the launcher and the built-in demos.
pub trait GuiToolkit {
    /// One-time toolkit initialization.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::AlreadyInitialized`] on a second call.
    fn init(&mut self) -> Result<(), ToolkitError>;

    /// Creates the single display surface.
    ///
    /// # Errors
    ///
    /// Fails if the toolkit is not initialized, a display already exists, or
    /// the platform cannot open a surface.
    fn create_display(&mut self, resolution: Resolution) -> Result<DisplayHandle, ToolkitError>;

    /// Creates an input group.
    fn create_group(&mut self) -> GroupHandle;

    /// Makes `group` the group new widgets and devices attach to.
    fn set_default_group(&mut self, group: GroupHandle);

    /// Creates an input device bound to the display.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::NoDisplay`] if no display exists yet.
    fn create_input_device(
        &mut self,
        kind: InputDeviceKind,
    ) -> Result<InputDeviceHandle, ToolkitError>;

    /// Routes `device` events into `group`.
    fn assign_to_group(&mut self, device: InputDeviceHandle, group: GroupHandle);

    /// The screen object of the display.
    fn active_screen(&mut self) -> ObjectHandle;

    /// Whether `object` is a live object of this toolkit.
    fn contains(&self, object: ObjectHandle) -> bool;

    /// Deletes every child of `object`, keeping `object` itself.  Returns
    /// `false` if the object is unknown.
    fn clean(&mut self, object: ObjectHandle) -> bool;

    /// Creates a plain base object.
    fn create_object(&mut self, parent: ObjectHandle) -> ObjectHandle;

    fn create_label(&mut self, parent: ObjectHandle, text: &str) -> ObjectHandle;

    fn create_button(&mut self, parent: ObjectHandle) -> ObjectHandle;

    /// Replaces the text of a label.  Returns `false` if `object` is not a
    /// label.
    fn set_label_text(&mut self, object: ObjectHandle, text: &str) -> bool;

    /// Sets the text colour of `object`.  Returns `false` if the object is
    /// unknown.
    fn set_text_color(&mut self, object: ObjectHandle, color: Color) -> bool;

    /// Runs pending timers and redraws.  Returns the time until the toolkit
    /// next needs attention.
    fn task_handler(&mut self) -> Duration;
}

/// Lets a launcher own a toolkit chosen at run time (`Box<dyn GuiToolkit>`).
impl<T: GuiToolkit + ?Sized> GuiToolkit for Box<T> {
    fn init(&mut self) -> Result<(), ToolkitError> {
        (**self).init()
    }

    fn create_display(&mut self, resolution: Resolution) -> Result<DisplayHandle, ToolkitError> {
        (**self).create_display(resolution)
    }

    fn create_group(&mut self) -> GroupHandle {
        (**self).create_group()
    }

    fn set_default_group(&mut self, group: GroupHandle) {
        (**self).set_default_group(group)
    }

    fn create_input_device(
        &mut self,
        kind: InputDeviceKind,
    ) -> Result<InputDeviceHandle, ToolkitError> {
        (**self).create_input_device(kind)
    }

    fn assign_to_group(&mut self, device: InputDeviceHandle, group: GroupHandle) {
        (**self).assign_to_group(device, group)
    }

    fn active_screen(&mut self) -> ObjectHandle {
        (**self).active_screen()
    }

    fn contains(&self, object: ObjectHandle) -> bool {
        (**self).contains(object)
    }

    fn clean(&mut self, object: ObjectHandle) -> bool {
        (**self).clean(object)
    }

    fn create_object(&mut self, parent: ObjectHandle) -> ObjectHandle {
        (**self).create_object(parent)
    }

    fn create_label(&mut self, parent: ObjectHandle, text: &str) -> ObjectHandle {
        (**self).create_label(parent, text)
    }

    fn create_button(&mut self, parent: ObjectHandle) -> ObjectHandle {
        (**self).create_button(parent)
    }

    fn set_label_text(&mut self, object: ObjectHandle, text: &str) -> bool {
        (**self).set_label_text(object, text)
    }

    fn set_text_color(&mut self, object: ObjectHandle, color: Color) -> bool {
        (**self).set_text_color(object, color)
    }

    fn task_handler(&mut self) -> Duration {
        (**self).task_handler()
    }
}
