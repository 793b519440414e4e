//! In-memory toolkit with no window system behind it.
//!
//! # What is recorded?
//!
//! - whether `init` ran, and the resolution of the one display,
//! - every group, the default group, and which group each device routes to,
//! - every live object (screen, base object, label, button) with its parent,
//!   text and colour; `clean` drops the descendants it removes,
//! - how many times the task handler ran.
//!
//! # `failing`
//!
//! [`HeadlessToolkit::failing`] builds a toolkit whose `init` returns
//! [`ToolkitError::Platform`], for exercising the fatal startup path.

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::time::Duration;

use lvcraft_core::{Color, Resolution};
use tracing::trace;

use crate::application::toolkit::{
    DisplayHandle, GroupHandle, GuiToolkit, InputDeviceHandle, InputDeviceKind, ObjectHandle,
    ToolkitError,
};

/// Idle hint returned by the task handler; matches a 30 fps refresh period.
pub const REFRESH_PERIOD: Duration = Duration::from_millis(33);

/// Kind of a recorded UI object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Screen,
    Object,
    Label,
    Button,
}

/// A UI object created through the toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRecord {
    pub handle: ObjectHandle,
    pub kind: ObjectKind,
    pub parent: Option<ObjectHandle>,
    pub text: Option<String>,
    pub text_color: Option<Color>,
}

#[derive(Debug, Clone)]
struct DeviceRecord {
    kind: InputDeviceKind,
    group: Option<GroupHandle>,
}

/// Recording toolkit.  See the module docs.
#[derive(Debug, Default)]
pub struct HeadlessToolkit {
    initialized: bool,
    init_failure: Option<String>,
    display: Option<(DisplayHandle, Resolution)>,
    screen: Option<ObjectHandle>,
    groups: Vec<GroupHandle>,
    default_group: Option<GroupHandle>,
    devices: HashMap<InputDeviceHandle, DeviceRecord>,
    objects: Vec<ObjectRecord>,
    task_runs: u64,
    next_id: u32,
}

impl HeadlessToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    /// A toolkit whose `init` fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            init_failure: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Resolution of the display, if one was created.
    pub fn display(&self) -> Option<Resolution> {
        self.display.map(|(_, resolution)| resolution)
    }

    pub fn groups(&self) -> &[GroupHandle] {
        &self.groups
    }

    pub fn default_group(&self) -> Option<GroupHandle> {
        self.default_group
    }

    /// Group that `device` routes to, if any.
    pub fn device_group(&self, device: InputDeviceHandle) -> Option<GroupHandle> {
        self.devices.get(&device).and_then(|record| record.group)
    }

    /// Number of devices of `kind`.
    pub fn device_count(&self, kind: InputDeviceKind) -> usize {
        self.devices.values().filter(|d| d.kind == kind).count()
    }

    pub fn objects(&self) -> &[ObjectRecord] {
        &self.objects
    }

    pub fn object(&self, handle: ObjectHandle) -> Option<&ObjectRecord> {
        self.objects.iter().find(|o| o.handle == handle)
    }

    /// Number of labels whose text is exactly `text`.
    pub fn labels_with_text(&self, text: &str) -> usize {
        self.objects
            .iter()
            .filter(|o| o.kind == ObjectKind::Label && o.text.as_deref() == Some(text))
            .count()
    }

    pub fn task_runs(&self) -> u64 {
        self.task_runs
    }

    fn next_raw(&mut self) -> NonZeroU32 {
        self.next_id = self.next_id.saturating_add(1);
        NonZeroU32::new(self.next_id).unwrap_or(NonZeroU32::MAX)
    }

    fn push_object(
        &mut self,
        kind: ObjectKind,
        parent: Option<ObjectHandle>,
        text: Option<&str>,
    ) -> ObjectHandle {
        let handle = ObjectHandle::issue(self.next_raw());
        self.objects.push(ObjectRecord {
            handle,
            kind,
            parent,
            text: text.map(str::to_string),
            text_color: None,
        });
        trace!(?handle, ?kind, "object created");
        handle
    }
}

impl GuiToolkit for HeadlessToolkit {
    fn init(&mut self) -> Result<(), ToolkitError> {
        if let Some(reason) = &self.init_failure {
            return Err(ToolkitError::Platform(reason.clone()));
        }
        if self.initialized {
            return Err(ToolkitError::AlreadyInitialized);
        }
        self.initialized = true;
        Ok(())
    }

    fn create_display(&mut self, resolution: Resolution) -> Result<DisplayHandle, ToolkitError> {
        if !self.initialized {
            return Err(ToolkitError::NotInitialized);
        }
        if self.display.is_some() {
            return Err(ToolkitError::DisplayAlreadyCreated);
        }
        let handle = DisplayHandle::issue(self.next_raw());
        self.display = Some((handle, resolution));
        if self.screen.is_none() {
            self.screen = Some(self.push_object(ObjectKind::Screen, None, None));
        }
        Ok(handle)
    }

    fn create_group(&mut self) -> GroupHandle {
        let handle = GroupHandle::issue(self.next_raw());
        self.groups.push(handle);
        handle
    }

    fn set_default_group(&mut self, group: GroupHandle) {
        self.default_group = Some(group);
    }

    fn create_input_device(
        &mut self,
        kind: InputDeviceKind,
    ) -> Result<InputDeviceHandle, ToolkitError> {
        if self.display.is_none() {
            return Err(ToolkitError::NoDisplay(kind));
        }
        let handle = InputDeviceHandle::issue(self.next_raw());
        self.devices.insert(handle, DeviceRecord { kind, group: None });
        Ok(handle)
    }

    fn assign_to_group(&mut self, device: InputDeviceHandle, group: GroupHandle) {
        if let Some(record) = self.devices.get_mut(&device) {
            record.group = Some(group);
        }
    }

    fn active_screen(&mut self) -> ObjectHandle {
        match self.screen {
            Some(screen) => screen,
            None => {
                let screen = self.push_object(ObjectKind::Screen, None, None);
                self.screen = Some(screen);
                screen
            }
        }
    }

    fn contains(&self, object: ObjectHandle) -> bool {
        self.object(object).is_some()
    }

    fn clean(&mut self, object: ObjectHandle) -> bool {
        if !self.contains(object) {
            return false;
        }
        // Breadth-first over the subtree rooted at `object`.
        let mut doomed = vec![object];
        let mut next = 0;
        while next < doomed.len() {
            let parent = doomed[next];
            doomed.extend(
                self.objects
                    .iter()
                    .filter(|o| o.parent == Some(parent))
                    .map(|o| o.handle),
            );
            next += 1;
        }
        let before = self.objects.len();
        self.objects
            .retain(|o| o.handle == object || !doomed.contains(&o.handle));
        trace!(?object, removed = before - self.objects.len(), "object cleaned");
        true
    }

    fn create_object(&mut self, parent: ObjectHandle) -> ObjectHandle {
        self.push_object(ObjectKind::Object, Some(parent), None)
    }

    fn create_label(&mut self, parent: ObjectHandle, text: &str) -> ObjectHandle {
        self.push_object(ObjectKind::Label, Some(parent), Some(text))
    }

    fn create_button(&mut self, parent: ObjectHandle) -> ObjectHandle {
        self.push_object(ObjectKind::Button, Some(parent), None)
    }

    fn set_label_text(&mut self, object: ObjectHandle, text: &str) -> bool {
        match self
            .objects
            .iter_mut()
            .find(|o| o.handle == object && o.kind == ObjectKind::Label)
        {
            Some(record) => {
                record.text = Some(text.to_string());
                true
            }
            None => false,
        }
    }

    fn set_text_color(&mut self, object: ObjectHandle, color: Color) -> bool {
        match self.objects.iter_mut().find(|o| o.handle == object) {
            Some(record) => {
                record.text_color = Some(color);
                trace!(?object, color = color.to_hex(), "text colour set");
                true
            }
            None => false,
        }
    }

    fn task_handler(&mut self) -> Duration {
        self.task_runs += 1;
        REFRESH_PERIOD
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
