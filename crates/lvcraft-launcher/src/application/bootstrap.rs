//! Launcher: the startup sequence.
//!
//! ```text
//! launch(args, toolkit)
//!  ├─ Resolution::resolve       args → host canvas → 320x240
//!  ├─ initialize_platform       display + default group + pointer/wheel/keyboard
//!  ├─ host.has_external_layout  queried exactly once
//!  ├─ registry.select           deferred / registered / default
//!  ├─ entry point               invoked once, synchronously
//!  └─ FramePump                 handed back to the host
//! ```
//!
//! Only platform bring-up can fail.  An unknown demo name is logged and
//! recorded in the [`LaunchReport`], then the default demo runs.

use std::sync::Arc;

use lvcraft_core::{DemoRegistry, DemoSelection, LaunchArgs, Resolution};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::application::frame_pump::FramePump;
use crate::application::host::HostBridge;
use crate::application::toolkit::{
    DisplayHandle, GroupHandle, GuiToolkit, InputDeviceHandle, InputDeviceKind, ToolkitError,
};

/// A demo entry point: builds its screen on the toolkit and returns.
pub type DemoFn = fn(&mut dyn GuiToolkit);

/// Error type for the startup sequence.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("platform initialization failed: {0}")]
    Platform(#[from] ToolkitError),
}

/// Handles created during platform bring-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformHandles {
    pub display: DisplayHandle,
    pub group: GroupHandle,
    /// Devices in registration order: pointer, wheel, keyboard.
    pub input_devices: Vec<(InputDeviceKind, InputDeviceHandle)>,
}

/// What ended up on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchedDemo {
    /// Nothing launched; the host builds the UI from its layout.
    HostLayout,
    /// A registry entry, by name.
    Registered(&'static str),
    /// The compiled-in default demo.
    Default,
}

/// Summary of a completed launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    pub resolution: Resolution,
    pub demo: LaunchedDemo,
    /// Requested demo name that matched no registry entry.
    pub unmatched_demo: Option<String>,
    pub platform: PlatformHandles,
}

/// A launched module: the pump to drive plus the startup summary.
#[derive(Debug)]
pub struct Launched<T> {
    pub pump: FramePump<T>,
    pub report: LaunchReport,
}

/// The startup use case.
///
/// Holds the injected host bridge and the demo registry; the toolkit is
/// passed to [`Launcher::launch`] and moves into the returned pump.
pub struct Launcher {
    host: Arc<dyn HostBridge>,
    registry: DemoRegistry<DemoFn>,
}

impl Launcher {
    pub fn new(host: Arc<dyn HostBridge>, registry: DemoRegistry<DemoFn>) -> Self {
        Self { host, registry }
    }

    /// Runs the startup sequence against `toolkit`.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::Platform`] if toolkit initialization, display
    /// creation or input device creation fails.  Nothing else is fatal.
    pub fn launch<T: GuiToolkit>(
        &self,
        args: &LaunchArgs,
        mut toolkit: T,
    ) -> Result<Launched<T>, LaunchError> {
        let resolution = self.resolve_resolution(args);
        info!("Starting with screen resolution of {resolution} px");

        let platform = initialize_platform(&mut toolkit, resolution)?;

        let external_layout = self.host.has_external_layout();
        let selection = self.registry.select(args.requested_demo(), external_layout);

        let unmatched_demo = selection.unmatched().map(str::to_string);
        if let Some(name) = &unmatched_demo {
            error!("Unable to find requested example: {name}");
        }

        let demo = match &selection {
            DemoSelection::Deferred => LaunchedDemo::HostLayout,
            DemoSelection::Registered(entry) => LaunchedDemo::Registered(entry.name),
            DemoSelection::Default { .. } => LaunchedDemo::Default,
        };

        match selection.entry_point() {
            Some(entry_point) => {
                debug!(demo = selection.label(), "building demo screen");
                (*entry_point)(&mut toolkit);
            }
            None => info!("host supplied a layout; skipping built-in demo"),
        }

        Ok(Launched {
            pump: FramePump::new(toolkit),
            report: LaunchReport {
                resolution,
                demo,
                unmatched_demo,
                platform,
            },
        })
    }

    fn resolve_resolution(&self, args: &LaunchArgs) -> Resolution {
        Resolution::resolve(args.width, args.height, || {
            (self.host.canvas_width(), self.host.canvas_height())
        })
    }
}

/// Brings up the display and the shared input group.
///
/// Creates one display sized to `resolution`, one group (made the default),
/// and a pointer, wheel and keyboard device, each routed to that group.
///
/// # Errors
///
/// Propagates the first [`ToolkitError`].
pub fn initialize_platform<T: GuiToolkit + ?Sized>(
    toolkit: &mut T,
    resolution: Resolution,
) -> Result<PlatformHandles, ToolkitError> {
    toolkit.init()?;
    let display_handle = toolkit.create_display(resolution)?;

    let group = toolkit.create_group();
    toolkit.set_default_group(group);

    let mut input_devices = Vec::with_capacity(InputDeviceKind::ALL.len());
    for kind in InputDeviceKind::ALL {
        let device = toolkit.create_input_device(kind)?;
        toolkit.assign_to_group(device, group);
        input_devices.push((kind, device));
    }

    debug!(display = ?display_handle, ?group, "platform initialized");
    Ok(PlatformHandles {
        display: display_handle,
        group,
        input_devices,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use super::*;
    use crate::application::host::MockHostBridge;
    use crate::infrastructure::host_bridge::StaticHostBridge;
    use crate::infrastructure::toolkit::HeadlessToolkit;
    use lvcraft_core::DemoEntry;

    fn alpha(tk: &mut dyn GuiToolkit) {
        let screen = tk.active_screen();
        tk.create_label(screen, "alpha");
    }

    fn beta(tk: &mut dyn GuiToolkit) {
        let screen = tk.active_screen();
        tk.create_label(screen, "beta");
    }

    fn fallback(tk: &mut dyn GuiToolkit) {
        let screen = tk.active_screen();
        tk.create_label(screen, "fallback");
    }

    fn registry() -> DemoRegistry<DemoFn> {
        DemoRegistry::new(
            vec![
                DemoEntry::new("alpha", alpha as DemoFn),
                DemoEntry::new("beta", beta as DemoFn),
            ],
            fallback as DemoFn,
        )
    }

    fn launcher(host: StaticHostBridge) -> Launcher {
        Launcher::new(Arc::new(host), registry())
    }

    fn args(argv: &[&str]) -> LaunchArgs {
        LaunchArgs::from_positional(argv.iter().copied())
    }

    #[test]
    fn test_named_demo_runs_once_and_default_does_not() {
        // Arrange
        let launcher = launcher(StaticHostBridge::default());

        // Act
        let launched = launcher
            .launch(&args(&["640", "480", "beta"]), HeadlessToolkit::new())
            .expect("launch");

        // Assert
        let tk = launched.pump.toolkit();
        assert_eq!(tk.labels_with_text("beta"), 1);
        assert_eq!(tk.labels_with_text("fallback"), 0);
        assert_eq!(launched.report.demo, LaunchedDemo::Registered("beta"));
    }

    #[test]
    fn test_unknown_demo_is_reported_and_default_runs() {
        let launcher = launcher(StaticHostBridge::default());

        let launched = launcher
            .launch(&args(&["640", "480", "nonexistent"]), HeadlessToolkit::new())
            .expect("launch");

        assert_eq!(launched.report.unmatched_demo.as_deref(), Some("nonexistent"));
        assert_eq!(launched.report.demo, LaunchedDemo::Default);
        assert_eq!(launched.pump.toolkit().labels_with_text("fallback"), 1);
    }

    #[test]
    fn test_external_layout_skips_every_demo() {
        let launcher = launcher(StaticHostBridge::default().with_external_layout(true));

        let launched = launcher
            .launch(&args(&["640", "480", "alpha"]), HeadlessToolkit::new())
            .expect("launch");

        let tk = launched.pump.toolkit();
        assert_eq!(tk.labels_with_text("alpha"), 0);
        assert_eq!(tk.labels_with_text("fallback"), 0);
        assert_eq!(launched.report.demo, LaunchedDemo::HostLayout);
        assert!(launched.report.unmatched_demo.is_none());
        // Platform bring-up still happened.
        assert!(tk.display().is_some());
    }

    #[test]
    fn test_platform_has_one_group_with_three_devices() {
        let launcher = launcher(StaticHostBridge::default());

        let launched = launcher
            .launch(&args(&["800", "600"]), HeadlessToolkit::new())
            .expect("launch");

        let report = &launched.report;
        let kinds: Vec<_> = report.platform.input_devices.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, InputDeviceKind::ALL.to_vec());

        let tk = launched.pump.toolkit();
        assert_eq!(tk.groups(), &[report.platform.group]);
        for kind in InputDeviceKind::ALL {
            assert_eq!(tk.device_count(kind), 1, "{kind:?}");
        }
        assert_eq!(tk.default_group(), Some(report.platform.group));
        for (_, device) in &report.platform.input_devices {
            assert_eq!(tk.device_group(*device), Some(report.platform.group));
        }
        assert_eq!(
            tk.display().map(|r| (r.width(), r.height())),
            Some((800, 600))
        );
    }

    #[test]
    fn test_platform_failure_is_fatal() {
        let launcher = launcher(StaticHostBridge::default());
        let toolkit = HeadlessToolkit::failing("no GL context");

        let err = launcher
            .launch(&args(&[]), toolkit)
            .expect_err("launch must fail");

        assert!(matches!(err, LaunchError::Platform(ToolkitError::Platform(_))));
    }

    #[test]
    fn test_positive_arguments_never_query_canvas() {
        // Arrange
        let mut host = MockHostBridge::new();
        host.expect_canvas_width().never();
        host.expect_canvas_height().never();
        host.expect_has_external_layout().times(1).return_const(false);
        let launcher = Launcher::new(Arc::new(host), registry());

        // Act
        let launched = launcher
            .launch(&args(&["800", "600"]), HeadlessToolkit::new())
            .expect("launch");

        // Assert
        assert_eq!(launched.report.resolution, Resolution::new(800, 600).unwrap());
    }

    #[test]
    fn test_missing_arguments_query_canvas_once() {
        let mut host = MockHostBridge::new();
        host.expect_canvas_width().times(1).return_const(1024);
        host.expect_canvas_height().times(1).return_const(768);
        host.expect_has_external_layout().times(1).return_const(false);
        let launcher = Launcher::new(Arc::new(host), registry());

        let launched = launcher
            .launch(&args(&["0", "0"]), HeadlessToolkit::new())
            .expect("launch");

        assert_eq!(launched.report.resolution, Resolution::new(1024, 768).unwrap());
        assert_eq!(launched.report.demo, LaunchedDemo::Default);
    }

    /// Captures formatted log output for one closure.
    fn captured_logs(run: impl FnOnce()) -> String {
        #[derive(Clone, Default)]
        struct Buffer(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Buffer {
            fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
                self.0.lock().expect("log buffer").extend_from_slice(bytes);
                Ok(bytes.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, run);

        let bytes = buffer.0.lock().expect("log buffer").clone();
        String::from_utf8(bytes).expect("utf-8 log output")
    }

    #[test]
    fn test_launch_logs_resolution_and_unknown_demo() {
        // Arrange
        let launcher = launcher(StaticHostBridge::default());

        // Act
        let logs = captured_logs(|| {
            launcher
                .launch(&args(&["640", "480", "nonexistent"]), HeadlessToolkit::new())
                .expect("launch");
        });

        // Assert
        let resolution_line = logs
            .lines()
            .find(|line| line.contains("Starting with screen resolution of 640x480 px"))
            .expect("resolution line");
        assert!(resolution_line.contains("INFO"), "{resolution_line}");

        let unknown_line = logs
            .lines()
            .find(|line| line.contains("Unable to find requested example: nonexistent"))
            .expect("unknown demo line");
        assert!(unknown_line.contains("ERROR"), "{unknown_line}");
    }

    #[test]
    fn test_host_layout_launch_logs_no_lookup_error() {
        let launcher = launcher(StaticHostBridge::default().with_external_layout(true));

        let logs = captured_logs(|| {
            launcher
                .launch(&args(&["640", "480", "nonexistent"]), HeadlessToolkit::new())
                .expect("launch");
        });

        assert!(logs.contains("Starting with screen resolution of 640x480 px"));
        assert!(!logs.contains("Unable to find requested example"));
        assert!(!logs.contains("ERROR"));
    }

    #[test]
    fn test_initialize_platform_twice_fails() {
        let mut tk = HeadlessToolkit::new();
        let res = Resolution::default();

        initialize_platform(&mut tk, res).expect("first bring-up");
        let second = initialize_platform(&mut tk, res);

        assert_eq!(second, Err(ToolkitError::AlreadyInitialized));
    }
}
