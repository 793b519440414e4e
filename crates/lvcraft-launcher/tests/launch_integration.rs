//! Integration tests for the launch sequence.
//!
//! These exercise `Launcher` end-to-end with the built-in demo registry, the
//! `HeadlessToolkit`, and either a fixed-value host or a mockall host with
//! call-count expectations.

use std::sync::Arc;

use mockall::mock;

use lvcraft_core::{LaunchArgs, Resolution};
use lvcraft_launcher::infrastructure::demos::builtin_registry;
use lvcraft_launcher::infrastructure::host_bridge::StaticHostBridge;
use lvcraft_launcher::infrastructure::toolkit::{HeadlessToolkit, ObjectKind};
use lvcraft_launcher::application::host_calls;
use lvcraft_launcher::{GuiToolkit, HostBridge, InputDeviceKind, Launched, LaunchedDemo, Launcher};

mock! {
    pub Host {}

    impl HostBridge for Host {
        fn has_external_layout(&self) -> bool;
        fn canvas_width(&self) -> i32;
        fn canvas_height(&self) -> i32;
    }
}

const DEFAULT_DEMO_TITLE: &str = "LVCraft widgets";

fn launch(argv: &[&str], host: impl HostBridge + 'static) -> Launched<HeadlessToolkit> {
    let launcher = Launcher::new(Arc::new(host), builtin_registry());
    launcher
        .launch(
            &LaunchArgs::from_positional(argv.iter().copied()),
            HeadlessToolkit::new(),
        )
        .expect("launch must succeed")
}

fn resolution(launched: &Launched<HeadlessToolkit>) -> (u32, u32) {
    let r = launched.report.resolution;
    (r.width(), r.height())
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn test_explicit_resolution_with_default_alias_runs_default_demo() {
    let launched = launch(&["800", "600", "default"], StaticHostBridge::default());

    assert_eq!(resolution(&launched), (800, 600));
    assert_eq!(launched.report.demo, LaunchedDemo::Default);
    assert_eq!(launched.pump.toolkit().labels_with_text(DEFAULT_DEMO_TITLE), 1);
}

#[test]
fn test_zero_arguments_take_host_canvas() {
    let launched = launch(&["0", "0"], StaticHostBridge::new(1024, 768));

    assert_eq!(resolution(&launched), (1024, 768));
    assert_eq!(launched.report.demo, LaunchedDemo::Default);
    assert_eq!(
        launched.pump.toolkit().display(),
        Resolution::new(1024, 768)
    );
}

#[test]
fn test_no_sources_fall_back_to_320x240() {
    let launched = launch(&[], StaticHostBridge::new(0, 0));

    assert_eq!(resolution(&launched), (320, 240));
}

#[test]
fn test_unknown_demo_reports_and_runs_default() {
    let launched = launch(&["640", "480", "nonexistent"], StaticHostBridge::default());

    assert_eq!(resolution(&launched), (640, 480));
    assert_eq!(launched.report.unmatched_demo.as_deref(), Some("nonexistent"));
    assert_eq!(launched.report.demo, LaunchedDemo::Default);
    assert_eq!(launched.pump.toolkit().labels_with_text(DEFAULT_DEMO_TITLE), 1);
}

#[test]
fn test_registered_demo_runs_instead_of_default() {
    let launched = launch(&["640", "480", "hello"], StaticHostBridge::default());

    let tk = launched.pump.toolkit();
    assert_eq!(launched.report.demo, LaunchedDemo::Registered("hello"));
    assert_eq!(tk.labels_with_text("Hello world!"), 1);
    assert_eq!(tk.labels_with_text(DEFAULT_DEMO_TITLE), 0);
}

#[test]
fn test_host_layout_skips_demo_but_platform_and_pump_still_run() {
    for argv in [
        &["640", "480", "hello"][..],
        &["640", "480", "nonexistent"][..],
        &[][..],
    ] {
        // Arrange
        let host = StaticHostBridge::new(800, 480).with_external_layout(true);

        // Act
        let mut launched = launch(argv, host);
        launched.pump.tick();

        // Assert
        let tk = launched.pump.toolkit();
        assert_eq!(launched.report.demo, LaunchedDemo::HostLayout);
        assert!(
            tk.objects().iter().all(|o| o.kind == ObjectKind::Screen),
            "no demo objects may exist for argv {argv:?}"
        );
        assert!(tk.display().is_some());
        assert_eq!(tk.device_count(InputDeviceKind::Keyboard), 1);
        assert_eq!(tk.task_runs(), 1);
    }
}

#[test]
fn test_host_builds_its_layout_on_a_boxed_toolkit() {
    // Arrange
    let host = StaticHostBridge::new(480, 320).with_external_layout(true);
    let launcher = Launcher::new(Arc::new(host), builtin_registry());
    let toolkit: Box<dyn GuiToolkit> = Box::new(HeadlessToolkit::new());

    // Act
    let mut launched = launcher
        .launch(&LaunchArgs::from_positional(["0", "0"]), toolkit)
        .expect("launch must succeed");
    let tk = launched.pump.toolkit_mut().as_mut();
    let scr = host_calls::screen_active(tk);
    host_calls::obj_clean(tk, scr);
    let title = host_calls::label_create(tk, scr);
    let text_set = host_calls::label_set_text(tk, title, "Layout title");
    let button = host_calls::button_create(tk, scr);
    launched.pump.tick();

    // Assert
    assert_eq!(launched.report.demo, LaunchedDemo::HostLayout);
    assert_eq!(resolution_of(&launched.report), (480, 320));
    assert!(text_set);
    assert_ne!(title, host_calls::NULL_HANDLE);
    assert_ne!(button, host_calls::NULL_HANDLE);
    assert_eq!(launched.pump.frames(), 1);
}

fn resolution_of(report: &lvcraft_launcher::LaunchReport) -> (u32, u32) {
    (report.resolution.width(), report.resolution.height())
}

// ── Host query expectations ───────────────────────────────────────────────────

#[test]
fn test_layout_flag_is_queried_exactly_once() {
    let mut host = MockHost::new();
    host.expect_has_external_layout().times(1).return_const(false);
    host.expect_canvas_width().return_const(0);
    host.expect_canvas_height().return_const(0);

    let launched = launch(&[], host);

    assert_eq!(resolution(&launched), (320, 240));
}

#[test]
fn test_positive_arguments_ignore_host_canvas() {
    let mut host = MockHost::new();
    host.expect_has_external_layout().return_const(false);
    host.expect_canvas_width().never();
    host.expect_canvas_height().never();

    let launched = launch(&["1280", "720"], host);

    assert_eq!(resolution(&launched), (1280, 720));
}

#[test]
fn test_failed_host_queries_read_as_unknown() {
    // A host whose reads failed reports 0 / false; the launcher carries on.
    let mut host = MockHost::new();
    host.expect_has_external_layout().return_const(false);
    host.expect_canvas_width().return_const(0);
    host.expect_canvas_height().return_const(600);

    let launched = launch(&["abc", "xyz"], host);

    assert_eq!(resolution(&launched), (320, 600));
    assert_eq!(launched.report.demo, LaunchedDemo::Default);
}

// ── Frame pump ────────────────────────────────────────────────────────────────

#[test]
fn test_pump_ticks_once_per_call_after_launch() {
    let mut launched = launch(&["320", "240"], StaticHostBridge::default());
    assert_eq!(launched.pump.toolkit().task_runs(), 0);

    for _ in 0..3 {
        launched.pump.tick();
    }

    assert_eq!(launched.pump.toolkit().task_runs(), 3);
    assert_eq!(launched.pump.frames(), 3);
}
