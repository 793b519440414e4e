//! Command-line surface of the native launcher and the wiring behind it.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt::writer::MakeWriterExt, EnvFilter};

use lvcraft_core::{parse_dimension, LaunchArgs};
use lvcraft_launcher::infrastructure::{
    demos::builtin_registry,
    host_bridge::{layout_file_present, StaticHostBridge},
    host_loop::{run_host_loop, HostLoopSettings},
    storage::{load_config, LauncherConfig},
    toolkit::HeadlessToolkit,
};
use lvcraft_launcher::Launcher;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// LVCraft preview launcher.
///
/// Positional arguments are parsed leniently: anything that is not a
/// positive number means "unknown" and falls back to the host canvas size,
/// then to 320x240.
#[derive(Debug, Parser)]
#[command(name = "lvcraft-launcher", version)]
pub struct Cli {
    /// Display width in pixels.
    #[arg(allow_hyphen_values = true)]
    width: Option<String>,

    /// Display height in pixels.
    #[arg(allow_hyphen_values = true)]
    height: Option<String>,

    /// Built-in demo to run, or "default".
    demo: Option<String>,

    /// TOML configuration file.  A missing file means defaults.
    #[arg(long, env = "LVCRAFT_CONFIG")]
    config: Option<PathBuf>,

    /// Designer layout document.  When usable, no built-in demo runs.
    #[arg(long, env = "LVCRAFT_LAYOUT")]
    layout: Option<PathBuf>,

    /// Canvas width the host reports (0 = unknown).
    #[arg(long, env = "LVCRAFT_CANVAS_WIDTH")]
    canvas_width: Option<i32>,

    /// Canvas height the host reports (0 = unknown).
    #[arg(long, env = "LVCRAFT_CANVAS_HEIGHT")]
    canvas_height: Option<i32>,

    /// Milliseconds between frame pump ticks.
    #[arg(long, env = "LVCRAFT_FRAME_INTERVAL_MS")]
    frame_interval_ms: Option<u64>,

    /// Exit after this many ticks.
    #[arg(long)]
    max_frames: Option<u64>,

    /// Print the built-in demo names and exit.
    #[arg(long)]
    list_demos: bool,
}

impl Cli {
    fn launch_args(&self) -> LaunchArgs {
        LaunchArgs {
            width: self.width.as_deref().map_or(0, parse_dimension),
            height: self.height.as_deref().map_or(0, parse_dimension),
            demo: self.demo.clone(),
        }
    }

    /// Applies command-line overrides on top of the file configuration.
    fn merge_into(&self, mut config: LauncherConfig) -> LauncherConfig {
        if let Some(layout) = &self.layout {
            config.preview.layout = Some(layout.clone());
        }
        if let Some(width) = self.canvas_width {
            config.preview.canvas_width = width;
        }
        if let Some(height) = self.canvas_height {
            config.preview.canvas_height = height;
        }
        if let Some(ms) = self.frame_interval_ms {
            config.host.frame_interval_ms = ms;
        }
        if self.max_frames.is_some() {
            config.host.max_frames = self.max_frames;
        }
        config
    }
}

/// Runs the launcher until Ctrl-C or the frame limit.
///
/// # Errors
///
/// Fails on an unreadable or malformed config file and on platform
/// bring-up failure.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.list_demos {
        for name in builtin_registry().names() {
            println!("{name}");
        }
        return Ok(());
    }

    let file_config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => LauncherConfig::default(),
    };
    let config = cli.merge_into(file_config);

    // `RUST_LOG` wins over the config file.  Warnings and errors go to
    // stderr, everything else to stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.host.log_level)),
        )
        .with_writer(std::io::stderr.with_max_level(Level::WARN).or_else(std::io::stdout))
        .with_ansi(colour_output(
            std::io::stdout().is_terminal(),
            std::io::stderr().is_terminal(),
        ))
        .init();

    info!("LVCraft launcher starting");

    let external_layout = config
        .preview
        .layout
        .as_deref()
        .is_some_and(layout_file_present);
    let host = StaticHostBridge::new(config.preview.canvas_width, config.preview.canvas_height)
        .with_external_layout(external_layout);

    let launcher = Launcher::new(Arc::new(host), builtin_registry());
    let mut launched = launcher
        .launch(&cli.launch_args(), HeadlessToolkit::new())
        .context("starting the launcher")?;

    let settings = HostLoopSettings {
        frame_interval: config.host.frame_interval(),
        max_frames: config.host.max_frames,
    };
    info!(
        "frame pump running every {} ms. Press Ctrl-C to exit.",
        settings.frame_interval.as_millis()
    );

    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_err() {
            // No signal handler available; run until the frame limit.
            std::future::pending::<()>().await;
        }
        info!("shutdown signal received");
    };

    let exit = run_host_loop(&mut launched.pump, settings, shutdown).await;
    info!(?exit, frames = launched.pump.frames(), "LVCraft launcher stopped");
    Ok(())
}

/// Colour codes only when both log streams are terminals; redirected output
/// stays plain.
fn colour_output(stdout_is_terminal: bool, stderr_is_terminal: bool) -> bool {
    stdout_is_terminal && stderr_is_terminal
}

// ── Tests ─────────────────────────────────────────────────────────────────────
