//! LVCraft launcher, native entry point.
//!
//! Runs the same startup sequence as the browser build, with this process
//! standing in for the Designer host: canvas size and layout come from flags
//! or the config file, and a timer drives the frame pump.
//!
//! # Usage
//!
//! ```text
//! lvcraft-launcher [OPTIONS] [WIDTH] [HEIGHT] [DEMO]
//!
//! Arguments:
//!   [WIDTH]   Display width; 0 or junk means "ask the host"
//!   [HEIGHT]  Display height; 0 or junk means "ask the host"
//!   [DEMO]    Built-in demo name, or "default"
//!
//! Options:
//!   --config <PATH>            TOML config file        [env: LVCRAFT_CONFIG]
//!   --layout <PATH>            Designer layout JSON    [env: LVCRAFT_LAYOUT]
//!   --canvas-width <PX>        Host canvas width       [env: LVCRAFT_CANVAS_WIDTH]
//!   --canvas-height <PX>       Host canvas height      [env: LVCRAFT_CANVAS_HEIGHT]
//!   --frame-interval-ms <MS>   Tick period             [env: LVCRAFT_FRAME_INTERVAL_MS]
//!   --max-frames <N>           Exit after N ticks
//!   --list-demos               Print demo names and exit
//! ```
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()               -- optional TOML file
//!  └─ StaticHostBridge            -- canvas size + layout presence
//!  └─ Launcher::launch()          -- resolution, platform, demo
//!  └─ run_host_loop()             -- ticks until Ctrl-C / frame limit
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod cli;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use clap::Parser;

    cli::run(cli::Cli::parse()).await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
