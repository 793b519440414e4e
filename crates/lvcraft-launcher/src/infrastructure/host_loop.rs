//! Native host loop.
//!
//! In the browser the page owns the loop (`requestAnimationFrame` calls the
//! exported tick).  Natively this module plays the page's part: it ticks the
//! [`FramePump`] on a fixed interval until a shutdown future resolves or a
//! frame limit is reached.  The pump itself still knows nothing about time.

use std::future::Future;
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::application::frame_pump::FramePump;
use crate::application::toolkit::GuiToolkit;

/// Why the host loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostLoopExit {
    /// The shutdown future resolved (Ctrl-C in the binary).
    Shutdown,
    /// `max_frames` ticks completed.
    FrameLimit,
}

/// Cadence and limits for [`run_host_loop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostLoopSettings {
    pub frame_interval: Duration,
    pub max_frames: Option<u64>,
}

/// Ticks `pump` every `settings.frame_interval` until `shutdown` resolves or
/// `settings.max_frames` ticks have run.
///
/// Shutdown is checked before each tick, so a shutdown future that is already
/// complete runs zero frames.
pub async fn run_host_loop<T, S>(
    pump: &mut FramePump<T>,
    settings: HostLoopSettings,
    shutdown: S,
) -> HostLoopExit
where
    T: GuiToolkit,
    S: Future<Output = ()>,
{
    let mut ticker = interval(settings.frame_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tokio::pin!(shutdown);

    let start = pump.frames();
    loop {
        if let Some(max) = settings.max_frames {
            if pump.frames() - start >= max {
                info!("frame limit of {max} reached");
                return HostLoopExit::FrameLimit;
            }
        }

        tokio::select! {
            biased;
            _ = &mut shutdown => {
                debug!(frames = pump.frames() - start, "host loop shutting down");
                return HostLoopExit::Shutdown;
            }
            _ = ticker.tick() => {
                pump.tick();
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
