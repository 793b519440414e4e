//! FramePump: one toolkit task-handler run per host tick.
//!
//! The pump owns the toolkit once startup is done.  It has no loop of its
//! own; whoever hosts the module calls [`FramePump::tick`] at its own cadence
//! (a `requestAnimationFrame` callback in the browser, a timer natively) and
//! stops calling it to shut down.

use std::time::Duration;

use crate::application::toolkit::GuiToolkit;

/// Drives the toolkit's task handler.
#[derive(Debug)]
pub struct FramePump<T> {
    toolkit: T,
    frames: u64,
}

impl<T: GuiToolkit> FramePump<T> {
    pub fn new(toolkit: T) -> Self {
        Self { toolkit, frames: 0 }
    }

    /// Runs the task handler once.  Never blocks.
    ///
    /// Returns the toolkit's hint for how long it can idle.
    pub fn tick(&mut self) -> Duration {
        let idle = self.toolkit.task_handler();
        self.frames += 1;
        idle
    }

    /// Number of completed ticks.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    pub fn toolkit_mut(&mut self) -> &mut T {
        &mut self.toolkit
    }

    pub fn into_toolkit(self) -> T {
        self.toolkit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::toolkit::HeadlessToolkit;

    #[test]
    fn test_tick_runs_task_handler_exactly_once() {
        // Arrange
        let mut pump = FramePump::new(HeadlessToolkit::new());

        // Act
        pump.tick();

        // Assert
        assert_eq!(pump.toolkit().task_runs(), 1);
        assert_eq!(pump.frames(), 1);
    }

    #[test]
    fn test_frames_count_every_tick() {
        let mut pump = FramePump::new(HeadlessToolkit::new());
        for _ in 0..10 {
            pump.tick();
        }
        assert_eq!(pump.frames(), 10);
        assert_eq!(pump.into_toolkit().task_runs(), 10);
    }

    #[test]
    fn test_tick_returns_toolkit_idle_hint() {
        let mut pump = FramePump::new(HeadlessToolkit::new());
        assert!(pump.tick() > Duration::ZERO);
    }
}
