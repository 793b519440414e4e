//! The host query seam.
//!
//! The hosting environment (the Designer webview, or the native binary
//! standing in for it) answers three questions.  Every answer is best-effort:
//! an implementation that cannot find out MUST return `0` / `false` instead
//! of failing, and callers treat those values as "not available".

/// Queries the launcher makes against its host.
#[cfg_attr(test, mockall::automock)]
pub trait HostBridge {
    /// `true` if the host will build the UI itself from a layout it owns.
    fn has_external_layout(&self) -> bool;

    /// Width of the host-owned canvas in pixels, or `0` if unknown.
    fn canvas_width(&self) -> i32;

    /// Height of the host-owned canvas in pixels, or `0` if unknown.
    fn canvas_height(&self) -> i32;
}
