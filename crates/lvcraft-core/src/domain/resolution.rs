//! Screen resolution and the layered fallback that produces it.
//!
//! # Where does the resolution come from?
//!
//! The Designer host normally passes `WIDTH HEIGHT` as the first two
//! positional arguments.  Some webviews end up passing `0` or garbage, so the
//! launcher falls back in three layers:
//!
//! ```text
//! argv[1], argv[2]          (both > 0?  done, the host is never asked)
//!        │ otherwise
//!        ▼
//! host canvas width/height  (each reported value > 0 overrides its dimension)
//!        │ still <= 0
//!        ▼
//! 320 x 240                 (applied per dimension)
//! ```
//!
//! The result is always strictly positive.  There is no error path.

use std::fmt;

use tracing::debug;

/// Width used when neither the arguments nor the host supply one.
pub const DEFAULT_WIDTH: u32 = 320;

/// Height used when neither the arguments nor the host supply one.
pub const DEFAULT_HEIGHT: u32 = 240;

/// A validated display resolution in pixels.
///
/// Both dimensions are guaranteed to be `> 0`.  The only constructors are
/// [`Resolution::new`] (which rejects zero) and [`Resolution::resolve`]
/// (which cannot produce zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    /// Creates a resolution from explicit dimensions.
    ///
    /// Returns `None` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }

    /// Resolves the final resolution from the requested dimensions.
    ///
    /// `requested_width` / `requested_height` are the parsed command-line
    /// values (`0` when absent).  `host_canvas` is invoked at most once, and
    /// only when at least one requested dimension is `<= 0`.  It returns the
    /// host's `(width, height)`, where `0` means "unknown".
    ///
    /// When the host is consulted, every positive value it reports replaces
    /// the corresponding dimension, even one that was already positive.
    pub fn resolve<F>(requested_width: i32, requested_height: i32, host_canvas: F) -> Self
    where
        F: FnOnce() -> (i32, i32),
    {
        let mut width = requested_width;
        let mut height = requested_height;

        if width <= 0 || height <= 0 {
            let (canvas_width, canvas_height) = host_canvas();
            debug!(
                canvas_width,
                canvas_height, "requested resolution incomplete; consulted host canvas"
            );
            if canvas_width > 0 {
                width = canvas_width;
            }
            if canvas_height > 0 {
                height = canvas_height;
            }
        }

        Self {
            width: positive_or(width, DEFAULT_WIDTH),
            height: positive_or(height, DEFAULT_HEIGHT),
        }
    }

    /// Horizontal resolution in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Vertical resolution in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

fn positive_or(value: i32, fallback: u32) -> u32 {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .unwrap_or(fallback)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
