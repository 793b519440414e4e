//! Domain values shared by the launcher: the screen [`Resolution`] and the
//! 24-bit [`Color`] used by host-side styling helpers.
//!
//! [`Resolution`]: resolution::Resolution
//! [`Color`]: color::Color

pub mod color;
pub mod resolution;
