//! Toolkit implementations.
//!
//! The real GUI toolkit is linked in by the embedding build.  What ships in
//! this crate is [`HeadlessToolkit`], an in-memory stand-in that records the
//! objects and devices it is asked to create.  The native binary runs on it
//! and every test inspects it.

pub mod headless;

pub use headless::{HeadlessToolkit, ObjectKind, ObjectRecord};
