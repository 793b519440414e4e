//! Outcome of demo selection.

use crate::demo::registry::DemoEntry;

/// What the launcher should build before starting the frame pump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoSelection<'a, F> {
    /// The host supplies its own layout; launch nothing.
    Deferred,
    /// A registry entry matched the requested name.
    Registered(&'a DemoEntry<F>),
    /// The compiled-in default demo.
    ///
    /// `unmatched` carries the requested name when a lookup failed, so the
    /// caller can report it.
    Default {
        launch: &'a F,
        unmatched: Option<String>,
    },
}

impl<'a, F> DemoSelection<'a, F> {
    /// The entry point to invoke, if any.
    pub fn entry_point(&self) -> Option<&'a F> {
        match self {
            DemoSelection::Deferred => None,
            DemoSelection::Registered(entry) => Some(&entry.launch),
            DemoSelection::Default { launch, .. } => Some(*launch),
        }
    }

    /// Human-readable label for logging (`"<host layout>"`, the entry name,
    /// or `"<default>"`).
    pub fn label(&self) -> &'static str {
        match self {
            DemoSelection::Deferred => "<host layout>",
            DemoSelection::Registered(entry) => entry.name,
            DemoSelection::Default { .. } => "<default>",
        }
    }

    /// The name that failed to resolve, if the default was a fallback.
    pub fn unmatched(&self) -> Option<&str> {
        match self {
            DemoSelection::Default { unmatched, .. } => unmatched.as_deref(),
            _ => None,
        }
    }
}
