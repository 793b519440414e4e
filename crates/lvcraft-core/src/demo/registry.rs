//! Static registry of selectable demos.
//!
//! The registry is an ordered list of `(name, entry point)` pairs plus one
//! default entry point.  Lookups are an exact-match linear scan; when two
//! entries share a name the earlier one wins.  The list is small and never
//! mutated after construction, so a `Vec` is all it needs.
//!
//! The entry point type `F` is left generic.  The launcher uses plain `fn`
//! pointers that receive the toolkit; tests can use anything `Copy`-able or
//! borrowable.

use crate::demo::selection::DemoSelection;

/// One named demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoEntry<F> {
    /// Name matched against the third positional argument.
    pub name: &'static str,
    /// Entry point that builds the demo screen.
    pub launch: F,
}

impl<F> DemoEntry<F> {
    pub const fn new(name: &'static str, launch: F) -> Self {
        Self { name, launch }
    }
}

/// Ordered demo list with a compiled-in default.
#[derive(Debug, Clone)]
pub struct DemoRegistry<F> {
    entries: Vec<DemoEntry<F>>,
    default_demo: F,
}

impl<F> DemoRegistry<F> {
    /// Creates a registry from `entries` (lookup order) and the default demo.
    pub fn new(entries: Vec<DemoEntry<F>>, default_demo: F) -> Self {
        Self {
            entries,
            default_demo,
        }
    }

    /// Finds the first entry whose name equals `name` exactly.
    pub fn find(&self, name: &str) -> Option<&DemoEntry<F>> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// The compiled-in default demo.
    pub fn default_demo(&self) -> &F {
        &self.default_demo
    }

    /// Registered names in lookup order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    /// Decides what to launch.
    ///
    /// - `external_layout == true`: nothing; the host builds the UI.
    /// - `requested == Some(name)`: the first entry named `name`, or the
    ///   default demo (with `unmatched` set) when no entry matches.
    /// - `requested == None`: the default demo.
    ///
    /// `requested` must already have the `"default"` alias filtered out; see
    /// [`LaunchArgs::requested_demo`](crate::LaunchArgs::requested_demo).
    pub fn select(&self, requested: Option<&str>, external_layout: bool) -> DemoSelection<'_, F> {
        if external_layout {
            return DemoSelection::Deferred;
        }

        match requested {
            Some(name) => match self.find(name) {
                Some(entry) => DemoSelection::Registered(entry),
                None => DemoSelection::Default {
                    launch: &self.default_demo,
                    unmatched: Some(name.to_string()),
                },
            },
            None => DemoSelection::Default {
                launch: &self.default_demo,
                unmatched: None,
            },
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
