//! Built-in demo bookkeeping.
//!
//! - **`registry`** – the ordered, read-only list of named demos plus the
//!   compiled-in default.
//! - **`selection`** – the decision of what (if anything) to launch, given the
//!   requested name and whether the host supplies its own layout.

pub mod registry;
pub mod selection;
