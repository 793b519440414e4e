//! Host property values, reduced to what the launcher reads from them.
//!
//! The browser bridge converts each JavaScript property it reads into a
//! [`HostValue`] and then asks it for a flag or a dimension.  Keeping the
//! mapping here lets it be tested without a JavaScript engine.

/// A property read from the host page.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    /// `undefined`, `null`, a missing parent object, or a getter that threw.
    Missing,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Any other object (including arrays and functions).
    Object,
}

impl HostValue {
    /// JavaScript truthiness.
    pub fn is_truthy(&self) -> bool {
        match self {
            HostValue::Missing => false,
            HostValue::Bool(flag) => *flag,
            HostValue::Number(n) => *n != 0.0 && !n.is_nan(),
            HostValue::Text(text) => !text.is_empty(),
            HostValue::Object => true,
        }
    }

    /// A canvas dimension in whole pixels, `0` when unknown.
    ///
    /// Only finite numbers count; fractions are truncated and values beyond
    /// `i32::MAX` saturate.  Negative sizes, strings and everything else read
    /// as `0`.
    pub fn as_dimension(&self) -> i32 {
        match self {
            HostValue::Number(n) if n.is_finite() && *n > 0.0 => *n as i32,
            _ => 0,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
