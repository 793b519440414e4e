//! Positional launch arguments: `[WIDTH] [HEIGHT] [DEMO]`.
//!
//! Hosts pass these as plain strings and are not always careful about it, so
//! parsing never fails.  Dimensions are read the way C's `atoi` reads them
//! (leading digits only, anything else is `0`), and a `0` simply means "ask
//! the next source" during [`Resolution::resolve`].
//!
//! [`Resolution::resolve`]: crate::Resolution::resolve

/// Demo name that means "use the compiled-in default demo".
pub const DEFAULT_DEMO_ALIAS: &str = "default";

/// Parsed positional arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchArgs {
    /// Requested width; `<= 0` means unspecified.
    pub width: i32,
    /// Requested height; `<= 0` means unspecified.
    pub height: i32,
    /// Requested demo name, if any.  May be [`DEFAULT_DEMO_ALIAS`].
    pub demo: Option<String>,
}

impl LaunchArgs {
    /// Parses arguments that follow the program name.
    ///
    /// Missing positions default to `0` / `None`; extra positions are ignored.
    pub fn from_positional<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut iter = args.into_iter();
        let width = iter.next().map_or(0, |s| parse_dimension(s.as_ref()));
        let height = iter.next().map_or(0, |s| parse_dimension(s.as_ref()));
        let demo = iter.next().map(|s| s.as_ref().to_string());
        Self {
            width,
            height,
            demo,
        }
    }

    /// Parses a full `argv`, skipping the program name at index 0.
    pub fn from_argv<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_positional(argv.into_iter().skip(1))
    }

    /// The demo name to look up, or `None` when the default demo was asked
    /// for (explicitly via [`DEFAULT_DEMO_ALIAS`] or by omission).
    pub fn requested_demo(&self) -> Option<&str> {
        self.demo
            .as_deref()
            .filter(|name| *name != DEFAULT_DEMO_ALIAS)
    }
}

/// Parses a decimal dimension with `atoi` leniency.
///
/// Leading ASCII whitespace is skipped, one optional sign is accepted, and
/// digits are consumed until the first non-digit.  No digits yields `0`.
/// Values outside `i32` saturate at `i32::MIN` / `i32::MAX`.
pub fn parse_dimension(input: &str) -> i32 {
    let trimmed = input.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value * 10 + i64::from(byte - b'0');
        if value > i64::from(i32::MAX) + 1 {
            break;
        }
    }
    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

// ── Tests ─────────────────────────────────────────────────────────────────────
