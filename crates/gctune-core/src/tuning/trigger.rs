//! Collector growth-trigger parsing (`"100"` or `"off"`).

/// Token that disables percentage-based triggering.
pub const DISABLED_TOKEN: &str = "off";

/// Requested collector trigger state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GcTrigger {
    /// Trigger a cycle when the heap grows by this percentage since the last
    /// one.
    Percent(u32),
    /// Percentage-based triggering disabled; collection relies solely on the
    /// memory ceiling.
    Disabled,
}

/// Parse a collector-percentage field.
///
/// A positive integer maps to [`GcTrigger::Percent`]; the exact token `"off"`
/// maps to [`GcTrigger::Disabled`]. Everything else (empty, zero, negative,
/// non-numeric) is `None` and callers take no action.
pub fn parse_gc_trigger(s: &str) -> Option<GcTrigger> {
    if s == DISABLED_TOKEN {
        return Some(GcTrigger::Disabled);
    }
    match s.parse::<i64>() {
        Ok(n) if n > 0 && n <= u32::MAX as i64 => Some(GcTrigger::Percent(n as u32)),
        _ => None,
    }
}
