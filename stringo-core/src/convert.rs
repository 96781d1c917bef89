// stringo-core/src/convert.rs
//! Lenient numeric conversion.
//!
//! License: MIT OR APACHE 2.0

use log::trace;

/// Converts `s` to `f64` after dropping every `thousands_separator` and
/// mapping `decimal_separator` to `.`. Returns `0.0` when nothing parses.
pub fn as_float64(s: &str, decimal_separator: char, thousands_separator: char) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let normalized: String = s
        .chars()
        .filter(|c| *c != thousands_separator)
        .map(|c| if c == decimal_separator { '.' } else { c })
        .collect();

    normalized.parse::<f64>().unwrap_or_else(|e| {
        trace!("as_float64: '{}' is not a number: {}", s, e);
        0.0
    })
}
