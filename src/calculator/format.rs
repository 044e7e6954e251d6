//! Number rendering and parsing shared by the display, the equation trace
//! and the history log.

/// The display text of an empty entry.
pub const ZERO: &str = "0";

/// Magnitudes at or beyond this switch to exponent notation.
const EXPONENT_ABOVE: f64 = 1e16;
/// Non-zero magnitudes below this switch to exponent notation.
const EXPONENT_BELOW: f64 = 1e-6;

/// Format a value for display.
///
/// Integral values have no fractional part, everything else uses the
/// shortest representation that parses back to the same value. Negative
/// zero is shown as `0`.
///
/// Exponent form is also what a plain operand shows after a raw negate or
/// percent, and it stays editable text: typing `5` after `-1e-7` gives
/// `-1e-75`.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return ZERO.to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

/// Parse display text back into a value.
///
/// An empty string reads as zero. Returns `None` for anything that is not
/// a finite decimal number.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = if text.is_empty() { ZERO } else { text };
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
