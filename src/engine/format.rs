//! Display formatting for numeric results.

const DECIMAL_SCALE: f64 = 1e10;
const LARGE_THRESHOLD: f64 = 1e10;
const SMALL_THRESHOLD: f64 = 1e-6;
/// Shortest-form text switches to exponent notation from this magnitude up.
const PLAIN_EXPONENT_THRESHOLD: f64 = 1e21;

/// Render `value` for display.
///
/// Integers print bare, other values are rounded to 10 decimal places, and
/// magnitudes outside `[1e-6, 1e10)` switch to scientific notation with six
/// fractional digits. The returned string never feeds back into stored
/// results.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        return format!("{}", value);
    }

    let rounded = (value * DECIMAL_SCALE).round() / DECIMAL_SCALE;

    if rounded.abs() >= LARGE_THRESHOLD {
        return exponential(rounded);
    }
    if value.abs() < SMALL_THRESHOLD {
        return exponential(value);
    }

    format!("{}", rounded)
}

/// Shortest text that reads back as `value`, the way operands are echoed in
/// history (`1e+21`, `1.5e-7`, `2.5`). Unlike [`format_number`] nothing is
/// rounded.
pub fn plain_number(value: f64) -> String {
    if !value.is_finite() {
        return format_number(value);
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= PLAIN_EXPONENT_THRESHOLD || magnitude < SMALL_THRESHOLD {
        return signed_exponent(format!("{:e}", value));
    }
    format!("{}", value)
}

/// `1.234568e+10` style, with an explicit exponent sign.
fn exponential(value: f64) -> String {
    signed_exponent(format!("{:.6e}", value))
}

fn signed_exponent(formatted: String) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}
