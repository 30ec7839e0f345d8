//! Default number-to-text conversion for results.
//!
//! Matches what keypad frontends expect from a double: always a fractional
//! part, `Infinity`/`NaN` spelled out, and scientific notation outside
//! `[1e-3, 1e7)`.

use std::fmt::{self, Write};

const PLAIN_MIN: f64 = 1e-3;
const PLAIN_MAX: f64 = 1e7;

/// Format a result as a `String`.
pub fn format_number(value: f64) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_number(&mut out, value);
    out
}

/// Write a result into any formatter sink.
pub fn write_number<W: Write>(out: &mut W, value: f64) -> fmt::Result {
    if value.is_nan() {
        return out.write_str("NaN");
    }
    if value.is_infinite() {
        return out.write_str(if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        });
    }
    if value == 0.0 {
        return out.write_str(if value.is_sign_negative() { "-0.0" } else { "0.0" });
    }

    let magnitude = value.abs();
    if (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        let plain = value.to_string();
        out.write_str(&plain)?;
        if !plain.contains('.') {
            out.write_str(".0")?;
        }
        return Ok(());
    }

    let scientific = format!("{value:E}");
    match scientific.split_once('E') {
        Some((mantissa, exponent)) if !mantissa.contains('.') => {
            write!(out, "{mantissa}.0E{exponent}")
        }
        _ => out.write_str(&scientific),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_keep_fraction() {
        assert_eq!(format_number(5.0), "5.0");
        assert_eq!(format_number(20.0), "20.0");
        assert_eq!(format_number(-5.0), "-5.0");
        assert_eq!(format_number(9999999.0), "9999999.0");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(1234567.5), "1234567.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(0.001), "0.001");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(-0.0), "-0.0");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(format_number(1e7), "1.0E7");
        assert_eq!(format_number(12345678.0), "1.2345678E7");
        assert_eq!(format_number(0.0001), "1.0E-4");
        assert_eq!(format_number(1.5e-4), "1.5E-4");
        assert_eq!(format_number(-2.5e20), "-2.5E20");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
