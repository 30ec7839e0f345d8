//! Plain number detection for the calculator fast path.
//!
//! Input that is already a single number skips sanitizing and tokenizing
//! entirely. Recognition follows the decimal literal grammar of the JVM
//! `Double.valueOf`, which is what keypad frontends historically fed us.

/// Try to read the whole input as one number.
///
/// Returns `None` if the input is anything other than a single literal:
/// 1. Surrounding control characters and spaces are ignored
/// 2. An optional leading sign is allowed
/// 3. `NaN` and `Infinity` are accepted, case-sensitive
/// 4. Otherwise a decimal literal with optional exponent and type suffix
pub fn parse_plain_number(input: &str) -> Option<f64> {
    let trimmed = input.trim_matches(|c: char| c <= ' ');

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    match unsigned {
        "NaN" => return Some(f64::NAN),
        "Infinity" if negative => return Some(f64::NEG_INFINITY),
        "Infinity" => return Some(f64::INFINITY),
        _ => {}
    }

    // The type suffix only selects float vs double on the JVM; it never
    // changes the parsed digits.
    let body = unsigned
        .strip_suffix(['f', 'F', 'd', 'D'])
        .unwrap_or(unsigned);

    if !is_decimal_literal(body) {
        return None;
    }

    let value: f64 = body.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Check that `text` is `digits [. digits] [(e|E) [sign] digits]` with at
/// least one mantissa digit.
fn is_decimal_literal(text: &str) -> bool {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
        None => (text, None),
    };

    let mut digits = 0;
    let mut dots = 0;
    for c in mantissa.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    if digits == 0 || dots > 1 {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && exp.chars().all(|c| c.is_ascii_digit())
        }
    }
}
