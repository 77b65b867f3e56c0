//! Parsing of user-declared axis bounds.
//!
//! Bounds are persisted as a pair of raw strings. A pair resolves to a
//! concrete [`Domain`] only when both ends are present, non-zero and numeric;
//! anything else means "fall back to the data extent".
//!
//! A declared bound of `0` is treated exactly like an empty one. Dashboards
//! persisted with a zero bound have always rendered with the data extent, and
//! that behavior is kept as-is.

use crate::core::Domain;

/// Raw declared bounds of one axis as persisted in view properties.
pub type RawBounds = [Option<String>; 2];

/// Resolves declared bounds into a domain, or `None` when unset.
#[must_use]
pub fn parse_bounds(bounds: Option<&RawBounds>) -> Option<Domain> {
    let [min, max] = bounds?;
    let min = parse_bound(min.as_deref()?)?;
    let max = parse_bound(max.as_deref()?)?;
    Domain::finite(min, max)
}

fn parse_bound(raw: &str) -> Option<f64> {
    let value = coerce_number(raw);
    // Empty strings coerce to zero, so this also rejects blank bounds.
    if raw.is_empty() || value.is_nan() || value == 0.0 {
        return None;
    }
    Some(value)
}

/// Loose string-to-number coercion used for persisted settings.
///
/// Accepts surrounding whitespace, signed decimal and exponent notation,
/// `0x`/`0o`/`0b` integer literals and `Infinity`. Blank input is zero and
/// everything else is NaN.
#[must_use]
pub fn coerce_number(raw: &str) -> f64 {
    let text = raw.trim();
    if text.is_empty() {
        return 0.0;
    }

    if let Some(value) = parse_radix_literal(text) {
        return value;
    }

    let (sign, unsigned) = match text.as_bytes()[0] {
        b'-' => (-1.0, &text[1..]),
        b'+' => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }
    if !is_decimal_literal(unsigned) {
        return f64::NAN;
    }
    unsigned.parse::<f64>().map_or(f64::NAN, |value| sign * value)
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &text[2..];
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        let digit = c.to_digit(radix)?;
        Some(acc * f64::from(radix) + f64::from(digit))
    });
    Some(value.unwrap_or(f64::NAN))
}

// `str::parse::<f64>` also accepts `inf` and `nan` spellings; settings only
// allow digits with an optional fraction and exponent.
fn is_decimal_literal(text: &str) -> bool {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(index) => (&text[..index], Some(&text[index + 1..])),
        None => (text, None),
    };

    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if integer.is_empty() && fraction.is_empty() {
        return false;
    }
    if !all_digits(integer) || !all_digits(fraction) {
        return false;
    }

    match exponent {
        None => true,
        Some(exponent) => {
            let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            !digits.is_empty() && all_digits(digits)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min: Option<&str>, max: Option<&str>) -> RawBounds {
        [min.map(str::to_owned), max.map(str::to_owned)]
    }

    #[test]
    fn absent_pair_is_unset() {
        assert_eq!(parse_bounds(None), None);
        assert_eq!(parse_bounds(Some(&bounds(None, None))), None);
    }

    #[test]
    fn empty_or_zero_end_is_unset() {
        assert_eq!(parse_bounds(Some(&bounds(Some(""), Some("10")))), None);
        assert_eq!(parse_bounds(Some(&bounds(Some("0"), Some("10")))), None);
        assert_eq!(parse_bounds(Some(&bounds(Some("-5"), Some("0.0")))), None);
    }

    #[test]
    fn non_numeric_end_is_unset() {
        assert_eq!(parse_bounds(Some(&bounds(Some("abc"), Some("5")))), None);
        assert_eq!(parse_bounds(Some(&bounds(Some("5"), Some("nan")))), None);
        assert_eq!(parse_bounds(Some(&bounds(Some("inf"), Some("5")))), None);
    }

    #[test]
    fn numeric_pair_is_parsed() {
        assert_eq!(
            parse_bounds(Some(&bounds(Some("-5"), Some("5")))),
            Some(Domain::new(-5.0, 5.0))
        );
        assert_eq!(
            parse_bounds(Some(&bounds(Some(" 1e3 "), Some(".5")))),
            Some(Domain::new(1000.0, 0.5))
        );
    }

    #[test]
    fn infinite_bound_is_unset() {
        assert_eq!(parse_bounds(Some(&bounds(Some("-Infinity"), Some("5")))), None);
    }

    #[test]
    fn coercion_matches_loose_number_rules() {
        assert_eq!(coerce_number("  "), 0.0);
        assert_eq!(coerce_number("0x1F"), 31.0);
        assert_eq!(coerce_number("0b101"), 5.0);
        assert_eq!(coerce_number("+2.5e-1"), 0.25);
        assert_eq!(coerce_number("5."), 5.0);
        assert!(coerce_number("1,5").is_nan());
        assert!(coerce_number("0xZZ").is_nan());
        assert!(coerce_number("e5").is_nan());
        assert!(coerce_number("-").is_nan());
    }
}
