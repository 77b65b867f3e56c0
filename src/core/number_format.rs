//! Magnitude-dependent number formatting for axis ticks and legends.

/// Maximum decimals (small branch) and significant digits (SI branch).
pub const MAX_DECIMALS: usize = 3;

const SI_PREFIXES: [&str; 9] = ["", "k", "M", "G", "T", "P", "E", "Z", "Y"];

/// Formats a value for display.
///
/// Values in `[-1, 1]` use fixed-point notation with at most three decimals
/// (`0.032`, `-0.5`, `1`). Larger magnitudes use an SI prefix with at most
/// three significant digits (`2.45M`, `1.2k`). Trailing zeros are dropped in
/// both branches.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }

    if (-1.0..=1.0).contains(&value) {
        format_small_number(value)
    } else {
        format_large_number(value)
    }
}

/// Wraps [`format_number`] output with a prefix and suffix.
#[must_use]
pub fn format_number_with_affixes(value: f64, prefix: &str, suffix: &str) -> String {
    let body = format_number(value);
    let mut out = String::with_capacity(prefix.len() + body.len() + suffix.len());
    out.push_str(prefix);
    out.push_str(&body);
    out.push_str(suffix);
    out
}

fn format_small_number(value: f64) -> String {
    let text = round_to_decimals(value.abs(), MAX_DECIMALS);
    let body = trim_insignificant_zeros(&text);
    with_sign(value, body)
}

fn format_large_number(value: f64) -> String {
    let (digits, exponent) = round_to_significant(value.abs(), MAX_DECIMALS);
    let prefix_index = exponent.div_euclid(3).clamp(0, SI_PREFIXES.len() as i32 - 1);
    // |value| > 1 keeps the exponent non-negative, so the integer part is never empty.
    let integer_len = (exponent - prefix_index * 3 + 1).max(1) as usize;

    let scaled = if integer_len >= digits.len() {
        let mut padded = digits;
        padded.extend(std::iter::repeat_n('0', integer_len - padded.len()));
        padded
    } else {
        format!("{}.{}", &digits[..integer_len], &digits[integer_len..])
    };

    let mut body = trim_insignificant_zeros(&scaled).to_owned();
    body.push_str(SI_PREFIXES[prefix_index as usize]);
    with_sign(value, &body)
}

/// Rounds a non-negative finite value to `decimals` fraction digits.
///
/// Halfway cases round up, so `0.0625` keeps three decimals as `0.063`.
fn round_to_decimals(value: f64, decimals: usize) -> String {
    let (integer, fraction) = exact_decimal(value);
    let mut integer_len = integer.len();
    let mut digits = integer.into_bytes();
    digits.extend(fraction.bytes().take(decimals));
    digits.resize(integer_len + decimals, b'0');

    if fraction.as_bytes().get(decimals).is_some_and(|d| *d >= b'5')
        && increment_digits(&mut digits)
    {
        integer_len += 1;
    }

    let (integer, fraction) = digits.split_at(integer_len);
    let mut out: String = integer.iter().copied().map(char::from).collect();
    if !fraction.is_empty() {
        out.push('.');
        out.extend(fraction.iter().copied().map(char::from));
    }
    out
}

/// Rounds a value greater than one to `significant` digits.
///
/// Returns the digits and the decimal exponent of the first one. Halfway
/// cases round up (`1005` -> `101`, exponent 3).
fn round_to_significant(value: f64, significant: usize) -> (String, i32) {
    let (integer, fraction) = exact_decimal(value);
    let mut all = integer.into_bytes();
    let integer_len = all.len();
    all.extend(fraction.bytes());

    let leading = all.iter().position(|d| *d != b'0').unwrap_or(all.len());
    let mut exponent = integer_len as i32 - leading as i32 - 1;
    let significant_digits = &all[leading..];

    let mut digits: Vec<u8> = significant_digits.iter().take(significant).copied().collect();
    digits.resize(significant, b'0');
    if significant_digits.get(significant).is_some_and(|d| *d >= b'5')
        && increment_digits(&mut digits)
    {
        digits.truncate(significant);
        exponent += 1;
    }

    (digits.into_iter().map(char::from).collect(), exponent)
}

/// Adds one in the last place of an ASCII digit string. Returns `true` when
/// the carry added a new leading digit.
fn increment_digits(digits: &mut Vec<u8>) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    digits.insert(0, b'1');
    true
}

/// Exact decimal expansion of a non-negative finite value, split into
/// integer and fraction digits.
fn exact_decimal(value: f64) -> (String, String) {
    let text = format!("{:.*}", fraction_digit_count(value), value);
    match text.split_once('.') {
        Some((integer, fraction)) => (integer.to_owned(), fraction.to_owned()),
        None => (text, String::new()),
    }
}

/// Number of fraction digits in the exact decimal expansion of `value`.
///
/// A value with `k` binary fraction digits has exactly `k` decimal ones.
fn fraction_digit_count(value: f64) -> usize {
    let bits = value.to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1_u64 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1_u64 << 52), biased_exponent - 1075)
    };
    if mantissa == 0 {
        return 0;
    }

    let exponent = exponent + mantissa.trailing_zeros() as i32;
    if exponent < 0 { (-exponent) as usize } else { 0 }
}

fn with_sign(value: f64, body: &str) -> String {
    // Negative values that round to zero print without a sign.
    if value.is_sign_negative() && body.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        format!("-{body}")
    } else {
        body.to_owned()
    }
}

fn trim_insignificant_zeros(text: &str) -> &str {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.')
}
