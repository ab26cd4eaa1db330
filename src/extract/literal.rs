//! Integer literal parsing for enumerator values and array counts.

/// Parse an integer literal, inferring the base from its prefix.
///
/// Accepts an optional sign followed by decimal digits, `0x` hex, `0o` or
/// C-style leading-zero octal, or `0b` binary. Surrounding whitespace is
/// ignored. Type suffixes (`U`, `L`, ...) and expressions yield `None`.
///
/// A leading zero means octal as in C, so `010` is 8. Base-prefix parsers
/// that reject `010` outright would keep such a value as text instead.
///
/// The result covers both signed and unsigned 64-bit constants, from
/// `i64::MIN` to `u64::MAX`; anything wider yields `None`.
pub fn parse_int_literal(text: &str) -> Option<i128> {
    let text = text.trim();
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = if let Some(rest) = strip_prefix_ci(unsigned, "0x") {
        (16, rest)
    } else if let Some(rest) = strip_prefix_ci(unsigned, "0o") {
        (8, rest)
    } else if let Some(rest) = strip_prefix_ci(unsigned, "0b") {
        (2, rest)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    LITERAL_RANGE.contains(&value).then_some(value)
}

const LITERAL_RANGE: std::ops::RangeInclusive<i128> = (i64::MIN as i128)..=(u64::MAX as i128);

fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}
