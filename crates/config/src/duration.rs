//! Duration strings in the `1h30m`, `250ms`, `1.5s` notation.
//!
//! Grammar: an optional sign, then one or more `<number><unit>` pairs where
//! the number may carry a fraction and the unit is one of `ns`, `us`, `µs`,
//! `μs`, `ms`, `s`, `m`, `h`. The bare string `0` is also accepted.

use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Fraction digits beyond this many are ignored.
const MAX_FRACTION_DIGITS: usize = 20;

fn unit_nanos(unit: &str) -> Option<u128> {
    Some(match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => NANOS_PER_MICRO,
        "ms" => NANOS_PER_MILLI,
        "s" => NANOS_PER_SECOND,
        "m" => 60 * NANOS_PER_SECOND,
        "h" => 3600 * NANOS_PER_SECOND,
        _ => return None,
    })
}

fn leading_digits(s: &str) -> (&str, &str) {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    s.split_at(len)
}

/// Parse a duration string.
///
/// Returns `None` for malformed input, for totals above `i64::MAX`
/// nanoseconds, and for negative durations, which `Duration` cannot hold.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let (negative, mut s) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    if s == "0" {
        return Some(Duration::ZERO);
    }
    if s.is_empty() {
        return None;
    }

    let mut total: u128 = 0;
    while !s.is_empty() {
        let (int_digits, rest) = leading_digits(s);
        let (frac_digits, rest) = match rest.strip_prefix('.') {
            Some(after_dot) => leading_digits(after_dot),
            None => ("", rest),
        };
        if int_digits.is_empty() && frac_digits.is_empty() {
            return None;
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        if unit_len == 0 {
            return None;
        }
        let (unit, remaining) = rest.split_at(unit_len);
        let nanos = unit_nanos(unit)?;

        let whole: u128 = if int_digits.is_empty() {
            0
        } else {
            int_digits.parse().ok()?
        };
        let mut component = whole.checked_mul(nanos)?;

        let mut fraction: u128 = 0;
        let mut scale: u128 = 1;
        for digit in frac_digits.bytes().take(MAX_FRACTION_DIGITS) {
            fraction = fraction * 10 + u128::from(digit - b'0');
            scale *= 10;
        }
        component = component.checked_add(fraction * nanos / scale)?;

        total = total.checked_add(component)?;
        if total > i64::MAX as u128 {
            return None;
        }
        s = remaining;
    }

    if negative && total > 0 {
        return None;
    }
    u64::try_from(total).ok().map(Duration::from_nanos)
}
