// ABOUTME: Lenient coercion of form text into numbers
// ABOUTME: Longest-numeric-prefix parsing where empty or non-numeric input becomes 0 or None
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Numeric coercion for values that arrive as text
//!
//! Records and forms deliver numbers as free text. The engine never rejects
//! such input: anything that does not start with a number counts as missing.
//! [`parse_lenient`] maps missing to `0.0`, [`parse_optional`] maps it to `None`.

/// Parse the longest numeric prefix of `raw`, returning `0.0` when there is none
///
/// Leading and trailing whitespace is ignored. `"72.5kg"` yields `72.5`,
/// `""`, `"abc"` and `"NaN"` yield `0.0`.
#[must_use]
pub fn parse_lenient(raw: &str) -> f64 {
    parse_optional(raw).unwrap_or(0.0)
}

/// Parse the longest numeric prefix of `raw`, returning `None` when there is none
#[must_use]
pub fn parse_optional(raw: &str) -> Option<f64> {
    let prefix = numeric_prefix(raw.trim());
    if prefix.is_empty() {
        return None;
    }
    prefix.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Replace NaN and infinities with `0.0`
#[must_use]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Keep a value only when it is finite and strictly positive
#[must_use]
pub fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Longest prefix of `s` shaped like `[+-]digits[.digits][e[+-]digits]`
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return "";
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}
