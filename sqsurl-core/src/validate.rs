//! Segment shape checks for SQS queue URLs

use unicode_general_category::{get_general_category, GeneralCategory};

/// Maximum queue name length accepted by SQS
pub const MAX_QUEUE_NAME_LEN: usize = 80;

/// Check whether a path segment looks like an account ID
///
/// This is deliberately loose: anything that parses as a signed 64-bit
/// integer passes, including a leading `+`/`-` and leading zeros. Real
/// account IDs are 12 unsigned digits, but values like `-5` are accepted.
/// Digits may come from any decimal digit set in the Basic Multilingual
/// Plane (e.g. Arabic-Indic or fullwidth digits).
pub fn is_account_id(input: Option<&str>) -> bool {
    input
        .and_then(to_ascii_integer)
        .is_some_and(|s| s.parse::<i64>().is_ok())
}

/// Check whether a path segment is a valid queue name
///
/// A valid name is 1-80 UTF-16 units long and made only of letters, decimal
/// digits, `_` and `-`. Letters and digits are matched per Unicode, but only
/// within the Basic Multilingual Plane.
pub fn is_valid_queue_name(input: Option<&str>) -> bool {
    let Some(name) = input else {
        return false;
    };

    let len = name.encode_utf16().count();
    if len == 0 || len > MAX_QUEUE_NAME_LEN {
        return false;
    }

    name.chars().all(is_queue_name_char)
}

fn is_queue_name_char(c: char) -> bool {
    if c == '_' || c == '-' {
        return true;
    }

    // Surrogate pairs never classify as letters or digits
    c.len_utf16() == 1 && (c.is_alphabetic() || is_decimal_digit(c))
}

/// Unicode `Nd` character outside the astral planes
fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
        || (c.len_utf16() == 1 && get_general_category(c) == GeneralCategory::DecimalNumber)
}

/// Value of a decimal digit character
///
/// `Nd` characters come in contiguous runs of ten ordered 0-9, so the value is
/// the position within the run.
fn decimal_digit_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        return c.to_digit(10);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut run = 0;
    let mut cp = u32::from(c);
    while let Some(prev) = cp.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        run += 1;
        cp -= 1;
    }

    Some(run % 10)
}

/// Rewrite an optionally signed integer with ASCII digits
fn to_ascii_integer(s: &str) -> Option<String> {
    let mut out = String::with_capacity(s.len());

    for (i, c) in s.chars().enumerate() {
        if i == 0 && (c == '+' || c == '-') {
            out.push(c);
            continue;
        }
        out.push(char::from_digit(decimal_digit_value(c)?, 10)?);
    }

    Some(out)
}
