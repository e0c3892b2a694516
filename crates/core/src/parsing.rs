//! Lenient integer parsing for path ids, query strings and form values.
//!
//! Browser clients send numbers as text (`"5"`, `" 12 "`, `"3 questions"`).
//! The rule used everywhere is leading-integer parsing: skip leading
//! whitespace, accept an optional sign, then take the longest run of ASCII
//! digits. Anything after the digits is ignored.

use crate::error::CoreError;
use crate::types::DbId;

/// Error message returned for any path id that is not a positive integer.
pub const INVALID_ID_MESSAGE: &str = "Invalid ID format";

/// Parse the leading integer of `raw`.
///
/// Returns `None` when no digits follow the optional sign, or when the value
/// does not fit in an `i64`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a survey id taken from a URL path segment.
///
/// Non-numeric and non-positive values are rejected before any lookup so the
/// caller can answer 400 instead of 404.
pub fn parse_survey_id(raw: &str) -> Result<DbId, CoreError> {
    match parse_leading_int(raw) {
        Some(id) if id > 0 => Ok(id),
        _ => Err(CoreError::Validation(INVALID_ID_MESSAGE.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn plain_digits_parse() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("007"), Some(7));
    }

    #[test]
    fn sign_and_leading_whitespace_accepted() {
        assert_eq!(parse_leading_int("  -3"), Some(-3));
        assert_eq!(parse_leading_int("+8"), Some(8));
    }

    #[test]
    fn trailing_text_ignored() {
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("5.9"), Some(5));
    }

    #[test]
    fn no_digits_is_none() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("- 4"), None);
    }

    #[test]
    fn overflow_is_none() {
        assert_eq!(parse_leading_int("99999999999999999999999"), None);
    }

    #[test]
    fn positive_ids_accepted() {
        assert_eq!(parse_survey_id("1").unwrap(), 1);
        assert_eq!(parse_survey_id("17x").unwrap(), 17);
    }

    #[test]
    fn zero_and_negative_ids_rejected() {
        assert_matches!(parse_survey_id("0"), Err(CoreError::Validation(_)));
        assert_matches!(parse_survey_id("-1"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn non_numeric_id_rejected_with_message() {
        let err = parse_survey_id("abc").unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg == INVALID_ID_MESSAGE);
    }
}
