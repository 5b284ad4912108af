//! Form payloads submitted by the HTML pages, with validation and
//! sanitisation into domain payloads.

use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, de};
use thiserror::Error;

pub mod assignments;
pub mod auth;
pub mod compliance;
pub mod crm;
pub mod customers;
pub mod employees;
pub mod equipment;
pub mod finance;
pub mod inventory;
pub mod jobs;
pub mod orders;
pub mod procurement;
pub mod production;
pub mod products;
pub mod users;
pub mod vehicles;

/// Deserialize an optional form field, treating blank input as `None`.
///
/// HTML selects and inputs submit `""` for "nothing chosen", which would
/// otherwise fail to parse as a number or date.
pub fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

/// Deserialize an optional `datetime-local` input.
///
/// Browsers submit `2025-07-01T08:00` without seconds; full timestamps are
/// accepted as well.
pub fn optional_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_datetime(raw).map(Some).ok_or_else(|| {
            de::Error::custom(format!("invalid date and time `{raw}`"))
        }),
    }
}

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// Collapse whitespace runs and strip control characters from single-line input.
pub fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Trim multi-line input and drop control characters other than newlines.
pub fn sanitize_multiline_text(input: &str) -> String {
    input
        .trim()
        .replace("\r\n", "\n")
        .chars()
        .filter(|ch| *ch == '\n' || !ch.is_control())
        .collect()
}

/// Sanitize an optional free-text field, mapping blank input to `None`.
pub fn optional_text(input: Option<&str>) -> Option<String> {
    input
        .map(sanitize_inline_text)
        .filter(|value| !value.is_empty())
}

/// Sanitize an optional multi-line field, mapping blank input to `None`.
pub fn optional_multiline(input: Option<&str>) -> Option<String> {
    input
        .map(sanitize_multiline_text)
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("invalid amount `{0}`")]
    Invalid(String),
    #[error("amount cannot be negative")]
    Negative,
}

/// Parse a decimal money string such as `1250.5` or `1,250.50` into cents.
pub fn parse_amount_cents(input: &str) -> Result<i64, AmountError> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|ch| *ch != ',' && *ch != ' ')
        .collect();
    if cleaned.is_empty() {
        return Err(AmountError::Empty);
    }
    if cleaned.starts_with('-') {
        return Err(AmountError::Negative);
    }

    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned.as_str(), ""),
    };

    let digits_only = |part: &str| part.chars().all(|ch| ch.is_ascii_digit());
    if !digits_only(whole) || !digits_only(fraction) || fraction.len() > 2 {
        return Err(AmountError::Invalid(input.trim().to_string()));
    }
    if whole.is_empty() && fraction.is_empty() {
        return Err(AmountError::Invalid(input.trim().to_string()));
    }

    let whole_value = if whole.is_empty() {
        0
    } else {
        whole
            .parse::<i64>()
            .map_err(|_| AmountError::Invalid(input.trim().to_string()))?
    };
    let fraction_value = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().unwrap_or(0) * 10,
        _ => fraction.parse::<i64>().unwrap_or(0),
    };

    whole_value
        .checked_mul(100)
        .and_then(|cents| cents.checked_add(fraction_value))
        .ok_or_else(|| AmountError::Invalid(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct OptionalFields {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        supplier_id: Option<i32>,
        #[serde(default, deserialize_with = "empty_string_as_none")]
        expiry_date: Option<chrono::NaiveDate>,
    }

    #[test]
    fn blank_optional_fields_become_none() {
        let parsed: OptionalFields =
            serde_json::from_str(r#"{"supplier_id": "", "expiry_date": "  "}"#).expect("parse");

        assert_eq!(parsed.supplier_id, None);
        assert_eq!(parsed.expiry_date, None);
    }

    #[test]
    fn filled_optional_fields_are_parsed() {
        let parsed: OptionalFields =
            serde_json::from_str(r#"{"supplier_id": "7", "expiry_date": "2025-03-01"}"#)
                .expect("parse");

        assert_eq!(parsed.supplier_id, Some(7));
        assert_eq!(
            parsed.expiry_date,
            chrono::NaiveDate::from_ymd_opt(2025, 3, 1)
        );
    }

    #[derive(Debug, Deserialize)]
    struct Schedule {
        #[serde(default, deserialize_with = "optional_datetime")]
        start: Option<NaiveDateTime>,
    }

    #[test]
    fn datetime_local_input_is_parsed_without_seconds() {
        let parsed: Schedule =
            serde_json::from_str(r#"{"start": "2025-07-01T08:30"}"#).expect("parse");

        assert_eq!(
            parsed.start.map(|value| value.to_string()),
            Some("2025-07-01 08:30:00".to_string())
        );

        let blank: Schedule = serde_json::from_str(r#"{"start": ""}"#).expect("parse");
        assert_eq!(blank.start, None);

        assert!(serde_json::from_str::<Schedule>(r#"{"start": "tomorrow"}"#).is_err());
    }

    #[test]
    fn missing_optional_fields_default_to_none() {
        let parsed: OptionalFields = serde_json::from_str("{}").expect("parse");

        assert_eq!(parsed.supplier_id, None);
    }

    #[test]
    fn sanitize_inline_text_collapses_whitespace() {
        assert_eq!(sanitize_inline_text("  Site \t 14\n Block B "), "Site 14 Block B");
    }

    #[test]
    fn sanitize_multiline_text_keeps_newlines() {
        assert_eq!(sanitize_multiline_text(" line one\r\nline\u{7} two "), "line one\nline two");
    }

    #[test]
    fn parse_amount_cents_accepts_common_formats() {
        assert_eq!(parse_amount_cents("1250"), Ok(125_000));
        assert_eq!(parse_amount_cents("1,250.5"), Ok(125_050));
        assert_eq!(parse_amount_cents("0.07"), Ok(7));
        assert_eq!(parse_amount_cents(".5"), Ok(50));
    }

    #[test]
    fn parse_amount_cents_rejects_bad_input() {
        assert_eq!(parse_amount_cents(""), Err(AmountError::Empty));
        assert_eq!(parse_amount_cents("-5"), Err(AmountError::Negative));
        assert!(matches!(parse_amount_cents("12.345"), Err(AmountError::Invalid(_))));
        assert!(matches!(parse_amount_cents("abc"), Err(AmountError::Invalid(_))));
        assert!(matches!(parse_amount_cents("."), Err(AmountError::Invalid(_))));
    }
}
