use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value as JsonValue;

use crate::dto::vacancy_dto::DateInput;
use crate::error::{Error, Result};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Parses an ISO-8601 date or datetime. A trailing `Z` is read as UTC and
/// values without an offset are taken to be UTC.
pub fn parse_iso8601(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%:z") {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedDates {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Checks both ends of a vacancy's date range and returns them typed.
pub fn validate_dates(start: Option<&DateInput>, end: Option<&DateInput>) -> Result<ValidatedDates> {
    Ok(ValidatedDates {
        start_date: validate_date("start_date", start)?,
        end_date: validate_date("end_date", end)?,
    })
}

fn validate_date(field: &'static str, value: Option<&DateInput>) -> Result<Option<DateTime<Utc>>> {
    match value {
        None | Some(DateInput::Other(JsonValue::Null)) => Ok(None),
        Some(DateInput::Timestamp(dt)) => Ok(Some(*dt)),
        Some(DateInput::Text(text)) => parse_iso8601(text)
            .map(Some)
            .ok_or_else(|| Error::DateFormat {
                field,
                value: text.clone(),
            }),
        Some(DateInput::Other(other)) => Err(Error::DateType {
            field,
            found: json_type_name(other).to_string(),
        }),
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn accepts_common_iso_shapes() {
        let expected = Utc.with_ymd_and_hms(2023, 10, 1, 0, 0, 0).unwrap();
        for raw in [
            "2023-10-01T00:00:00Z",
            "2023-10-01T00:00:00+00:00",
            "2023-10-01T00:00:00.000",
            "2023-10-01 00:00:00",
            "2023-10-01",
        ] {
            assert_eq!(parse_iso8601(raw), Some(expected), "{raw}");
        }
        assert_eq!(
            parse_iso8601("2023-10-01T03:00:00+03:00"),
            Some(expected)
        );
    }

    #[test]
    fn rejects_impossible_calendar_values() {
        let start = DateInput::from("2025-13-40T99:99:99Z");
        let err = validate_dates(Some(&start), None).unwrap_err();
        match err {
            Error::DateFormat { field, value } => {
                assert_eq!(field, "start_date");
                assert_eq!(value, "2025-13-40T99:99:99Z");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn names_the_offending_end_date() {
        let start = DateInput::from("2024-01-01T00:00:00Z");
        let end = DateInput::from("yesterday");
        let err = validate_dates(Some(&start), Some(&end)).unwrap_err();
        assert!(err.to_string().starts_with("end_date has invalid datetime format"));
    }

    #[test]
    fn non_string_values_are_type_errors() {
        let start = DateInput::Other(json!(true));
        let err = validate_dates(Some(&start), None).unwrap_err();
        assert!(matches!(err, Error::DateType { field: "start_date", .. }));
    }

    #[test]
    fn absent_dates_pass_through() {
        let dates = validate_dates(None, Some(&DateInput::Other(JsonValue::Null))).unwrap();
        assert_eq!(dates, ValidatedDates { start_date: None, end_date: None });
    }
}
