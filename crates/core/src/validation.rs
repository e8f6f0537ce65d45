//! Field validation helpers used by the request DTOs.
//!
//! The DTOs derive [`validator::Validate`]; the custom functions here plug
//! into `#[validate(custom(...))]` and [`collect_field_errors`] turns the
//! resulting [`ValidationErrors`] into wire-friendly [`FieldError`]s.

use std::borrow::Cow;

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use validator::{ValidationError, ValidationErrors};

use crate::error::{CoreError, FieldError};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_TITLE_REQUIRED: &str = "Title is required";
pub const MSG_DESCRIPTION_REQUIRED: &str = "Description is required";
pub const MSG_DUE_DATE_INVALID: &str = "Due date must be a valid date";
pub const MSG_CATEGORY_ID_REQUIRED: &str = "Category ID is required";
pub const MSG_COMPLETED_NOT_BOOLEAN: &str = "Completed status must be a boolean";
pub const MSG_CATEGORY_NAME_REQUIRED: &str = "Category name is required";
pub const MSG_TITLE_EMPTY: &str = "Title must not be empty";
pub const MSG_DESCRIPTION_EMPTY: &str = "Description must not be empty";
pub const MSG_CATEGORY_ID_EMPTY: &str = "Category ID must not be empty";

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse an ISO-8601 date or date-time into a UTC timestamp.
///
/// Accepted forms:
/// - RFC 3339 with offset (`2024-01-01T10:00:00Z`, `2024-01-01T10:00:00+02:00`)
/// - local date-time without offset, read as UTC (`2024-01-01T10:00:00`)
/// - calendar date, read as UTC midnight (`2024-01-01`)
pub fn parse_due_date(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

// ---------------------------------------------------------------------------
// Custom validators
// ---------------------------------------------------------------------------

/// Reject strings that are empty after trimming.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Reject values that [`parse_due_date`] cannot read.
pub fn validate_due_date(value: &str) -> Result<(), ValidationError> {
    if parse_due_date(value).is_none() {
        return Err(ValidationError::new("iso8601")
            .with_message(Cow::Borrowed(MSG_DUE_DATE_INVALID)));
    }
    Ok(())
}

/// Reject anything but a JSON boolean.
pub fn validate_boolean(value: &serde_json::Value) -> Result<(), ValidationError> {
    if !value.is_boolean() {
        return Err(ValidationError::new("boolean")
            .with_message(Cow::Borrowed(MSG_COMPLETED_NOT_BOOLEAN)));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Flatten validator output into [`FieldError`]s with camelCase field names,
/// sorted by field so responses are deterministic.
pub fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = to_camel_case(&field);
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", e.code));
                FieldError::new(field.clone(), message)
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(collect_field_errors(&errors))
    }
}

fn to_camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper = false;
    for c in snake.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    // -- parse_due_date ------------------------------------------------------

    #[test]
    fn due_date_plain_calendar_date() {
        let ts = parse_due_date("2024-01-01").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 1, 1));
        assert_eq!(ts.hour(), 0);
    }

    #[test]
    fn due_date_rfc3339_with_offset_normalized_to_utc() {
        let ts = parse_due_date("2024-03-10T12:00:00+02:00").unwrap();
        assert_eq!(ts.hour(), 10);
    }

    #[test]
    fn due_date_javascript_iso_string() {
        assert!(parse_due_date("2024-01-01T00:00:00.000Z").is_some());
    }

    #[test]
    fn due_date_without_offset() {
        assert!(parse_due_date("2024-05-06T07:08:09").is_some());
    }

    #[test]
    fn due_date_rejects_impossible_dates() {
        assert!(parse_due_date("2024-02-30").is_none());
        assert!(parse_due_date("tomorrow").is_none());
        assert!(parse_due_date("").is_none());
    }

    // -- custom validators ---------------------------------------------------

    #[test]
    fn not_blank_rejects_whitespace() {
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("x").is_ok());
    }

    #[test]
    fn boolean_only_accepts_json_bool() {
        assert!(validate_boolean(&serde_json::json!(true)).is_ok());
        assert!(validate_boolean(&serde_json::json!("true")).is_err());
        assert!(validate_boolean(&serde_json::json!(1)).is_err());
    }

    // -- collect_field_errors ------------------------------------------------

    #[test]
    fn field_names_are_camel_cased_and_sorted() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "title",
            ValidationError::new("blank").with_message(Cow::Borrowed(MSG_TITLE_REQUIRED)),
        );
        errors.add(
            "due_date",
            ValidationError::new("iso8601").with_message(Cow::Borrowed(MSG_DUE_DATE_INVALID)),
        );

        let fields = collect_field_errors(&errors);
        assert_eq!(
            fields,
            vec![
                FieldError::new("dueDate", MSG_DUE_DATE_INVALID),
                FieldError::new("title", MSG_TITLE_REQUIRED),
            ]
        );
    }

    #[test]
    fn missing_message_falls_back_to_code() {
        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new("blank"));
        let fields = collect_field_errors(&errors);
        assert_eq!(fields[0].message, "Invalid value (blank)");
    }
}
