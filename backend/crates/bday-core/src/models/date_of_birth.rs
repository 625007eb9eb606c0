use crate::{CoreError, Result as CoreErrorResult};

use chrono::NaiveDate;

/// Wire and storage format for dates of birth
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_OF_BIRTH_FIELD: &str = "dateOfBirth";

const INVALID_FORMAT_MESSAGE: &str = "Invalid date format. Please use YYYY-MM-DD";

/// Parse a `YYYY-MM-DD` string into a real calendar date.
///
/// The shape is checked before handing off to chrono so that unpadded
/// (`2020-1-5`) or signed/extended years are rejected rather than accepted
/// leniently. Calendar legality (e.g. Feb 29 in a common year) is enforced
/// by chrono.
#[track_caller]
pub fn parse_date_of_birth(raw: &str) -> CoreErrorResult<NaiveDate> {
    if !has_iso_date_shape(raw) {
        return Err(CoreError::validation(
            DATE_OF_BIRTH_FIELD,
            INVALID_FORMAT_MESSAGE,
        ));
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| CoreError::validation(DATE_OF_BIRTH_FIELD, INVALID_FORMAT_MESSAGE))
}

/// Reject birth dates that are today or later
#[track_caller]
pub fn ensure_before_today(date_of_birth: NaiveDate, today: NaiveDate) -> CoreErrorResult<()> {
    if date_of_birth >= today {
        return Err(CoreError::validation(
            DATE_OF_BIRTH_FIELD,
            "Invalid date of birth. Please provide a date before today",
        ));
    }

    Ok(())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn has_iso_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();

    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
