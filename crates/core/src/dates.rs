//! Calendar-date codec for the `YYYY-MM-DD` wire format.
//!
//! Dates are held as [`NaiveDate`] everywhere inside the service and only
//! become strings at the JSON boundary. The serde helpers in [`ymd`] are meant
//! for `#[serde(serialize_with = ...)]` / `#[serde(deserialize_with = ...)]`
//! so that a malformed date is rejected while the request body is parsed.

use chrono::NaiveDate;

use crate::error::CoreError;

/// The only accepted textual date layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` string into a calendar date.
///
/// chrono alone accepts unpadded fields such as `2024-3-5`, so the shape is
/// checked first: exactly ten characters, digits everywhere except the two
/// hyphens.
pub fn parse_date(value: &str) -> Result<NaiveDate, CoreError> {
    let invalid = || CoreError::Validation(format!("Invalid date '{value}', expected YYYY-MM-DD"));

    let well_formed = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

/// Render a calendar date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serde adapters for `YYYY-MM-DD` fields.
pub mod ymd {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{format_date, parse_date};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(de::Error::custom)
    }

    /// Optional variant for partial updates. `null` and a missing key both
    /// yield `None`; pair with `#[serde(default)]`.
    pub fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse_date(&raw))
            .transpose()
            .map_err(de::Error::custom)
    }
}
