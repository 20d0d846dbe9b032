//! Movie release dates travel over the wire as `DD/MM/YYYY` text.
//!
//! [`parse`] and [`format`] convert between that form and [`NaiveDate`];
//! [`serde_format`] plugs the same conversion into `#[serde(with = ...)]`.

use chrono::NaiveDate;

use crate::error::CoreError;

/// The only accepted textual date layout.
pub const RELEASE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a `DD/MM/YYYY` string. Surrounding whitespace is ignored.
pub fn parse(input: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(input.trim(), RELEASE_DATE_FORMAT).map_err(|_| {
        CoreError::Validation(format!(
            "release must be a valid date in DD/MM/YYYY format, got '{input}'"
        ))
    })
}

/// Render a date as `DD/MM/YYYY`.
pub fn format(date: &NaiveDate) -> String {
    date.format(RELEASE_DATE_FORMAT).to_string()
}

/// Serialize/deserialize a [`NaiveDate`] field as `DD/MM/YYYY`.
pub mod serde_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse(&raw).map_err(serde::de::Error::custom)
    }
}
