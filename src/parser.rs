//! CSV decoding for bikeshare trip files.

use chrono::NaiveDateTime;
use csv::StringRecord;
use serde::Deserialize;

use crate::error::{DataError, Result};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

const REQUIRED_COLUMNS: [&str; 6] = [
    START_TIME,
    END_TIME,
    TRIP_DURATION,
    START_STATION,
    END_STATION,
    USER_TYPE,
];

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// One row as it appears in the file, before any derivation.
///
/// Durations and birth years are floats because some exports write them as
/// `1313.0`. Blank cells deserialize to `None`.
#[derive(Debug, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// Checks the header row for the required columns.
///
/// # Errors
///
/// Returns [`DataError::MissingColumn`] for the first required column absent.
pub fn check_headers(headers: &StringRecord) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if !has_column(headers, column) {
            return Err(DataError::MissingColumn(column));
        }
    }
    Ok(())
}

pub fn has_column(headers: &StringRecord, column: &str) -> bool {
    headers.iter().any(|h| h.trim() == column)
}

/// Parses a trip timestamp such as `2017-06-23 15:09:32`.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}
