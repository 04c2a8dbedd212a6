//! Loading, enriching and filtering a city's trip records.

use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::city::City;
use crate::error::{DataError, Result};
use crate::filter::{Calendar, Selection};
use crate::parser::{self, RawTrip};

/// A trip with the columns derived from its start time.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Zero-based position of the record in its source file.
    pub row: usize,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Timestamps exactly as written in the file.
    pub raw_start_time: String,
    pub raw_end_time: String,
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    pub month: Month,
    pub weekday: Weekday,
    pub hour: u32,
    /// Raw start and end timestamps joined by a space.
    pub start_end_label: String,
}

impl Trip {
    pub fn month_name(&self) -> &'static str {
        self.month.calendar_name()
    }

    pub fn day_name(&self) -> &'static str {
        self.weekday.calendar_name()
    }
}

/// Optional columns present in a dataset, fixed when the header is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

/// An ordered set of trips sharing one schema.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub city: City,
    pub schema: Schema,
    pub trips: Vec<Trip>,
}

impl Dataset {
    /// Decodes a CSV stream into a dataset with derived columns and
    /// forward-filled birth years.
    ///
    /// # Errors
    ///
    /// Fails on missing required columns, undecodable rows, malformed
    /// timestamps or negative durations.
    pub fn from_reader<R: Read>(city: City, reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);

        let headers = rdr.headers()?.clone();
        parser::check_headers(&headers)?;
        let schema = Schema {
            has_gender: parser::has_column(&headers, parser::GENDER),
            has_birth_year: parser::has_column(&headers, parser::BIRTH_YEAR),
        };

        let mut birth_years = Vec::new();
        let mut trips = Vec::new();
        for (row, result) in rdr.deserialize().enumerate() {
            let raw: RawTrip = result?;
            birth_years.push(raw.birth_year);
            trips.push(derive_trip(row, raw)?);
        }

        if schema.has_birth_year {
            for (trip, year) in trips.iter_mut().zip(forward_fill(&birth_years)) {
                trip.birth_year = year.map(|y| y.round() as i32);
            }
        }

        debug!(%city, rows = trips.len(), ?schema, "Dataset decoded");
        Ok(Self {
            city,
            schema,
            trips,
        })
    }

    /// Keeps only the trips matching the month and day filters.
    pub fn filtered(mut self, selection: &Selection) -> Self {
        self.trips
            .retain(|t| selection.month.matches(t.month) && selection.day.matches(t.weekday));
        self
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

fn derive_trip(row: usize, raw: RawTrip) -> Result<Trip> {
    let start_time =
        parser::parse_timestamp(&raw.start_time).ok_or_else(|| DataError::Timestamp {
            row,
            column: parser::START_TIME,
            value: raw.start_time.clone(),
        })?;
    let end_time = parser::parse_timestamp(&raw.end_time).ok_or_else(|| DataError::Timestamp {
        row,
        column: parser::END_TIME,
        value: raw.end_time.clone(),
    })?;

    if !raw.trip_duration.is_finite() || raw.trip_duration < 0.0 {
        return Err(DataError::Duration {
            row,
            value: raw.trip_duration,
        });
    }

    let month = Month::try_from(start_time.month() as u8)
        .map_err(|_| DataError::Timestamp {
            row,
            column: parser::START_TIME,
            value: raw.start_time.clone(),
        })?;

    Ok(Trip {
        row,
        start_time,
        end_time,
        duration_secs: raw.trip_duration,
        start_end_label: format!("{} {}", raw.start_time, raw.end_time),
        raw_start_time: raw.start_time,
        raw_end_time: raw.end_time,
        start_station: raw.start_station,
        end_station: raw.end_station,
        user_type: non_blank(raw.user_type),
        gender: non_blank(raw.gender),
        birth_year: None,
        month,
        weekday: start_time.weekday(),
        hour: start_time.hour(),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Replaces each gap with the nearest preceding value. Leading gaps stay
/// empty.
pub fn forward_fill<T: Copy>(values: &[Option<T>]) -> Vec<Option<T>> {
    let mut last = None;
    values
        .iter()
        .map(|v| {
            if v.is_some() {
                last = *v;
            }
            last
        })
        .collect()
}

/// Somewhere a city's trip data can be read from.
pub trait TripSource {
    fn open(&self, city: City) -> Result<Dataset>;
}

/// Reads `<root>/<city file>.csv` from a local directory.
pub struct CsvDirectory {
    root: PathBuf,
}

impl CsvDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, city: City) -> PathBuf {
        self.root.join(city.file_name())
    }
}

impl TripSource for CsvDirectory {
    fn open(&self, city: City) -> Result<Dataset> {
        let path = self.path_for(city);
        let file = open_file(&path)?;
        info!(path = %path.display(), "Reading trip data");
        Dataset::from_reader(city, file)
    }
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the selected city's trips and applies the month/day filters.
///
/// An empty result is not an error; the caller decides what to do with it.
#[tracing::instrument(skip(source), fields(city = %selection.city, month = selection.month.label(), day = selection.day.label()))]
pub fn load<S: TripSource + ?Sized>(source: &S, selection: &Selection) -> Result<Dataset> {
    let dataset = source.open(selection.city)?;
    let total = dataset.len();
    let view = dataset.filtered(selection);
    info!(total, matched = view.len(), "Trip data filtered");
    Ok(view)
}
