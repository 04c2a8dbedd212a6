//! Descriptive statistics over a filtered set of trips.
//!
//! Each report is computed by a pure function over a [`Dataset`] and knows
//! how to render itself; timing and headers live in [`crate::output`].

pub mod duration;
pub mod mode;
pub mod station;
pub mod time;
pub mod users;
pub mod utility;

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

use crate::dataset::Dataset;
use crate::filter::Selection;

/// How the "most common trip" is identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TripLabel {
    /// The (start station, end station) pair.
    #[default]
    Stations,
    /// The raw start and end timestamps joined together.
    Timestamps,
}

/// Values every report needs besides the trips themselves.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext {
    pub month_label: &'static str,
    pub day_label: &'static str,
    pub trip_label: TripLabel,
}

impl ReportContext {
    pub fn new(selection: &Selection, trip_label: TripLabel) -> Self {
        Self {
            month_label: selection.month.label(),
            day_label: selection.day.label(),
            trip_label,
        }
    }
}

/// A statistics section printed after the filters are applied.
pub trait Report: Serialize + Sized {
    /// Header text before the filter description, e.g. `Calculating User Stats`.
    const TITLE: &'static str;

    fn compute(view: &Dataset, ctx: &ReportContext) -> Self;

    fn render(&self, out: &mut dyn Write) -> io::Result<()>;
}
