use serde::Serialize;
use std::io::{self, Write};

use super::utility::{format_duration, mean};
use super::{Report, ReportContext};
use crate::dataset::Dataset;

/// Total and mean trip duration in seconds. Fractional seconds from the
/// source are kept until rendering.
#[derive(Debug, Serialize)]
pub struct DurationStats {
    pub total_secs: f64,
    pub mean_secs: f64,
}

impl DurationStats {
    pub fn total_display(&self) -> String {
        format_duration(self.total_secs)
    }

    pub fn mean_display(&self) -> String {
        format_duration(self.mean_secs)
    }
}

impl Report for DurationStats {
    const TITLE: &'static str = "Calculating Trip Duration";

    fn compute(view: &Dataset, _ctx: &ReportContext) -> Self {
        let durations: Vec<f64> = view.trips.iter().map(|t| t.duration_secs).collect();
        Self {
            total_secs: durations.iter().sum(),
            mean_secs: mean(&durations),
        }
    }

    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "The total travel time is {}", self.total_display())?;
        writeln!(out, "The average travel time is {}", self.mean_display())
    }
}
