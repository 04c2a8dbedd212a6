use chrono::{Month, Weekday};
use serde::Serialize;
use std::io::{self, Write};

use super::mode::{MostCommon, modes};
use super::{Report, ReportContext};
use crate::dataset::Dataset;
use crate::filter::Calendar;

/// Most frequent month, weekday and start hour.
#[derive(Debug, Serialize)]
pub struct TimeStats {
    pub month: MostCommon,
    pub day: MostCommon,
    pub hour: MostCommon,
}

impl Report for TimeStats {
    const TITLE: &'static str = "Calculating The Most Frequent Times of Travel";

    fn compute(view: &Dataset, _ctx: &ReportContext) -> Self {
        // Calendar values are counted by number so ties come out in calendar order.
        let months = modes(view.trips.iter().map(|t| t.month.number_from_month()));
        let days = modes(view.trips.iter().map(|t| t.weekday.number_from_monday()));

        Self {
            month: MostCommon::from_modes(
                "Month",
                months
                    .into_iter()
                    .filter_map(Month::from_code)
                    .map(Calendar::calendar_name)
                    .collect(),
            ),
            day: MostCommon::from_modes(
                "Day",
                days.into_iter()
                    .filter_map(Weekday::from_code)
                    .map(Calendar::calendar_name)
                    .collect(),
            ),
            hour: MostCommon::of("Hour", view.trips.iter().map(|t| t.hour)),
        }
    }

    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.month)?;
        writeln!(out, "{}", self.day)?;
        writeln!(out, "{}", self.hour)
    }
}
