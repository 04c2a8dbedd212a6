use serde::Serialize;
use std::io::{self, Write};

use super::mode::{MostCommon, modes};
use super::{Report, ReportContext, TripLabel};
use crate::dataset::Dataset;

/// Most popular start station, end station and trip.
#[derive(Debug, Serialize)]
pub struct StationStats {
    pub start_station: MostCommon,
    pub end_station: MostCommon,
    pub trip: MostCommon,
}

impl Report for StationStats {
    const TITLE: &'static str = "Calculating The Most Popular Stations and Trip";

    fn compute(view: &Dataset, ctx: &ReportContext) -> Self {
        let trips = &view.trips;

        let trip = match ctx.trip_label {
            TripLabel::Stations => {
                let pairs = modes(
                    trips
                        .iter()
                        .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
                );
                MostCommon::from_modes(
                    "Start/End Station",
                    pairs
                        .into_iter()
                        .map(|(from, to)| format!("{from} -> {to}"))
                        .collect(),
                )
            }
            TripLabel::Timestamps => MostCommon::of(
                "Start/End Time",
                trips.iter().map(|t| t.start_end_label.as_str()),
            ),
        };

        Self {
            start_station: MostCommon::of(
                "Start Station",
                trips.iter().map(|t| t.start_station.as_str()),
            ),
            end_station: MostCommon::of("End Station", trips.iter().map(|t| t.end_station.as_str())),
            trip,
        }
    }

    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.start_station)?;
        writeln!(out, "{}", self.end_station)?;
        writeln!(out, "{}", self.trip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::City;
    use crate::filter::Selection;

    // Station pair A -> B occurs twice, but every timestamp label is unique
    // except the last two rows, which share theirs.
    const DATA: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,2017-01-02 08:10:00,600,A,B,Subscriber
2017-01-02 09:00:00,2017-01-02 09:10:00,600,A,B,Subscriber
2017-01-02 10:00:00,2017-01-02 10:10:00,600,A,C,Subscriber
2017-01-02 11:00:00,2017-01-02 11:10:00,600,C,B,Subscriber
2017-01-02 11:00:00,2017-01-02 11:10:00,600,B,C,Customer
";

    fn compute(label: TripLabel) -> StationStats {
        let view = Dataset::from_reader(City::Chicago, DATA.as_bytes()).unwrap();
        let ctx = ReportContext::new(&Selection::unfiltered(City::Chicago), label);
        StationStats::compute(&view, &ctx)
    }

    #[test]
    fn test_station_modes() {
        let stats = compute(TripLabel::Stations);
        assert_eq!(stats.start_station.values, vec!["A"]);
        assert_eq!(stats.end_station.values, vec!["B"]);
        assert_eq!(stats.trip.values, vec!["A -> B"]);
        assert_eq!(
            stats.trip.to_string(),
            "The most common Start/End Station of travel is A -> B"
        );
    }

    #[test]
    fn test_timestamp_label_mode() {
        let stats = compute(TripLabel::Timestamps);
        assert_eq!(
            stats.trip.values,
            vec!["2017-01-02 11:00:00 2017-01-02 11:10:00"]
        );
    }
}
