use serde::Serialize;
use std::io::{self, Write};

use super::mode::{MostCommon, value_counts};
use super::{Report, ReportContext};
use crate::dataset::Dataset;

/// Earliest, latest and most common birth year among the trips.
#[derive(Debug, Serialize)]
pub struct BirthYears {
    pub earliest: Option<i32>,
    pub most_recent: Option<i32>,
    pub most_common: MostCommon,
}

/// Rider demographics. Gender and birth year are only present when the
/// city's dataset carries those columns.
#[derive(Debug, Serialize)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYears>,
}

impl Report for UserStats {
    const TITLE: &'static str = "Calculating User Stats";

    fn compute(view: &Dataset, _ctx: &ReportContext) -> Self {
        let trips = &view.trips;

        let user_types = owned(value_counts(
            trips.iter().filter_map(|t| t.user_type.as_deref()),
        ));

        let genders = view
            .schema
            .has_gender
            .then(|| owned(value_counts(trips.iter().filter_map(|t| t.gender.as_deref()))));

        let birth_years = view.schema.has_birth_year.then(|| {
            let years: Vec<i32> = trips.iter().filter_map(|t| t.birth_year).collect();
            BirthYears {
                earliest: years.iter().min().copied(),
                most_recent: years.iter().max().copied(),
                most_common: MostCommon::of("Birth Year", years.iter().copied()),
            }
        });

        Self {
            user_types,
            genders,
            birth_years,
        }
    }

    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        render_counts(out, "User Type", &self.user_types)?;
        writeln!(out)?;

        if let Some(genders) = &self.genders {
            render_counts(out, "Gender", genders)?;
            writeln!(out)?;
        }

        if let Some(years) = &self.birth_years {
            writeln!(out, "The earliest year of birth is {}", year_or_unknown(years.earliest))?;
            writeln!(
                out,
                "The most recent year of birth is {}",
                year_or_unknown(years.most_recent)
            )?;
            writeln!(out, "{}", years.most_common)?;
        }
        Ok(())
    }
}

fn owned(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts.into_iter().map(|(k, n)| (k.to_string(), n)).collect()
}

fn render_counts(out: &mut dyn Write, label: &str, counts: &[(String, usize)]) -> io::Result<()> {
    writeln!(out, "The counts of {label} are :")?;
    for (value, count) in counts {
        writeln!(out, "The count of {value} = {count}")?;
    }
    Ok(())
}

fn year_or_unknown(year: Option<i32>) -> String {
    year.map_or_else(|| "unknown".to_string(), |y| y.to_string())
}
