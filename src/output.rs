//! Console rendering of statistics reports and raw trip rows.
//!
//! Every report is framed by a header naming the active filters and a
//! footer with the time spent computing it.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::time::Instant;
use tracing::debug;

use crate::dataset::{Dataset, Schema, Trip};
use crate::input::SEPARATOR_WIDTH;
use crate::stats::{Report, ReportContext};

/// Logs a computed report as JSON at debug level.
pub fn log_json(name: &str, report: &impl Serialize) -> Result<()> {
    debug!(report = name, "{}", serde_json::to_string(report)?);
    Ok(())
}

pub fn header(title: &str, ctx: &ReportContext) -> String {
    format!(
        "\n{title} on {} weekdays & in {} months\n",
        ctx.day_label, ctx.month_label
    )
}

/// Computes report `R` over `view`, timing only the computation, and prints
/// it between its header and the elapsed-time footer.
pub fn run_report<R: Report>(view: &Dataset, ctx: &ReportContext, out: &mut dyn Write) -> Result<R> {
    writeln!(out, "{}", header(R::TITLE, ctx))?;

    let started = Instant::now();
    let report = R::compute(view, ctx);
    let elapsed = started.elapsed();

    report.render(out)?;
    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;

    log_json(R::TITLE, &report)?;
    Ok(report)
}

/// Prints trips as a table, one row per trip, preceded by column headers.
///
/// Source cells are shown as stored, followed by the derived columns.
pub fn print_rows(out: &mut dyn Write, schema: Schema, trips: &[Trip]) -> Result<()> {
    let mut columns = vec![
        "Row",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if schema.has_gender {
        columns.push("Gender");
    }
    if schema.has_birth_year {
        columns.push("Birth Year");
    }
    columns.extend(["Month", "Day", "Hour", "Start/End Time"]);

    let mut rows: Vec<Vec<String>> = vec![columns.iter().map(|c| c.to_string()).collect()];
    for trip in trips {
        let mut cells = vec![
            trip.row.to_string(),
            trip.raw_start_time.clone(),
            trip.raw_end_time.clone(),
            trip.duration_secs.to_string(),
            trip.start_station.clone(),
            trip.end_station.clone(),
            blank_or(trip.user_type.as_deref()),
        ];
        if schema.has_gender {
            cells.push(blank_or(trip.gender.as_deref()));
        }
        if schema.has_birth_year {
            cells.push(trip.birth_year.map_or_else(|| "-".to_string(), |y| y.to_string()));
        }
        cells.extend([
            trip.month_name().to_string(),
            trip.day_name().to_string(),
            trip.hour.to_string(),
            trip.start_end_label.clone(),
        ]);
        rows.push(cells);
    }

    let widths: Vec<usize> = (0..columns.len())
        .map(|i| rows.iter().map(|r| r[i].chars().count()).max().unwrap_or(0))
        .collect();

    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        writeln!(out, "{}", line.join("  ").trim_end())?;
    }
    Ok(())
}

fn blank_or(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
