//! The interactive prompt → load → report → page → restart loop.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{info, warn};

use crate::console::{Console, is_yes};
use crate::dataset::{Dataset, TripSource, load};
use crate::filter::Selection;
use crate::input::prompt_selection;
use crate::output::run_report;
use crate::pager::{DEFAULT_PAGE_SIZE, page_raw_rows};
use crate::stats::duration::DurationStats;
use crate::stats::station::StationStats;
use crate::stats::time::TimeStats;
use crate::stats::users::UserStats;
use crate::stats::{ReportContext, TripLabel};

/// Runtime options for a session.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub trip_label: TripLabel,
    pub page_size: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            trip_label: TripLabel::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Where the session currently is.
#[derive(Debug)]
pub enum State {
    Prompting,
    Loading(Selection),
    EmptyResult(Selection),
    Reporting(Selection, Dataset),
    Paging(Dataset),
    AskRestart,
    Done,
}

/// What happened over a whole session, mostly for tests and logs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub iterations: usize,
    pub empty_results: usize,
}

pub struct Session<'s, S: ?Sized, R, W> {
    source: &'s S,
    console: Console<R, W>,
    options: SessionOptions,
}

impl<'s, S, R, W> Session<'s, S, R, W>
where
    S: TripSource + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(source: &'s S, console: Console<R, W>, options: SessionOptions) -> Self {
        Self {
            source,
            console,
            options,
        }
    }

    /// Drives the state machine until the user declines to restart.
    ///
    /// # Errors
    ///
    /// Data source failures and a closed input stream end the session with
    /// an error.
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut state = State::Prompting;

        loop {
            state = match state {
                State::Prompting => {
                    summary.iterations += 1;
                    State::Loading(prompt_selection(&mut self.console)?)
                }
                State::Loading(selection) => {
                    let view = load(self.source, &selection)?;
                    if view.is_empty() {
                        State::EmptyResult(selection)
                    } else {
                        State::Reporting(selection, view)
                    }
                }
                State::EmptyResult(selection) => {
                    summary.empty_results += 1;
                    warn!(city = %selection.city, month = selection.month.label(), day = selection.day.label(), "No trips match filters");
                    self.console.say(format!(
                        "There is no data in {} or on {}",
                        selection.month.label(),
                        selection.day.label()
                    ))?;
                    State::Prompting
                }
                State::Reporting(selection, view) => {
                    self.report(&selection, &view)?;
                    State::Paging(view)
                }
                State::Paging(view) => {
                    page_raw_rows(&mut self.console, &view, self.options.page_size)?;
                    State::AskRestart
                }
                State::AskRestart => {
                    let answer = self
                        .console
                        .ask("\nWould you like to restart? Enter yes or no.\n")?;
                    if is_yes(&answer) {
                        State::Prompting
                    } else {
                        State::Done
                    }
                }
                State::Done => break,
            };
        }

        info!(
            iterations = summary.iterations,
            empty_results = summary.empty_results,
            "Session finished"
        );
        Ok(summary)
    }

    fn report(&mut self, selection: &Selection, view: &Dataset) -> Result<()> {
        let ctx = ReportContext::new(selection, self.options.trip_label);
        let out = self.console.out();
        run_report::<TimeStats>(view, &ctx, out)?;
        run_report::<StationStats>(view, &ctx, out)?;
        run_report::<DurationStats>(view, &ctx, out)?;
        run_report::<UserStats>(view, &ctx, out)?;
        Ok(())
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::City;
    use crate::error::{DataError, Result as DataResult};

    const DATA: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,2017-01-02 08:01:00,60,A,B,Subscriber
2017-01-03 09:00:00,2017-01-03 09:02:00,120,A,B,Customer
";

    struct Fixture;

    impl TripSource for Fixture {
        fn open(&self, city: City) -> DataResult<Dataset> {
            match city {
                City::Chicago => Dataset::from_reader(city, DATA.as_bytes()),
                _ => Err(DataError::MissingColumn("Start Time")),
            }
        }
    }

    fn run(script: &str) -> (Result<SessionSummary>, String) {
        let console = Console::new(script.as_bytes(), Vec::new());
        let mut session = Session::new(&Fixture, console, SessionOptions::default());
        let result = session.run();
        let text = String::from_utf8(session.into_console().into_output()).unwrap();
        (result, text)
    }

    #[test]
    fn test_single_iteration_then_decline() {
        let (result, text) = run("chicago\n0\n0\nno\nno\n");
        assert_eq!(
            result.unwrap(),
            SessionSummary {
                iterations: 1,
                empty_results: 0
            }
        );
        assert!(text.contains("Calculating The Most Frequent Times of Travel"));
        assert!(text.contains("Calculating The Most Popular Stations and Trip"));
        assert!(text.contains("Calculating Trip Duration"));
        assert!(text.contains("Calculating User Stats"));
        assert!(text.contains("Would you like to restart?"));
    }

    #[test]
    fn test_restart_runs_again() {
        let (result, _) = run("chicago\n0\n0\nno\nYes\nchicago\n1\n2\nno\nno\n");
        assert_eq!(result.unwrap().iterations, 2);
    }

    #[test]
    fn test_empty_result_returns_to_prompt_without_restart_question() {
        // June has no trips; the session goes straight back to the city prompt.
        let (result, text) = run("chicago\n6\n0\nchicago\n0\n0\nno\n\n");
        assert_eq!(
            result.unwrap(),
            SessionSummary {
                iterations: 2,
                empty_results: 1
            }
        );
        assert!(text.contains("There is no data in June or on all"));

        let notice = text.find("There is no data").unwrap();
        let first_restart = text.find("Would you like to restart?").unwrap();
        assert!(first_restart > notice);
        assert_eq!(text.matches("Would you like to restart?").count(), 1);
        assert_eq!(text[..notice].matches("Calculating").count(), 0);
    }

    #[test]
    fn test_load_error_is_fatal() {
        let (result, text) = run("washington\n0\n0\n");
        assert!(result.is_err());
        assert!(!text.contains("Calculating"));
    }

    #[test]
    fn test_closed_input_ends_with_error() {
        let (result, _) = run("chicago\n");
        assert!(result.is_err());
    }
}
