//! Paging through raw trip rows on request.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::console::{Console, is_yes};
use crate::dataset::{Dataset, Trip};
use crate::output::print_rows;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// A running window over a slice of trips: 0..5, 5..10, ...
#[derive(Debug, Clone)]
pub struct RowPager {
    offset: usize,
    page_size: usize,
}

impl RowPager {
    pub fn new(page_size: usize) -> Self {
        Self {
            offset: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the next window and advances. Past the end the window is
    /// empty.
    pub fn next_page<'a>(&mut self, trips: &'a [Trip]) -> &'a [Trip] {
        let start = self.offset.min(trips.len());
        let end = self.offset.saturating_add(self.page_size).min(trips.len());
        self.offset = self.offset.saturating_add(self.page_size);
        &trips[start..end]
    }
}

impl Default for RowPager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Keeps printing windows of `view` while the user answers `yes`.
pub fn page_raw_rows<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    view: &Dataset,
    page_size: usize,
) -> Result<()> {
    let mut pager = RowPager::new(page_size);
    let prompt = format!(
        "Would you like to see {} rows of the raw data? Enter (yes or no): ",
        pager.page_size
    );

    loop {
        let answer = console.ask(&prompt)?;
        if !is_yes(&answer) {
            break;
        }

        let window = pager.next_page(&view.trips);
        debug!(offset = pager.offset(), shown = window.len(), "Raw rows page");
        if window.is_empty() {
            console.say("There are no more rows to display.")?;
        } else {
            print_rows(console.out(), view.schema, window)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::City;

    fn dataset(rows: usize) -> Dataset {
        let mut data = String::from(
            "Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n",
        );
        for i in 0..rows {
            data.push_str(&format!(
                "2017-01-02 08:00:00,2017-01-02 08:01:00,60,Station {i},End {i},Subscriber\n"
            ));
        }
        Dataset::from_reader(City::Chicago, data.as_bytes()).unwrap()
    }

    fn rows_of(window: &[Trip]) -> Vec<usize> {
        window.iter().map(|t| t.row).collect()
    }

    #[test]
    fn test_next_page_windows() {
        let ds = dataset(12);
        let mut pager = RowPager::default();
        assert_eq!(rows_of(pager.next_page(&ds.trips)), vec![0, 1, 2, 3, 4]);
        assert_eq!(rows_of(pager.next_page(&ds.trips)), vec![5, 6, 7, 8, 9]);
        assert_eq!(rows_of(pager.next_page(&ds.trips)), vec![10, 11]);
        assert!(pager.next_page(&ds.trips).is_empty());
        assert!(pager.next_page(&ds.trips).is_empty());
    }

    #[test]
    fn test_page_raw_rows_stops_on_no() {
        let ds = dataset(12);
        let mut console = Console::new(&b"yes\nYES\nno\nyes\n"[..], Vec::new());
        page_raw_rows(&mut console, &ds, DEFAULT_PAGE_SIZE).unwrap();

        let text = String::from_utf8(console.into_output()).unwrap();
        assert!(text.contains("Station 0"));
        assert!(text.contains("Station 9"));
        assert!(!text.contains("Station 10"));
        assert_eq!(text.matches("Would you like to see 5 rows").count(), 3);
    }

    #[test]
    fn test_page_raw_rows_past_end() {
        let ds = dataset(2);
        let mut console = Console::new(&b"yes\nyes\n\n"[..], Vec::new());
        page_raw_rows(&mut console, &ds, DEFAULT_PAGE_SIZE).unwrap();

        let text = String::from_utf8(console.into_output()).unwrap();
        assert!(text.contains("Station 1"));
        assert!(text.contains("There are no more rows to display."));
    }

    #[test]
    fn test_huge_page_size_saturates() {
        let ds = dataset(3);
        let mut pager = RowPager::new(usize::MAX);
        assert_eq!(rows_of(pager.next_page(&ds.trips)), vec![0, 1, 2]);
        assert!(pager.next_page(&ds.trips).is_empty());
        assert_eq!(pager.offset(), usize::MAX);
        assert!(pager.next_page(&ds.trips).is_empty());

        let mut console = Console::new(&b"yes\nyes\nno\n"[..], Vec::new());
        page_raw_rows(&mut console, &ds, usize::MAX).unwrap();
        let text = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(text.matches("Station 0").count(), 1);
        assert!(text.contains("There are no more rows to display."));
    }

    #[test]
    fn test_page_raw_rows_declined_immediately() {
        let ds = dataset(3);
        let mut console = Console::new(&b"nope\n"[..], Vec::new());
        page_raw_rows(&mut console, &ds, DEFAULT_PAGE_SIZE).unwrap();

        let text = String::from_utf8(console.into_output()).unwrap();
        assert!(!text.contains("Station 0"));
    }
}
