//! Month and weekday filters chosen by the user.

use chrono::{Month, Weekday};
use std::fmt;

use crate::city::City;

/// Which calendar menu a choice belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    Month,
    Day,
}

impl ChoiceKind {
    /// The menu shown to the user for this kind.
    pub fn choices(self) -> &'static str {
        match self {
            ChoiceKind::Month => "(0=all, 1=January, 2=February, 3=March, ... , 12=December)",
            ChoiceKind::Day => {
                "(0=all, 1=Monday, 2=Tuesday, 3=Wednesday, 4=Thursday, 5=Friday, 6=Saturday, 7=Sunday)"
            }
        }
    }
}

impl fmt::Display for ChoiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceKind::Month => f.write_str("month"),
            ChoiceKind::Day => f.write_str("day"),
        }
    }
}

/// A calendar unit selectable by menu number.
pub trait Calendar: Copy + PartialEq {
    const KIND: ChoiceKind;

    /// Maps a 1-based menu code to a value, `None` when out of range.
    fn from_code(code: u32) -> Option<Self>;

    fn calendar_name(self) -> &'static str;
}

impl Calendar for Month {
    const KIND: ChoiceKind = ChoiceKind::Month;

    fn from_code(code: u32) -> Option<Self> {
        u8::try_from(code).ok().and_then(|n| Month::try_from(n).ok())
    }

    fn calendar_name(self) -> &'static str {
        self.name()
    }
}

impl Calendar for Weekday {
    const KIND: ChoiceKind = ChoiceKind::Day;

    fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Weekday::Mon),
            2 => Some(Weekday::Tue),
            3 => Some(Weekday::Wed),
            4 => Some(Weekday::Thu),
            5 => Some(Weekday::Fri),
            6 => Some(Weekday::Sat),
            7 => Some(Weekday::Sun),
            _ => None,
        }
    }

    fn calendar_name(self) -> &'static str {
        match self {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

/// Either no filtering or a single calendar value to match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T: Calendar> Filter<T> {
    pub fn matches(&self, value: T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => *wanted == value,
        }
    }

    /// Label used in report headers: `all` or the calendar name.
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(value) => value.calendar_name(),
        }
    }
}

/// The city, month and day chosen for one session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub month: Filter<Month>,
    pub day: Filter<Weekday>,
}

impl Selection {
    pub fn new(city: City, month: Filter<Month>, day: Filter<Weekday>) -> Self {
        Self { city, month, day }
    }

    pub fn unfiltered(city: City) -> Self {
        Self::new(city, Filter::All, Filter::All)
    }
}
