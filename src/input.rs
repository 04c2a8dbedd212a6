//! Validation of the interactive city, month and day menus.

use anyhow::Result;
use chrono::{Month, Weekday};
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::debug;

use crate::city::City;
use crate::console::Console;
use crate::filter::{Calendar, ChoiceKind, Filter, Selection};

pub const SEPARATOR_WIDTH: usize = 120;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChoiceError {
    #[error("Wrong input, {input} isn't a number, you must enter a value in the mentioned choices {choices}")]
    NotANumber {
        input: String,
        choices: &'static str,
    },

    #[error("Wrong input, {input} isn't a {kind} no., you must enter a value in the mentioned choices {choices}")]
    OutOfRange {
        input: String,
        kind: ChoiceKind,
        choices: &'static str,
    },
}

/// Converts a raw menu entry into a filter for the calendar type `T`.
///
/// `0` means no filter. Months accept 1..=12, days 1..=7 with 1 being
/// Monday. An `Err` tells the caller to prompt again.
pub fn validate_choice<T: Calendar>(raw: &str) -> Result<Filter<T>, ChoiceError> {
    let input = raw.trim();
    let choices = T::KIND.choices();

    let code: i64 = input.parse().map_err(|_| ChoiceError::NotANumber {
        input: input.to_string(),
        choices,
    })?;

    if code == 0 {
        return Ok(Filter::All);
    }

    u32::try_from(code)
        .ok()
        .and_then(T::from_code)
        .map(Filter::Only)
        .ok_or_else(|| ChoiceError::OutOfRange {
            input: input.to_string(),
            kind: T::KIND,
            choices,
        })
}

/// Asks for a city until the answer names a supported one.
pub fn prompt_city<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<City> {
    console.say("Enter city name that you want to explore their data from,")?;
    loop {
        let answer = console.ask("choices (chicago, new york city, washington): ")?;
        match answer.parse::<City>() {
            Ok(city) => return Ok(city),
            Err(e) => {
                debug!(input = %answer, "Rejected city input");
                console.say(e.to_string())?;
            }
        }
    }
}

/// Asks for a month or day number until [`validate_choice`] accepts it.
pub fn prompt_choice<T: Calendar, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Filter<T>> {
    let prompt = format!("choices {}: ", T::KIND.choices());
    loop {
        let answer = console.ask(&prompt)?;
        match validate_choice::<T>(&answer) {
            Ok(filter) => return Ok(filter),
            Err(e) => {
                debug!(input = %answer, kind = %T::KIND, "Rejected menu input");
                console.say(e.to_string())?;
            }
        }
    }
}

/// Runs the three prompts of one session iteration.
pub fn prompt_selection<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Selection> {
    console.say("Hello! Let's explore some US bikeshare data!")?;
    let city = prompt_city(console)?;

    console.say("Enter a month no. that you want to explore in or type a '0' to explore in all months,")?;
    let month = prompt_choice::<Month, _, _>(console)?;

    console.say("Enter a day no. that you want to explore on or type a '0' to explore on all weekdays,")?;
    let day = prompt_choice::<Weekday, _, _>(console)?;

    console.say("-".repeat(SEPARATOR_WIDTH))?;
    Ok(Selection::new(city, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONTHS: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    #[test]
    fn test_every_month_code_maps_to_its_month() {
        for (i, month) in MONTHS.iter().enumerate() {
            let code = (i + 1).to_string();
            assert_eq!(validate_choice::<Month>(&code), Ok(Filter::Only(*month)));
        }
        assert_eq!(
            validate_choice::<Month>("3").unwrap().label(),
            "March"
        );
    }

    #[test]
    fn test_every_day_code_maps_to_its_weekday() {
        let names = [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ];
        for (i, name) in names.iter().enumerate() {
            let code = (i + 1).to_string();
            assert_eq!(validate_choice::<Weekday>(&code).unwrap().label(), *name);
        }
    }

    #[test]
    fn test_zero_means_all_for_both_kinds() {
        assert_eq!(validate_choice::<Month>("0"), Ok(Filter::All));
        assert_eq!(validate_choice::<Weekday>(" 0 "), Ok(Filter::All));
    }

    #[test]
    fn test_out_of_range_codes_are_rejected() {
        for raw in ["13", "-1", "99999999999"] {
            assert!(matches!(
                validate_choice::<Month>(raw),
                Err(ChoiceError::OutOfRange { .. })
            ));
        }
        let err = validate_choice::<Weekday>("8").unwrap_err();
        assert_eq!(
            err,
            ChoiceError::OutOfRange {
                input: "8".to_string(),
                kind: ChoiceKind::Day,
                choices: ChoiceKind::Day.choices(),
            }
        );
        assert!(err.to_string().contains("8 isn't a day no."));
    }

    #[test]
    fn test_non_numbers_are_rejected() {
        let err = validate_choice::<Month>("march").unwrap_err();
        assert!(matches!(err, ChoiceError::NotANumber { .. }));
        assert!(err.to_string().contains("march isn't a number"));
        assert!(err.to_string().contains("12=December"));
        assert!(validate_choice::<Weekday>("").is_err());
    }

    #[test]
    fn test_prompt_choice_retries_until_valid() {
        let mut console = Console::new(&b"abc\n13\n3\n"[..], Vec::new());
        let filter = prompt_choice::<Month, _, _>(&mut console).unwrap();
        assert_eq!(filter, Filter::Only(Month::March));

        let printed = String::from_utf8(console.into_output()).unwrap();
        assert!(printed.contains("abc isn't a number"));
        assert!(printed.contains("13 isn't a month no."));
    }

    #[test]
    fn test_prompt_city_retries_until_known() {
        let mut console = Console::new(&b"paris\n  Washington \n"[..], Vec::new());
        assert_eq!(prompt_city(&mut console).unwrap(), City::Washington);

        let printed = String::from_utf8(console.into_output()).unwrap();
        assert!(printed.contains("paris isn't a city name"));
    }

    #[test]
    fn test_prompt_selection_collects_all_three() {
        let mut console = Console::new(&b"chicago\n6\n1\n"[..], Vec::new());
        let selection = prompt_selection(&mut console).unwrap();
        assert_eq!(
            selection,
            Selection::new(City::Chicago, Filter::Only(Month::June), Filter::Only(Weekday::Mon))
        );
    }
}
