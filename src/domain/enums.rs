use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A weekday tab of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// All days in tab order
    pub const ALL: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Display label, also used to derive the record file name
    pub fn label(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }

    /// Position of the day in tab order
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Next tab, wrapping from Saturday back to Monday
    pub fn next(&self) -> Day {
        Day::ALL[(self.index() + 1) % Day::ALL.len()]
    }

    /// Previous tab, wrapping from Monday to Saturday
    pub fn prev(&self) -> Day {
        Day::ALL[(self.index() + Day::ALL.len() - 1) % Day::ALL.len()]
    }

    /// Map a calendar weekday onto the board (Sunday has no tab)
    pub fn from_weekday(weekday: Weekday) -> Option<Day> {
        match weekday {
            Weekday::Mon => Some(Day::Monday),
            Weekday::Tue => Some(Day::Tuesday),
            Weekday::Wed => Some(Day::Wednesday),
            Weekday::Thu => Some(Day::Thursday),
            Weekday::Fri => Some(Day::Friday),
            Weekday::Sat => Some(Day::Saturday),
            Weekday::Sun => None,
        }
    }

    /// Today's tab according to the local clock
    pub fn today() -> Option<Day> {
        Day::from_weekday(chrono::Local::now().weekday())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown day '{0}' (expected Monday through Saturday)")]
pub struct ParseDayError(String);

impl FromStr for Day {
    type Err = ParseDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Day::ALL
            .iter()
            .copied()
            .find(|day| {
                day.label().eq_ignore_ascii_case(wanted)
                    || (wanted.len() == 3 && day.label()[..3].eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| ParseDayError(wanted.to_string()))
    }
}

/// Visual state of a table row, set by the countdown and read by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowStyle {
    #[default]
    Normal,
    Urgent,
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    EditingInput, // Typing into the active day's task input
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_labels_and_order() {
        let labels: Vec<&str> = Day::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(
            labels,
            vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
        );
        assert_eq!(Day::Thursday.index(), 3);
    }

    #[test]
    fn test_day_navigation_wraps() {
        assert_eq!(Day::Monday.next(), Day::Tuesday);
        assert_eq!(Day::Saturday.next(), Day::Monday);
        assert_eq!(Day::Monday.prev(), Day::Saturday);
        assert_eq!(Day::Friday.prev(), Day::Thursday);
    }

    #[test]
    fn test_day_from_str() {
        assert_eq!("monday".parse::<Day>(), Ok(Day::Monday));
        assert_eq!(" Friday ".parse::<Day>(), Ok(Day::Friday));
        assert_eq!("SAT".parse::<Day>(), Ok(Day::Saturday));
        assert!("Sunday".parse::<Day>().is_err());
        assert!("".parse::<Day>().is_err());
    }

    #[test]
    fn test_day_from_weekday() {
        assert_eq!(Day::from_weekday(Weekday::Wed), Some(Day::Wednesday));
        assert_eq!(Day::from_weekday(Weekday::Sun), None);
    }
}
