//! Common type definitions for domain modeling.

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PandemicError;

/// One of the three tracked case counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Cumulative confirmed cases.
    Confirmed,
    /// Cumulative deaths.
    Deaths,
    /// Cumulative recoveries.
    Recovered,
}

impl Metric {
    /// All metrics in composite-column order.
    pub const ALL: [Self; 3] = [Self::Confirmed, Self::Deaths, Self::Recovered];

    /// Column label used in composite tables and chart legends.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Deaths => "Deaths",
            Self::Recovered => "Recovered",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the three daily series are aligned when their dates differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinPolicy {
    /// Union of all dates; a metric missing on a date is absent.
    #[default]
    Outer,
    /// Only dates present in every series.
    Inner,
}

/// Length of a trailing window measured back from the most recent date.
///
/// Parsed from compact strings such as `"1M"`, `"3W"` or `"10D"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TrailingWindow {
    /// A number of days.
    Days(u32),
    /// A number of weeks.
    Weeks(u32),
    /// A number of calendar months.
    Months(u32),
}

impl TrailingWindow {
    /// Exclusive lower bound of the window ending at `last`.
    ///
    /// Dates strictly after the returned date fall inside the window.
    pub fn start_before(self, last: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Days(n) => last.checked_sub_signed(Duration::days(i64::from(n))),
            Self::Weeks(n) => last.checked_sub_signed(Duration::weeks(i64::from(n))),
            Self::Months(n) => last.checked_sub_months(Months::new(n)),
        }
    }

    /// Human readable description, e.g. "last 3 weeks".
    pub fn describe(self) -> String {
        let (n, unit) = match self {
            Self::Days(n) => (n, "day"),
            Self::Weeks(n) => (n, "week"),
            Self::Months(n) => (n, "month"),
        };
        if n == 1 {
            format!("last {n} {unit}")
        } else {
            format!("last {n} {unit}s")
        }
    }
}

impl fmt::Display for TrailingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days(n) => write!(f, "{n}D"),
            Self::Weeks(n) => write!(f, "{n}W"),
            Self::Months(n) => write!(f, "{n}M"),
        }
    }
}

impl FromStr for TrailingWindow {
    type Err = PandemicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| PandemicError::validation_field(format!("missing unit in '{s}'"), "window"))?;
        let (digits, unit) = trimmed.split_at(split);
        let n: u32 = digits
            .parse()
            .map_err(|_| PandemicError::validation_field(format!("invalid length in '{s}'"), "window"))?;
        if n == 0 {
            return Err(PandemicError::validation_field(
                format!("window '{s}' must be longer than zero"),
                "window",
            ));
        }
        match unit.trim().to_ascii_lowercase().as_str() {
            "d" | "day" | "days" => Ok(Self::Days(n)),
            "w" | "week" | "weeks" => Ok(Self::Weeks(n)),
            "m" | "month" | "months" => Ok(Self::Months(n)),
            other => Err(PandemicError::validation_field(
                format!("unknown window unit '{other}'"),
                "window",
            )),
        }
    }
}

impl TryFrom<String> for TrailingWindow {
    type Error = PandemicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TrailingWindow> for String {
    fn from(window: TrailingWindow) -> Self {
        window.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_metric_labels() {
        assert_eq!(Metric::Confirmed.label(), "Confirmed");
        assert_eq!(Metric::Deaths.to_string(), "Deaths");
        assert_eq!(Metric::ALL.len(), 3);
    }

    #[test]
    fn test_parse_windows() {
        assert_eq!("1M".parse::<TrailingWindow>().unwrap(), TrailingWindow::Months(1));
        assert_eq!("3W".parse::<TrailingWindow>().unwrap(), TrailingWindow::Weeks(3));
        assert_eq!("10d".parse::<TrailingWindow>().unwrap(), TrailingWindow::Days(10));
        assert_eq!(
            " 2 weeks ".parse::<TrailingWindow>().unwrap(),
            TrailingWindow::Weeks(2)
        );
    }

    #[test]
    fn test_parse_rejects_bad_windows() {
        assert!("".parse::<TrailingWindow>().is_err());
        assert!("12".parse::<TrailingWindow>().is_err());
        assert!("0W".parse::<TrailingWindow>().is_err());
        assert!("3Y".parse::<TrailingWindow>().is_err());
        assert!("W".parse::<TrailingWindow>().is_err());
    }

    #[test]
    fn test_window_display_round_trips_through_serde() {
        let json = serde_json::to_string(&TrailingWindow::Weeks(3)).unwrap();
        assert_eq!(json, "\"3W\"");
        let back: TrailingWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TrailingWindow::Weeks(3));
    }

    #[test]
    fn test_window_start() {
        let last = date(2022, 3, 21);
        assert_eq!(TrailingWindow::Weeks(3).start_before(last), Some(date(2022, 2, 28)));
        assert_eq!(TrailingWindow::Days(1).start_before(last), Some(date(2022, 3, 20)));
        assert_eq!(TrailingWindow::Months(1).start_before(last), Some(date(2022, 2, 21)));
        // Month arithmetic clamps to the last valid day.
        assert_eq!(
            TrailingWindow::Months(1).start_before(date(2022, 3, 31)),
            Some(date(2022, 2, 28))
        );
    }

    #[test]
    fn test_join_policy_defaults_to_outer() {
        assert_eq!(JoinPolicy::default(), JoinPolicy::Outer);
        let policy: JoinPolicy = serde_json::from_str("\"inner\"").unwrap();
        assert_eq!(policy, JoinPolicy::Inner);
    }

    #[test]
    fn test_describe() {
        assert_eq!(TrailingWindow::Months(1).describe(), "last 1 month");
        assert_eq!(TrailingWindow::Weeks(3).describe(), "last 3 weeks");
    }
}
