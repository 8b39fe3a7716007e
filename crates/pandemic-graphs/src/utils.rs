//! Graph utilities and helper functions.

use chrono::{Duration, NaiveDate};

use crate::types::PlotSeries;

/// Helper functions for axis ranges and date coordinates.
pub struct GraphUtils;

impl GraphUtils {
    /// Earliest and latest dates with a present value across `series`.
    pub fn date_bounds(series: &[PlotSeries]) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = series.iter().flat_map(|s| s.present().map(|(date, _)| date));
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }

    /// Y range covering every present value and zero, with headroom.
    pub fn value_bounds(series: &[PlotSeries]) -> (f64, f64) {
        let (lo, hi) = series
            .iter()
            .flat_map(|s| s.present().map(|(_, v)| v))
            .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

        if (hi - lo).abs() < f64::EPSILON {
            return (lo, lo + 1.0);
        }
        let padding = (hi - lo) * 0.05;
        let lo = if lo < 0.0 { lo - padding } else { lo };
        (lo, hi + padding)
    }

    /// Days from `origin` as an x coordinate.
    #[allow(clippy::cast_precision_loss)]
    pub fn date_to_x(origin: NaiveDate, date: NaiveDate) -> f64 {
        (date - origin).num_days() as f64
    }

    /// Inverse of [`GraphUtils::date_to_x`], rounding to whole days.
    #[allow(clippy::cast_possible_truncation)]
    pub fn x_to_date(origin: NaiveDate, x: f64) -> NaiveDate {
        origin
            .checked_add_signed(Duration::days(x.round() as i64))
            .unwrap_or(origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 4, d).unwrap()
    }

    #[test]
    fn test_value_bounds_include_zero() {
        let series = [PlotSeries::from_columns("s", &[day(1), day(2)], &[Some(10.0), Some(20.0)])];
        let (lo, hi) = GraphUtils::value_bounds(&series);
        assert!((lo - 0.0).abs() < f64::EPSILON);
        assert!((hi - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_value_bounds_negative_and_flat() {
        let series = [PlotSeries::from_columns("s", &[day(1), day(2)], &[Some(-10.0), Some(10.0)])];
        let (lo, hi) = GraphUtils::value_bounds(&series);
        assert!(lo < -10.0 && hi > 10.0);

        let flat = [PlotSeries::from_columns("s", &[day(1)], &[Some(0.0)])];
        assert_eq!(GraphUtils::value_bounds(&flat), (0.0, 1.0));
    }

    #[test]
    fn test_date_bounds_ignore_absent() {
        let series = [PlotSeries::from_columns(
            "s",
            &[day(1), day(2), day(3), day(4)],
            &[None, Some(1.0), Some(2.0), None],
        )];
        assert_eq!(GraphUtils::date_bounds(&series), Some((day(2), day(3))));
        assert_eq!(GraphUtils::date_bounds(&[]), None);
    }

    #[test]
    fn test_date_coordinates_round_trip() {
        let x = GraphUtils::date_to_x(day(1), day(11));
        assert!((x - 10.0).abs() < f64::EPSILON);
        assert_eq!(GraphUtils::x_to_date(day(1), 9.6), day(11));
    }
}
