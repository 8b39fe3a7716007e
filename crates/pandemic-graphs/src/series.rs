//! Pure transforms from composite-table columns to plotted values.

use chrono::{Datelike, Months, NaiveDate};
use std::collections::BTreeMap;

/// Day-over-day change. The first element, and any element next to an absent
/// value, is absent.
pub fn first_difference(values: &[Option<u64>]) -> Vec<Option<i64>> {
    let mut out = Vec::with_capacity(values.len());
    let mut previous: Option<u64> = None;
    for (i, value) in values.iter().enumerate() {
        let diff = if i == 0 {
            None
        } else {
            value.zip(previous).and_then(|(current, prior)| {
                let current = i64::try_from(current).ok()?;
                let prior = i64::try_from(prior).ok()?;
                current.checked_sub(prior)
            })
        };
        out.push(diff);
        previous = *value;
    }
    out
}

/// `numerator / denominator * 100`, absent when either side is absent or the
/// denominator is zero.
#[allow(clippy::cast_precision_loss)]
pub fn percentage(numerator: &[Option<u64>], denominator: &[Option<u64>]) -> Vec<Option<f64>> {
    numerator
        .iter()
        .zip(denominator)
        .map(|(n, d)| match (n, d) {
            (Some(n), Some(d)) if *d > 0 => Some(*n as f64 / *d as f64 * 100.0),
            _ => None,
        })
        .collect()
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Sums `values` into calendar-month buckets keyed by the month's first day.
///
/// Every month from the first to the last date gets a bucket; absent values
/// are skipped, so a month without present values sums to zero.
pub fn monthly_sums(dates: &[NaiveDate], values: &[Option<i64>]) -> Vec<(NaiveDate, i64)> {
    let (Some(first), Some(last)) = (dates.iter().min(), dates.iter().max()) else {
        return Vec::new();
    };

    let mut buckets = BTreeMap::new();
    let end = month_start(*last);
    let mut month = month_start(*first);
    while month <= end {
        buckets.insert(month, 0i64);
        match month.checked_add_months(Months::new(1)) {
            Some(next) => month = next,
            None => break,
        }
    }

    for (date, value) in dates.iter().zip(values) {
        if let (Some(value), Some(total)) = (value, buckets.get_mut(&month_start(*date))) {
            *total = total.saturating_add(*value);
        }
    }
    buckets.into_iter().collect()
}

/// Widens an integer column for plotting.
#[allow(clippy::cast_precision_loss)]
pub fn to_f64<T: Copy + Into<i128>>(values: &[Option<T>]) -> Vec<Option<f64>> {
    values
        .iter()
        .map(|v| {
            v.map(|v| {
                let wide: i128 = v.into();
                wide as f64
            })
        })
        .collect()
}
