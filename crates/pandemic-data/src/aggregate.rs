//! Per-country aggregation of region tables into daily series.

use chrono::NaiveDate;
use pandemic_common::Metric;
use std::collections::BTreeMap;
use tracing::debug;

use crate::table::RegionTable;

/// Cumulative count per calendar day for one metric.
///
/// Dates are kept in ascending order with one entry per day column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySeries {
    metric: Metric,
    values: BTreeMap<NaiveDate, u64>,
}

impl DailySeries {
    /// Creates a series from date/count pairs.
    pub fn new(metric: Metric, values: impl IntoIterator<Item = (NaiveDate, u64)>) -> Self {
        Self {
            metric,
            values: values.into_iter().collect(),
        }
    }

    /// Metric this series counts.
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    /// Column label, e.g. "Confirmed".
    pub const fn label(&self) -> &'static str {
        self.metric.label()
    }

    /// Count on `date`, if the date is present.
    pub fn get(&self, date: NaiveDate) -> Option<u64> {
        self.values.get(&date).copied()
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no days.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Days in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.values.keys().copied()
    }

    /// `(date, count)` pairs in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u64)> + '_ {
        self.values.iter().map(|(date, count)| (*date, *count))
    }
}

/// Sums every row of `table` whose country equals `country` exactly, per day.
///
/// With no country every row is summed (the world aggregate). A country that
/// matches no row yields a series of zeros over all of the table's days.
pub fn aggregate(table: &RegionTable, country: Option<&str>) -> DailySeries {
    let mut totals = vec![0u64; table.dates().len()];
    let mut matched = 0usize;

    for record in table
        .records()
        .iter()
        .filter(|record| country.map_or(true, |c| record.country == c))
    {
        matched += 1;
        for (total, count) in totals.iter_mut().zip(record.counts()) {
            *total = total.saturating_add(*count);
        }
    }

    debug!(
        metric = %table.metric(),
        country = country.unwrap_or("<world>"),
        matched,
        "Aggregated region rows"
    );

    DailySeries::new(
        table.metric(),
        table.dates().iter().copied().zip(totals),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pandemic_common::test_utils::table_fixtures;

    fn confirmed() -> RegionTable {
        RegionTable::from_csv_str(Metric::Confirmed, table_fixtures::CONFIRMED_CSV).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_two_regions_sum_on_first_day() {
        let table = RegionTable::from_csv_str(Metric::Confirmed, table_fixtures::TWO_REGION_CSV).unwrap();
        let series = aggregate(&table, Some("X"));

        assert_eq!(series.len(), 1);
        assert_eq!(series.get(date(2020, 1, 22)), Some(15));
        assert_eq!(series.label(), "Confirmed");
    }

    #[test]
    fn test_country_filter() {
        let series = confirmed().aggregate(Some("X"));
        let values: Vec<u64> = series.iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![15, 18, 26, 35]);
    }

    #[test]
    fn test_world_sums_every_row() {
        let series = confirmed().aggregate(None);
        let values: Vec<u64> = series.iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![115, 168, 236, 295]);
    }

    #[test]
    fn test_unknown_country_is_all_zero() {
        let series = confirmed().aggregate(Some("Atlantis"));
        assert_eq!(series.len(), 4);
        assert!(series.iter().all(|(_, v)| v == 0));
    }

    #[test]
    fn test_match_is_case_sensitive_and_exact() {
        assert!(confirmed().aggregate(Some("x")).iter().all(|(_, v)| v == 0));
        assert!(confirmed().aggregate(Some("X ")).iter().all(|(_, v)| v == 0));
    }

    #[test]
    fn test_dates_are_ascending() {
        let series = confirmed().aggregate(None);
        let dates: Vec<NaiveDate> = series.dates().collect();
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }
}
