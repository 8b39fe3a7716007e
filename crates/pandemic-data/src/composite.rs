//! Date-aligned table of the three cumulative series for one region.

use chrono::NaiveDate;
use pandemic_common::{region_display_name, JoinPolicy, Metric, Result, TrailingWindow};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;

use crate::aggregate::DailySeries;

/// One day of the composite table. Absent values mean the source had no
/// column for that day, which is different from a count of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompositeRow {
    /// Calendar day.
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Cumulative confirmed cases.
    #[serde(rename = "Confirmed")]
    pub confirmed: Option<u64>,
    /// Cumulative deaths.
    #[serde(rename = "Deaths")]
    pub deaths: Option<u64>,
    /// Cumulative recoveries.
    #[serde(rename = "Recovered")]
    pub recovered: Option<u64>,
}

impl CompositeRow {
    /// Value of `metric` on this day.
    pub const fn get(&self, metric: Metric) -> Option<u64> {
        match metric {
            Metric::Confirmed => self.confirmed,
            Metric::Deaths => self.deaths,
            Metric::Recovered => self.recovered,
        }
    }
}

/// Confirmed, deaths and recovered series aligned on date, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeTable {
    region: Option<String>,
    rows: Vec<CompositeRow>,
}

impl CompositeTable {
    /// Aligns three daily series under `policy`.
    ///
    /// `Outer` keeps every date seen in any series and leaves missing values
    /// absent; `Inner` keeps only dates present in all three.
    pub fn compose(
        region: Option<&str>,
        confirmed: &DailySeries,
        deaths: &DailySeries,
        recovered: &DailySeries,
        policy: JoinPolicy,
    ) -> Self {
        let series = [confirmed, deaths, recovered];
        let dates: BTreeSet<NaiveDate> = match policy {
            JoinPolicy::Outer => series.iter().flat_map(|s| s.dates()).collect(),
            JoinPolicy::Inner => confirmed
                .dates()
                .filter(|date| deaths.get(*date).is_some() && recovered.get(*date).is_some())
                .collect(),
        };

        let rows = dates
            .into_iter()
            .map(|date| CompositeRow {
                date,
                confirmed: confirmed.get(date),
                deaths: deaths.get(date),
                recovered: recovered.get(date),
            })
            .collect();

        Self {
            region: region.map(str::to_string),
            rows,
        }
    }

    /// Builds a table from rows, sorting them by date.
    pub fn from_rows(region: Option<&str>, mut rows: Vec<CompositeRow>) -> Self {
        rows.sort_by_key(|row| row.date);
        rows.dedup_by_key(|row| row.date);
        Self {
            region: region.map(str::to_string),
            rows,
        }
    }

    /// Country filter the table was built for; `None` is the world aggregate.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Country name, or "World".
    pub fn display_name(&self) -> &str {
        region_display_name(self.region())
    }

    /// Rows in chronological order.
    pub fn rows(&self) -> &[CompositeRow] {
        &self.rows
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no days.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Dates in chronological order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|row| row.date).collect()
    }

    /// One metric's column.
    pub fn column(&self, metric: Metric) -> Vec<Option<u64>> {
        self.rows.iter().map(|row| row.get(metric)).collect()
    }

    /// Most recent date.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|row| row.date)
    }

    /// Rows strictly after `last_date - window`.
    pub fn trailing(&self, window: TrailingWindow) -> Self {
        let start = self.last_date().and_then(|last| window.start_before(last));
        let rows = match start {
            Some(start) => self
                .rows
                .iter()
                .filter(|row| row.date > start)
                .copied()
                .collect(),
            None => self.rows.clone(),
        };
        Self {
            region: self.region.clone(),
            rows,
        }
    }

    /// Writes the table as CSV with a `Date,Confirmed,Deaths,Recovered` header.
    /// Absent values become empty cells.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        if self.rows.is_empty() {
            writer.write_record(["Date", "Confirmed", "Deaths", "Recovered"])?;
        }
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// The table as a CSV string.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| pandemic_common::PandemicError::with_source("CSV output was not UTF-8", e))
    }
}
