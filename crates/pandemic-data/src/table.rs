//! Region tables: one row per administrative region, one column per day.

use chrono::NaiveDate;
use pandemic_common::{parse_day_header, Metric, PandemicError, Result};
use std::collections::{BTreeSet, HashSet};
use std::io::Read;

use crate::aggregate::{aggregate, DailySeries};

/// Number of descriptive columns before the first day column
/// (province/state, country/region, latitude, longitude).
pub const DESCRIPTOR_COLUMNS: usize = 4;

/// One administrative region and its cumulative counts.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRecord {
    /// Province or state, absent for country-level rows.
    pub province: Option<String>,
    /// Country or region name.
    pub country: String,
    /// Latitude, when the source provides one.
    pub latitude: Option<f64>,
    /// Longitude, when the source provides one.
    pub longitude: Option<f64>,
    counts: Vec<u64>,
}

impl RegionRecord {
    /// Creates a record; `counts` must line up with the owning table's dates.
    pub fn new(province: Option<String>, country: impl Into<String>, counts: Vec<u64>) -> Self {
        Self {
            province,
            country: country.into(),
            latitude: None,
            longitude: None,
            counts,
        }
    }

    /// Cumulative counts, one per day column.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }
}

/// A loaded source table for one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionTable {
    metric: Metric,
    dates: Vec<NaiveDate>,
    records: Vec<RegionRecord>,
}

impl RegionTable {
    /// Builds a table from parts, checking that every record has one count per date
    /// and that no date repeats.
    pub fn from_parts(
        metric: Metric,
        dates: Vec<NaiveDate>,
        records: Vec<RegionRecord>,
    ) -> Result<Self> {
        let mut seen = HashSet::with_capacity(dates.len());
        if let Some(duplicate) = dates.iter().find(|date| !seen.insert(**date)) {
            return Err(PandemicError::parse(format!(
                "duplicate day column {duplicate}"
            )));
        }
        if let Some(record) = records.iter().find(|r| r.counts.len() != dates.len()) {
            return Err(PandemicError::parse(format!(
                "region '{}' has {} counts for {} days",
                record.country,
                record.counts.len(),
                dates.len()
            )));
        }
        Ok(Self {
            metric,
            dates,
            records,
        })
    }

    /// Parses a comma-separated table.
    pub fn from_csv_str(metric: Metric, text: &str) -> Result<Self> {
        Self::from_reader(metric, text.as_bytes())
    }

    /// Parses a comma-separated table from any reader.
    ///
    /// Blank count cells are read as zero; fractional counts are truncated.
    pub fn from_reader<R: Read>(metric: Metric, reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        if headers.len() < DESCRIPTOR_COLUMNS {
            return Err(PandemicError::parse(format!(
                "expected at least {DESCRIPTOR_COLUMNS} columns, found {}",
                headers.len()
            )));
        }

        let mut seen = HashSet::with_capacity(headers.len() - DESCRIPTOR_COLUMNS);
        let mut dates = Vec::with_capacity(headers.len() - DESCRIPTOR_COLUMNS);
        for header in headers.iter().skip(DESCRIPTOR_COLUMNS) {
            let date = parse_day_header(header).ok_or_else(|| {
                PandemicError::parse_at("column is not a calendar day", Some(1), header)
            })?;
            if !seen.insert(date) {
                return Err(PandemicError::parse_at("duplicate day column", Some(1), header));
            }
            dates.push(date);
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            let line = row.position().map(csv::Position::line);

            let counts = row
                .iter()
                .zip(headers.iter())
                .skip(DESCRIPTOR_COLUMNS)
                .map(|(cell, header)| parse_count(cell, line, header))
                .collect::<Result<Vec<u64>>>()?;

            records.push(RegionRecord {
                province: non_empty(row.get(0)),
                country: row.get(1).unwrap_or_default().to_string(),
                latitude: parse_coordinate(row.get(2), line, &headers[2])?,
                longitude: parse_coordinate(row.get(3), line, &headers[3])?,
                counts,
            });
        }

        tracing::debug!(
            metric = %metric,
            regions = records.len(),
            days = dates.len(),
            "Parsed region table"
        );

        Self::from_parts(metric, dates, records)
    }

    /// Metric held by this table.
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    /// Day-column dates in source order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// All region records.
    pub fn records(&self) -> &[RegionRecord] {
        &self.records
    }

    /// Number of region records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no region records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct country names, sorted.
    pub fn countries(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.country.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Whether any row's country equals `country` exactly.
    pub fn has_country(&self, country: &str) -> bool {
        self.records.iter().any(|r| r.country == country)
    }

    /// Sums the rows matching `country` (all rows when `None`) per day.
    pub fn aggregate(&self, country: Option<&str>) -> DailySeries {
        aggregate(self, country)
    }
}

fn non_empty(cell: Option<&str>) -> Option<String> {
    cell.filter(|c| !c.is_empty()).map(str::to_string)
}

fn parse_coordinate(cell: Option<&str>, line: Option<u64>, header: &str) -> Result<Option<f64>> {
    match cell {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse::<f64>()
            .map(Some)
            .map_err(|_| PandemicError::parse_at(format!("invalid coordinate '{text}'"), line, header)),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_count(cell: &str, line: Option<u64>, header: &str) -> Result<u64> {
    if cell.is_empty() {
        return Ok(0);
    }
    if let Ok(value) = cell.parse::<u64>() {
        return Ok(value);
    }
    match cell.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value.trunc() as u64),
        Ok(_) => Err(PandemicError::parse_at(
            format!("count '{cell}' is negative or not finite"),
            line,
            header,
        )),
        Err(_) => Err(PandemicError::parse_at(
            format!("count '{cell}' is not a number"),
            line,
            header,
        )),
    }
}
