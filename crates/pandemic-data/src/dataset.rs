//! The three loaded source tables, held together for the lifetime of a run.

use pandemic_common::{JoinPolicy, Metric, PandemicError, Result};
use tracing::{info, instrument};

use crate::composite::CompositeTable;
use crate::source::DataSource;
use crate::table::RegionTable;

/// Confirmed, deaths and recovered region tables.
#[derive(Debug, Clone)]
pub struct CovidDataset {
    confirmed: RegionTable,
    deaths: RegionTable,
    recovered: RegionTable,
}

impl CovidDataset {
    /// Groups three tables, checking each holds the expected metric.
    pub fn new(confirmed: RegionTable, deaths: RegionTable, recovered: RegionTable) -> Result<Self> {
        for (table, expected) in [
            (&confirmed, Metric::Confirmed),
            (&deaths, Metric::Deaths),
            (&recovered, Metric::Recovered),
        ] {
            if table.metric() != expected {
                return Err(PandemicError::new(format!(
                    "expected a {expected} table, got {}",
                    table.metric()
                )));
            }
        }
        Ok(Self {
            confirmed,
            deaths,
            recovered,
        })
    }

    /// Loads all three tables from `source`, one after another.
    #[instrument(skip(source))]
    pub async fn load(source: &dyn DataSource) -> Result<Self> {
        let confirmed = source.load(Metric::Confirmed).await?;
        let deaths = source.load(Metric::Deaths).await?;
        let recovered = source.load(Metric::Recovered).await?;
        info!("All source tables loaded");
        Self::new(confirmed, deaths, recovered)
    }

    /// Table for `metric`.
    pub const fn table(&self, metric: Metric) -> &RegionTable {
        match metric {
            Metric::Confirmed => &self.confirmed,
            Metric::Deaths => &self.deaths,
            Metric::Recovered => &self.recovered,
        }
    }

    /// Countries present in the confirmed-cases table.
    pub fn countries(&self) -> Vec<&str> {
        self.confirmed.countries()
    }

    /// Whether any of the tables has rows for `country`.
    pub fn has_country(&self, country: &str) -> bool {
        Metric::ALL
            .iter()
            .any(|metric| self.table(*metric).has_country(country))
    }

    /// Aggregates every metric for `country` (the world when `None`) and aligns them.
    pub fn compose(&self, country: Option<&str>, policy: JoinPolicy) -> CompositeTable {
        CompositeTable::compose(
            country,
            &self.confirmed.aggregate(country),
            &self.deaths.aggregate(country),
            &self.recovered.aggregate(country),
            policy,
        )
    }
}
