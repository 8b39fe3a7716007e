//! Data sources yielding one region table per metric.

use async_trait::async_trait;
use pandemic_common::{Metric, PandemicError, Result};
use pandemic_config::SourcesConfig;
use std::collections::HashMap;
use std::time::Duration;
use tracing::info;

use crate::fetcher::{Fetch, FileFetcher, HttpFetcher, Scheme};
use crate::table::RegionTable;

/// Anything that can produce the region table for a metric.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Loads and parses the table for `metric`.
    async fn load(&self, metric: Metric) -> Result<RegionTable>;
}

/// Loads tables from the URIs in [`SourcesConfig`].
pub struct UriDataSource {
    sources: SourcesConfig,
    http: HttpFetcher,
    file: FileFetcher,
}

impl UriDataSource {
    /// Creates a source; fails if a configured URI has an unsupported scheme.
    pub fn new(sources: SourcesConfig) -> Result<Self> {
        for metric in Metric::ALL {
            Scheme::of(sources.uri(metric))?;
        }
        let http = HttpFetcher::new(Duration::from_secs(sources.timeout_seconds))?;
        Ok(Self {
            sources,
            http,
            file: FileFetcher,
        })
    }
}

#[async_trait]
impl DataSource for UriDataSource {
    async fn load(&self, metric: Metric) -> Result<RegionTable> {
        let uri = self.sources.uri(metric);
        info!(%metric, uri, "Retrieving source table");

        let body = match Scheme::of(uri)? {
            Scheme::Http => self.http.fetch(uri).await?,
            Scheme::File => self.file.fetch(uri).await?,
        };

        let table = RegionTable::from_csv_str(metric, &body)?;
        info!(
            %metric,
            regions = table.len(),
            days = table.dates().len(),
            "Loaded source table"
        );
        Ok(table)
    }
}

/// In-memory CSV bodies, keyed by metric.
#[derive(Debug, Clone, Default)]
pub struct StaticDataSource {
    bodies: HashMap<Metric, String>,
}

impl StaticDataSource {
    /// Creates a source holding the three CSV bodies.
    pub fn new(
        confirmed: impl Into<String>,
        deaths: impl Into<String>,
        recovered: impl Into<String>,
    ) -> Self {
        let bodies = HashMap::from([
            (Metric::Confirmed, confirmed.into()),
            (Metric::Deaths, deaths.into()),
            (Metric::Recovered, recovered.into()),
        ]);
        Self { bodies }
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    async fn load(&self, metric: Metric) -> Result<RegionTable> {
        let body = self
            .bodies
            .get(&metric)
            .ok_or_else(|| PandemicError::fetch(format!("No {metric} table available")))?;
        RegionTable::from_csv_str(metric, body)
    }
}
