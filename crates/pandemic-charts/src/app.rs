//! Application run: load once, then compose, chart and export per region.

use pandemic_common::{format_date, region_display_name, slugify};
use pandemic_config::Config;
use pandemic_data::{CompositeTable, CovidDataset, DataSource, UriDataSource};
use pandemic_graphs::GraphManager;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, instrument, warn};

use crate::error::AppResult;

/// Files produced by a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Rendered chart images
    pub charts: Vec<PathBuf>,
    /// Exported composite tables
    pub exports: Vec<PathBuf>,
}

/// The charting application.
pub struct ChartsApp {
    config: Config,
    source: Box<dyn DataSource>,
    graphs: GraphManager,
}

impl ChartsApp {
    /// Creates the application reading from the configured source URIs.
    pub fn new(config: Config) -> AppResult<Self> {
        let source = UriDataSource::new(config.sources.clone())?;
        let graphs = GraphManager::new(&config.graphs, &config.output.directory);
        Ok(Self::with_parts(config, Box::new(source), graphs))
    }

    /// Creates the application from explicit parts.
    pub fn with_parts(config: Config, source: Box<dyn DataSource>, graphs: GraphManager) -> Self {
        Self {
            config,
            source,
            graphs,
        }
    }

    /// Runs for the configured regions, or for one line read from stdin when
    /// `selection.prompt_stdin` is set.
    pub async fn run(&self) -> AppResult<RunSummary> {
        let targets = if self.config.selection.prompt_stdin {
            let mut stdin = BufReader::new(tokio::io::stdin());
            vec![read_country_line(&mut stdin).await?]
        } else {
            self.config.selection.targets()
        };
        self.run_for(&targets).await
    }

    /// Loads the tables once and processes every target in order.
    #[instrument(skip_all, fields(regions = targets.len()))]
    pub async fn run_for(&self, targets: &[Option<String>]) -> AppResult<RunSummary> {
        let dataset = CovidDataset::load(self.source.as_ref()).await?;

        let mut summary = RunSummary::default();
        for target in targets {
            let country = target.as_deref();
            if let Some(name) = country {
                if !dataset.has_country(name) {
                    warn!(country = name, "No rows for country, charting zeros");
                }
            }

            let table = dataset.compose(country, self.config.selection.alignment);
            info!(
                region = region_display_name(country),
                days = table.len(),
                last = %table.last_date().map_or_else(String::new, format_date),
                "Composed table"
            );

            summary.charts.extend(self.graphs.generate_all(&table).await?);
            if self.config.output.export_csv {
                summary.exports.push(self.export(&table).await?);
            }
        }
        Ok(summary)
    }

    async fn export(&self, table: &CompositeTable) -> AppResult<PathBuf> {
        let dir = &self.config.output.directory;
        tokio::fs::create_dir_all(dir).await?;

        let path = dir.join(format!("{}_table.csv", slugify(table.display_name())));
        tokio::fs::write(&path, table.to_csv_string()?).await?;
        info!("Exported table to {}", path.display());
        Ok(path)
    }
}

/// Reads one country name; a blank line (or end of input) selects the world.
pub async fn read_country_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> AppResult<Option<String>> {
    let mut line = String::new();
    reader.read_line(&mut line).await?;
    let country = line.trim();
    Ok((!country.is_empty()).then(|| country.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_country_line() {
        let mut input: &[u8] = b"  Italy \nFrance\n";
        assert_eq!(read_country_line(&mut input).await.unwrap(), Some("Italy".to_string()));

        let mut blank: &[u8] = b"\n";
        assert_eq!(read_country_line(&mut blank).await.unwrap(), None);

        let mut empty: &[u8] = b"";
        assert_eq!(read_country_line(&mut empty).await.unwrap(), None);
    }
}
