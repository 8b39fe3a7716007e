//! Integration tests for pandemic-charts crate.
//!
//! These run the whole load, compose, chart and export flow against fixture
//! tables, with a renderer that records charts instead of drawing them.

use async_trait::async_trait;
use pandemic_charts::ChartsApp;
use pandemic_common::test_utils::{create_temp_dir, file_uri, init_test_logging, table_fixtures, write_fixture};
use pandemic_common::Result;
use pandemic_config::Config;
use pandemic_data::StaticDataSource;
use pandemic_graphs::{ChartData, GraphConfig, GraphManager, GraphRenderer};
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingRenderer {
    titles: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl GraphRenderer for RecordingRenderer {
    async fn render_to_file(&self, _config: &GraphConfig, data: &ChartData, path: &Path) -> Result<()> {
        self.titles.lock().unwrap().push(data.title.clone());
        tokio::fs::write(path, b"png").await?;
        Ok(())
    }
}

fn fixture_source() -> Box<StaticDataSource> {
    Box::new(StaticDataSource::new(
        table_fixtures::CONFIRMED_CSV,
        table_fixtures::DEATHS_CSV,
        table_fixtures::RECOVERED_CSV,
    ))
}

#[tokio::test]
async fn test_run_charts_and_exports_each_region() {
    init_test_logging();
    let dir = create_temp_dir();

    let mut config = Config::default();
    config.selection.countries = vec!["Y".to_string()];
    config.selection.include_world = true;
    config.output.directory = dir.path().join("charts");
    config.output.export_csv = true;

    let titles = Arc::new(Mutex::new(Vec::new()));
    let renderer = RecordingRenderer {
        titles: Arc::clone(&titles),
    };
    let graphs = GraphManager::with_renderer(&config.graphs, &config.output.directory, Box::new(renderer));
    let app = ChartsApp::with_parts(config.clone(), fixture_source(), graphs);

    let summary = app.run_for(&config.selection.targets()).await.unwrap();

    // Five default charts for Y, then five for the world.
    assert_eq!(summary.charts.len(), 10);
    assert!(summary.charts[0].ends_with("y_fatality_rate.png"));
    assert!(summary.charts[5].ends_with("world_fatality_rate.png"));
    assert_eq!(titles.lock().unwrap()[5], "Fatality rate: World");

    assert_eq!(summary.exports.len(), 2);
    let world_csv = std::fs::read_to_string(&summary.exports[1]).unwrap();
    assert!(world_csv.starts_with("Date,Confirmed,Deaths,Recovered\n2020-01-30,115,6,10\n"));
}

#[tokio::test]
async fn test_unknown_country_still_produces_charts() {
    let dir = create_temp_dir();
    let mut config = Config::default();
    config.output.directory = dir.path().to_path_buf();

    let graphs = GraphManager::with_renderer(
        &config.graphs,
        &config.output.directory,
        Box::new(RecordingRenderer::default()),
    );
    let app = ChartsApp::with_parts(config, fixture_source(), graphs);

    let summary = app.run_for(&[Some("Atlantis".to_string())]).await.unwrap();

    // The fatality rate is undefined everywhere and is skipped.
    assert_eq!(summary.charts.len(), 4);
    assert!(summary.exports.is_empty());
}

#[tokio::test]
async fn test_missing_source_fails_run() {
    let dir = create_temp_dir();
    let mut config = Config::default();
    config.sources.confirmed = file_uri(&write_fixture(dir.path(), "confirmed.csv", table_fixtures::CONFIRMED_CSV));
    config.sources.deaths = file_uri(&dir.path().join("missing.csv"));
    config.output.directory = dir.path().join("charts");

    let app = ChartsApp::new(config).unwrap();
    let err = app.run_for(&[None]).await.unwrap_err();

    assert!(err.to_string().contains("missing.csv"));
    assert!(!dir.path().join("charts").exists());
}
