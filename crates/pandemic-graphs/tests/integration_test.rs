//! Integration tests for pandemic-graphs crate.
//!
//! Charts are prepared from fixture tables loaded through the data layer and
//! rendered to PNG files with the plotters renderer.

use pandemic_common::test_utils::{create_temp_dir, table_fixtures};
use pandemic_common::{JoinPolicy, PandemicError, TrailingWindow};
use pandemic_config::GraphsConfig;
use pandemic_data::{CompositeTable, CovidDataset, StaticDataSource};
use pandemic_graphs::{
    ChartData, DailyIncreaseGraph, FatalityRateGraph, Graph, GraphConfig, GraphManager,
    GraphRenderer, LineChartRenderer, MonthlyDeathsGraph, WindowedDeathsGraph,
};

async fn compose(country: Option<&str>) -> CompositeTable {
    let source = StaticDataSource::new(
        table_fixtures::CONFIRMED_CSV,
        table_fixtures::DEATHS_CSV,
        table_fixtures::RECOVERED_CSV,
    );
    CovidDataset::load(&source)
        .await
        .unwrap()
        .compose(country, JoinPolicy::Outer)
}

fn values(chart: &ChartData) -> Vec<Option<f64>> {
    chart.series[0].points.iter().map(|p| p.value).collect()
}

#[tokio::test]
async fn test_world_charts_from_fixtures() {
    let world = compose(None).await;

    // World confirmed: 115, 168, 236, 295; deaths: 6, 9, 13, 19
    let increase = DailyIncreaseGraph.prepare(&world).unwrap();
    assert_eq!(values(&increase), vec![None, Some(53.0), Some(68.0), Some(59.0)]);

    let monthly = MonthlyDeathsGraph.prepare(&world).unwrap();
    assert_eq!(values(&monthly), vec![Some(3.0), Some(10.0)]);

    let rate = FatalityRateGraph.prepare(&world).unwrap();
    let last = values(&rate)[3].unwrap();
    assert!((last - 19.0 / 295.0 * 100.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_windowed_deaths_over_fixtures() {
    let table = compose(Some("Y")).await;

    let chart = WindowedDeathsGraph::new(TrailingWindow::Days(2))
        .prepare(&table)
        .unwrap();
    // Y deaths: 5, 8, 10, 15; the 2-day window keeps the last two days.
    assert_eq!(values(&chart), vec![None, Some(5.0)]);
    assert!(chart.title.ends_with(": Y"));
}

#[tokio::test]
async fn test_unknown_country_skips_fatality_rate() {
    let table = compose(Some("Atlantis")).await;
    assert!(!FatalityRateGraph.prepare(&table).unwrap().has_values());
    assert!(DailyIncreaseGraph.prepare(&table).unwrap().has_values());
}

#[tokio::test]
async fn test_renderer_rejects_chart_without_values() {
    let dir = create_temp_dir();
    let table = compose(Some("Atlantis")).await;
    let data = FatalityRateGraph.prepare(&table).unwrap();

    let err = LineChartRenderer::new()
        .render_to_file(&GraphConfig::default(), &data, &dir.path().join("rate.png"))
        .await
        .unwrap_err();
    assert!(matches!(err, PandemicError::Chart { .. }));
}

#[test]
fn test_manager_paths_use_region_slug() {
    let manager = GraphManager::new(&GraphsConfig::default(), "charts");
    let table = CompositeTable::from_rows(Some("United Kingdom"), Vec::new());
    assert_eq!(
        manager.chart_path(&table, "monthly_deaths"),
        std::path::Path::new("charts").join("united_kingdom_monthly_deaths.png")
    );
}

#[tokio::test]
async fn test_manager_renders_every_chart_to_png() {
    let dir = create_temp_dir();
    let world = compose(None).await;
    let mut config = GraphsConfig::default();
    config.enabled.cumulative_totals = true;

    let manager = GraphManager::new(&config, dir.path());
    let paths = manager.generate_all(&world).await.unwrap();

    let names: Vec<String> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "world_fatality_rate.png",
            "world_daily_increase.png",
            "world_monthly_deaths.png",
            "world_windowed_deaths_1m.png",
            "world_windowed_deaths_3w.png",
            "world_cumulative_totals.png",
        ]
    );
    for path in &paths {
        let metadata = std::fs::metadata(path).unwrap();
        assert!(metadata.len() > 0, "{} is empty", path.display());
    }
}
