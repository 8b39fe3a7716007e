//! New confirmed cases per day.

use pandemic_common::{Metric, Result};
use pandemic_data::CompositeTable;

use crate::series::{first_difference, to_f64};
use crate::traits::{region_title, Graph};
use crate::types::{ChartData, PlotSeries};

/// First difference of the confirmed series.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyIncreaseGraph;

impl Graph for DailyIncreaseGraph {
    fn name(&self) -> String {
        "daily_increase".to_string()
    }

    fn description(&self) -> &'static str {
        "Daily increase of confirmed cases"
    }

    fn prepare(&self, table: &CompositeTable) -> Result<ChartData> {
        let increase = first_difference(&table.column(Metric::Confirmed));
        let series = PlotSeries::from_columns("New cases", &table.dates(), &to_f64(&increase));

        Ok(ChartData::new(region_title("Daily increase of confirmed cases", table), "Date", "New cases")
            .with_series(series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pandemic_common::test_utils::table_fixtures;
    use pandemic_common::JoinPolicy;
    use pandemic_data::{CovidDataset, StaticDataSource};

    #[tokio::test]
    async fn test_increase_from_fixtures() {
        let source = StaticDataSource::new(
            table_fixtures::CONFIRMED_CSV,
            table_fixtures::DEATHS_CSV,
            table_fixtures::RECOVERED_CSV,
        );
        let dataset = CovidDataset::load(&source).await.unwrap();
        let table = dataset.compose(Some("X"), JoinPolicy::Outer);

        let chart = DailyIncreaseGraph.prepare(&table).unwrap();
        let values: Vec<Option<f64>> = chart.series[0].points.iter().map(|p| p.value).collect();
        // X confirmed: 15, 18, 26, 35
        assert_eq!(values, vec![None, Some(3.0), Some(8.0), Some(9.0)]);
        assert_eq!(chart.title, "Daily increase of confirmed cases: X");
    }
}
