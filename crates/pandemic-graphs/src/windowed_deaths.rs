//! Daily deaths over a trailing window ending at the latest date.

use pandemic_common::{Metric, Result, TrailingWindow};
use pandemic_data::CompositeTable;

use crate::series::{first_difference, to_f64};
use crate::traits::{region_title, Graph};
use crate::types::{ChartData, PlotSeries};

/// First difference of deaths within the last `window` of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowedDeathsGraph {
    window: TrailingWindow,
}

impl WindowedDeathsGraph {
    /// Creates a chart over `window`.
    pub const fn new(window: TrailingWindow) -> Self {
        Self { window }
    }

    /// Window covered by this chart.
    pub const fn window(&self) -> TrailingWindow {
        self.window
    }
}

impl Graph for WindowedDeathsGraph {
    fn name(&self) -> String {
        format!("windowed_deaths_{}", self.window.to_string().to_ascii_lowercase())
    }

    fn description(&self) -> &'static str {
        "Daily deaths over a trailing window"
    }

    fn prepare(&self, table: &CompositeTable) -> Result<ChartData> {
        let recent = table.trailing(self.window);
        let daily = first_difference(&recent.column(Metric::Deaths));
        let series = PlotSeries::from_columns("Deaths", &recent.dates(), &to_f64(&daily));

        let base = format!("Daily deaths, {}", self.window.describe());
        Ok(ChartData::new(region_title(&base, table), "Date", "Deaths").with_series(series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use pandemic_data::CompositeRow;

    fn table(days: i64) -> CompositeTable {
        let start = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        let rows = (0..days)
            .map(|i| CompositeRow {
                date: start + Duration::days(i),
                confirmed: Some(1000),
                deaths: Some(u64::try_from(i * i).unwrap()),
                recovered: None,
            })
            .collect();
        CompositeTable::from_rows(Some("X"), rows)
    }

    #[test]
    fn test_three_weeks_keeps_last_21_days() {
        let graph = WindowedDeathsGraph::new(TrailingWindow::Weeks(3));
        let chart = graph.prepare(&table(40)).unwrap();

        let points = &chart.series[0].points;
        assert_eq!(points.len(), 21);
        assert_eq!(points[0].value, None);
        // deaths(i) = i^2, so deaths(20) - deaths(19) = 39
        assert_eq!(points[1].value, Some(39.0));
        assert_eq!(chart.title, "Daily deaths, last 3 weeks: X");
        assert_eq!(graph.name(), "windowed_deaths_3w");
    }

    #[test]
    fn test_window_longer_than_table_keeps_everything() {
        let chart = WindowedDeathsGraph::new(TrailingWindow::Months(1))
            .prepare(&table(10))
            .unwrap();
        assert_eq!(chart.series[0].points.len(), 10);
    }
}
