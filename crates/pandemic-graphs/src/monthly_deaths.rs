//! Deaths per calendar month.

use pandemic_common::{Metric, Result};
use pandemic_data::CompositeTable;

use crate::series::{first_difference, monthly_sums};
use crate::traits::{region_title, Graph};
use crate::types::{ChartData, PlotPoint, PlotSeries};

/// Daily deaths summed into calendar-month buckets.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyDeathsGraph;

impl Graph for MonthlyDeathsGraph {
    fn name(&self) -> String {
        "monthly_deaths".to_string()
    }

    fn description(&self) -> &'static str {
        "Deaths per month"
    }

    #[allow(clippy::cast_precision_loss)]
    fn prepare(&self, table: &CompositeTable) -> Result<ChartData> {
        let daily = first_difference(&table.column(Metric::Deaths));
        let points = monthly_sums(&table.dates(), &daily)
            .into_iter()
            .map(|(month, total)| PlotPoint::new(month, Some(total as f64)))
            .collect();

        Ok(ChartData::new(region_title("Deaths per month", table), "Month", "Deaths")
            .with_date_format("%Y-%m")
            .with_series(PlotSeries::new("Deaths", points)))
    }
}
