//! Daily fatality rate: deaths as a percentage of confirmed cases.

use pandemic_common::{Metric, Result};
use pandemic_data::CompositeTable;

use crate::series::percentage;
use crate::traits::{region_title, Graph};
use crate::types::{ChartData, PlotSeries};

/// Deaths divided by confirmed cases, in percent, per day.
#[derive(Debug, Clone, Copy, Default)]
pub struct FatalityRateGraph;

impl Graph for FatalityRateGraph {
    fn name(&self) -> String {
        "fatality_rate".to_string()
    }

    fn description(&self) -> &'static str {
        "Fatality rate (deaths / confirmed cases) over time"
    }

    fn prepare(&self, table: &CompositeTable) -> Result<ChartData> {
        let rates = percentage(&table.column(Metric::Deaths), &table.column(Metric::Confirmed));
        let series = PlotSeries::from_columns("Fatality rate", &table.dates(), &rates);

        Ok(ChartData::new(region_title("Fatality rate", table), "Date", "Fatality rate [%]").with_series(series))
    }
}
