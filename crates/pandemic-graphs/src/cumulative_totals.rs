//! Cumulative confirmed cases and deaths, one panel each.

use pandemic_common::{Metric, Result};
use pandemic_data::CompositeTable;

use crate::series::to_f64;
use crate::traits::{region_title, Graph};
use crate::types::{ChartData, PanelLayout, PlotSeries};

/// Running totals of confirmed cases and deaths in stacked panels.
#[derive(Debug, Clone, Copy, Default)]
pub struct CumulativeTotalsGraph;

impl Graph for CumulativeTotalsGraph {
    fn name(&self) -> String {
        "cumulative_totals".to_string()
    }

    fn description(&self) -> &'static str {
        "Cumulative confirmed cases and deaths"
    }

    fn prepare(&self, table: &CompositeTable) -> Result<ChartData> {
        let dates = table.dates();
        let mut chart = ChartData::new(region_title("Cumulative totals", table), "Date", "Count")
            .with_layout(PanelLayout::Stacked);
        for metric in [Metric::Confirmed, Metric::Deaths] {
            chart = chart.with_series(PlotSeries::from_columns(
                metric.label(),
                &dates,
                &to_f64(&table.column(metric)),
            ));
        }
        Ok(chart)
    }
}
