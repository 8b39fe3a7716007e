//! Graph manager for coordinating chart generation.

use pandemic_common::{slugify, Result};
use pandemic_config::GraphsConfig;
use pandemic_data::CompositeTable;
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

use crate::cumulative_totals::CumulativeTotalsGraph;
use crate::daily_increase::DailyIncreaseGraph;
use crate::fatality_rate::FatalityRateGraph;
use crate::monthly_deaths::MonthlyDeathsGraph;
use crate::renderer::{GraphRenderer, LineChartRenderer};
use crate::traits::Graph;
use crate::types::GraphConfig;
use crate::windowed_deaths::WindowedDeathsGraph;

/// Runs every enabled chart for a composite table.
pub struct GraphManager {
    graphs: Vec<Box<dyn Graph>>,
    renderer: Box<dyn GraphRenderer>,
    config: GraphConfig,
    output_dir: PathBuf,
}

impl GraphManager {
    /// Creates a manager for the charts enabled in `graphs`, writing into `output_dir`.
    pub fn new(graphs: &GraphsConfig, output_dir: impl Into<PathBuf>) -> Self {
        Self::with_renderer(graphs, output_dir, Box::new(LineChartRenderer::new()))
    }

    /// Creates a manager with a custom renderer.
    pub fn with_renderer(
        graphs: &GraphsConfig,
        output_dir: impl Into<PathBuf>,
        renderer: Box<dyn GraphRenderer>,
    ) -> Self {
        Self {
            graphs: Self::enabled_graphs(graphs),
            renderer,
            config: GraphConfig::from(&graphs.styling),
            output_dir: output_dir.into(),
        }
    }

    fn enabled_graphs(config: &GraphsConfig) -> Vec<Box<dyn Graph>> {
        let enabled = &config.enabled;
        let mut graphs: Vec<Box<dyn Graph>> = Vec::new();
        if enabled.fatality_rate {
            graphs.push(Box::new(FatalityRateGraph));
        }
        if enabled.daily_increase {
            graphs.push(Box::new(DailyIncreaseGraph));
        }
        if enabled.monthly_deaths {
            graphs.push(Box::new(MonthlyDeathsGraph));
        }
        if enabled.windowed_deaths {
            for window in &config.windows {
                graphs.push(Box::new(WindowedDeathsGraph::new(*window)));
            }
        }
        if enabled.cumulative_totals {
            graphs.push(Box::new(CumulativeTotalsGraph));
        }
        graphs
    }

    /// Names of the charts this manager will produce, in order.
    pub fn graph_names(&self) -> Vec<String> {
        self.graphs.iter().map(|g| g.name()).collect()
    }

    /// Output path of chart `name` for `table`.
    pub fn chart_path(&self, table: &CompositeTable, name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_{name}.png", slugify(table.display_name())))
    }

    /// Prepares and renders every enabled chart, returning the written files.
    ///
    /// Charts with nothing to draw are skipped with a warning.
    #[instrument(skip_all, fields(region = table.display_name()))]
    pub async fn generate_all(&self, table: &CompositeTable) -> Result<Vec<PathBuf>> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let mut written = Vec::with_capacity(self.graphs.len());
        for graph in &self.graphs {
            let name = graph.name();
            debug!(chart = %name, "{}", graph.description());

            let data = graph.prepare(table)?;
            if !data.has_values() {
                warn!(chart = %name, "Skipping chart with no values to plot");
                continue;
            }

            let path = self.chart_path(table, &name);
            self.renderer.render_to_file(&self.config, &data, &path).await?;
            written.push(path);
        }

        info!(count = written.len(), "Charts generated");
        Ok(written)
    }
}
