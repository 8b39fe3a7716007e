//! Graph rendering trait and the plotters line-chart implementation.

use async_trait::async_trait;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

use pandemic_common::{PandemicError, Result};

use crate::types::{ChartData, GraphConfig, PanelLayout, PlotSeries};
use crate::utils::GraphUtils;

/// Trait for rendering prepared chart data to image files.
#[async_trait]
pub trait GraphRenderer: Send + Sync {
    /// Renders `data` as a PNG at `path`.
    async fn render_to_file(&self, config: &GraphConfig, data: &ChartData, path: &Path) -> Result<()>;

    /// Parse a color string (hex format) to `RGBColor`
    fn parse_color(&self, color_str: &str) -> RGBColor {
        if let Some(hex) = color_str.strip_prefix('#') {
            if hex.len() == 6 && hex.is_ascii() {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return RGBColor(r, g, b);
                }
            }
        }
        // Default to black if parsing fails
        RGBColor(0, 0, 0)
    }

    /// Line colors from the style, never empty.
    fn get_colors(&self, config: &GraphConfig) -> Vec<RGBColor> {
        let colors: Vec<RGBColor> = config
            .style
            .colors
            .iter()
            .map(|c| self.parse_color(c))
            .collect();
        if colors.is_empty() {
            vec![RGBColor(31, 119, 180)]
        } else {
            colors
        }
    }

    /// Get background color from style config
    fn get_background_color(&self, config: &GraphConfig) -> RGBColor {
        self.parse_color(&config.style.background_color)
    }
}

/// Draws dated line series with `BitMapBackend`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineChartRenderer;

impl LineChartRenderer {
    /// Creates a renderer.
    pub const fn new() -> Self {
        Self
    }

    fn draw_panel<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        config: &GraphConfig,
        data: &ChartData,
        caption: &str,
        series: &[PlotSeries],
        color_offset: usize,
    ) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        let Some((start, end)) = GraphUtils::date_bounds(series) else {
            return Ok(());
        };
        let span = GraphUtils::date_to_x(start, end).max(1.0);
        let (y_min, y_max) = GraphUtils::value_bounds(series);
        let style = &config.style;

        let mut chart = ChartBuilder::on(area)
            .caption(caption, (style.font_family.as_str(), style.title_font_size))
            .margin(style.margin)
            .x_label_area_size(style.x_label_area)
            .y_label_area_size(style.y_label_area)
            .build_cartesian_2d(0f64..span, y_min..y_max)?;

        let x_formatter = |x: &f64| {
            GraphUtils::x_to_date(start, *x)
                .format(&data.date_format)
                .to_string()
        };
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(data.x_label.as_str())
            .y_desc(data.y_label.as_str())
            .x_labels(8)
            .x_label_formatter(&x_formatter);
        if !style.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        let colors = self.get_colors(config);
        for (i, line) in series.iter().enumerate() {
            let color = colors[(color_offset + i) % colors.len()];
            let mut labelled = false;
            for segment in line.segments() {
                let points: Vec<(f64, f64)> = segment
                    .iter()
                    .map(|(date, value)| (GraphUtils::date_to_x(start, *date), *value))
                    .collect();

                // An isolated value has no neighbour to connect to.
                if let [single] = points.as_slice() {
                    chart.draw_series(std::iter::once(Circle::new(*single, 3, color.filled())))?;
                }
                let drawn = chart.draw_series(LineSeries::new(points, color.stroke_width(2)))?;
                if !labelled {
                    drawn
                        .label(line.name.as_str())
                        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
                    labelled = true;
                }
            }
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
        Ok(())
    }
}

#[async_trait]
impl GraphRenderer for LineChartRenderer {
    async fn render_to_file(&self, config: &GraphConfig, data: &ChartData, path: &Path) -> Result<()> {
        if !data.has_values() {
            return Err(PandemicError::chart(format!(
                "'{}' has no values to plot",
                data.title
            )));
        }

        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.get_background_color(config))?;

        match data.layout {
            PanelLayout::Overlay => {
                self.draw_panel(&root, config, data, &data.title, &data.series, 0)?;
            }
            PanelLayout::Stacked => {
                let titled = root.titled(
                    &data.title,
                    (config.style.font_family.as_str(), config.style.title_font_size),
                )?;
                let panels = titled.split_evenly((data.series.len().max(1), 1));
                for (i, (panel, line)) in panels.iter().zip(&data.series).enumerate() {
                    self.draw_panel(panel, config, data, &line.name, std::slice::from_ref(line), i)?;
                }
            }
        }

        root.present()?;
        info!("Rendered chart to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pandemic_common::test_utils::create_temp_dir;

    #[test]
    fn test_color_parsing() {
        let renderer = LineChartRenderer::new();

        assert_eq!(renderer.parse_color("#FF0000"), RGBColor(255, 0, 0));
        assert_eq!(renderer.parse_color("#1f77b4"), RGBColor(31, 119, 180));

        // Invalid colors default to black
        assert_eq!(renderer.parse_color("invalid"), RGBColor(0, 0, 0));
        assert_eq!(renderer.parse_color("#ZZ0000"), RGBColor(0, 0, 0));
    }

    #[test]
    fn test_colors_follow_style() {
        let renderer = LineChartRenderer::new();
        let mut config = GraphConfig::default();
        assert_eq!(renderer.get_background_color(&config), RGBColor(255, 255, 255));

        config.style.colors = vec!["#00ff00".to_string()];
        assert_eq!(renderer.get_colors(&config), vec![RGBColor(0, 255, 0)]);

        config.style.colors.clear();
        assert_eq!(renderer.get_colors(&config).len(), 1);
    }

    #[tokio::test]
    async fn test_empty_chart_is_error() {
        let dir = create_temp_dir();
        let path = dir.path().join("empty.png");
        let date = NaiveDate::from_ymd_opt(2020, 1, 22).unwrap();
        let data = ChartData::new("Empty", "Date", "Value")
            .with_series(PlotSeries::from_columns("s", &[date], &[None]));

        let err = LineChartRenderer::new()
            .render_to_file(&GraphConfig::default(), &data, &path)
            .await
            .unwrap_err();
        assert!(matches!(err, PandemicError::Chart { .. }));
        assert!(!path.exists());
    }
}
