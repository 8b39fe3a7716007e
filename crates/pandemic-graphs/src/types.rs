//! Chart data and rendering configuration types.

use chrono::NaiveDate;
use pandemic_config::StylingConfig;

/// One dated value on a line. `None` breaks the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    /// Day (or month start) of the point
    pub date: NaiveDate,
    /// Plotted value, absent when undefined for that day
    pub value: Option<f64>,
}

impl PlotPoint {
    /// Creates a point.
    pub const fn new(date: NaiveDate, value: Option<f64>) -> Self {
        Self { date, value }
    }
}

/// A named line.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    /// Legend label
    pub name: String,
    /// Points in ascending date order
    pub points: Vec<PlotPoint>,
}

impl PlotSeries {
    /// Creates a series.
    pub fn new(name: impl Into<String>, points: Vec<PlotPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Builds a series from parallel date and value slices.
    pub fn from_columns(name: impl Into<String>, dates: &[NaiveDate], values: &[Option<f64>]) -> Self {
        let points = dates
            .iter()
            .zip(values)
            .map(|(date, value)| PlotPoint::new(*date, *value))
            .collect();
        Self::new(name, points)
    }

    /// Present, finite values with their dates.
    pub fn present(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.points
            .iter()
            .filter_map(|p| p.value.filter(|v| v.is_finite()).map(|v| (p.date, v)))
    }

    /// Whether at least one value can be drawn.
    pub fn has_values(&self) -> bool {
        self.present().next().is_some()
    }

    /// Runs of consecutive present values, split wherever a value is absent.
    pub fn segments(&self) -> Vec<Vec<(NaiveDate, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for point in &self.points {
            match point.value.filter(|v| v.is_finite()) {
                Some(value) => current.push((point.date, value)),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

/// How several series share the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelLayout {
    /// All series on one set of axes
    #[default]
    Overlay,
    /// One panel per series, stacked top to bottom
    Stacked,
}

/// Everything needed to draw one chart, independent of the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Chart caption
    pub title: String,
    /// X axis description
    pub x_label: String,
    /// Y axis description
    pub y_label: String,
    /// `chrono` format for x tick labels
    pub date_format: String,
    /// Panel arrangement
    pub layout: PanelLayout,
    /// Lines to draw
    pub series: Vec<PlotSeries>,
}

impl ChartData {
    /// Creates a single-panel chart with daily tick labels.
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            date_format: "%Y-%m-%d".to_string(),
            layout: PanelLayout::Overlay,
            series: Vec::new(),
        }
    }

    /// Sets the tick label format.
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Sets the panel layout.
    #[must_use]
    pub const fn with_layout(mut self, layout: PanelLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Appends a series.
    #[must_use]
    pub fn with_series(mut self, series: PlotSeries) -> Self {
        self.series.push(series);
        self
    }

    /// Whether any series has a drawable value.
    pub fn has_values(&self) -> bool {
        self.series.iter().any(PlotSeries::has_values)
    }
}

/// Canvas configuration shared by every chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Visual style
    pub style: StyleConfig,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::from(&StylingConfig::default())
    }
}

impl From<&StylingConfig> for GraphConfig {
    fn from(styling: &StylingConfig) -> Self {
        Self {
            width: styling.width,
            height: styling.height,
            style: StyleConfig {
                colors: vec![styling.colors.line.clone(), styling.colors.secondary.clone()],
                background_color: styling.colors.background.clone(),
                show_grid: styling.enable_grid,
                ..StyleConfig::default()
            },
        }
    }
}

/// Colors, fonts and spacing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    /// Line colors as `#rrggbb`, cycled per series
    pub colors: Vec<String>,
    /// Canvas fill as `#rrggbb`
    pub background_color: String,
    /// Font family for all text
    pub font_family: String,
    /// Caption size in points
    pub title_font_size: u32,
    /// Outer margin in pixels
    pub margin: u32,
    /// Height reserved for x tick labels
    pub x_label_area: u32,
    /// Width reserved for y tick labels
    pub y_label_area: u32,
    /// Whether to draw mesh lines
    pub show_grid: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            colors: vec!["#1f77b4".to_string(), "#d62728".to_string()],
            background_color: "#ffffff".to_string(),
            font_family: "sans-serif".to_string(),
            title_font_size: 22,
            margin: 15,
            x_label_area: 45,
            y_label_area: 75,
            show_grid: true,
        }
    }
}
