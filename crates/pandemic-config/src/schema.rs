//! Configuration schema definitions using serde.

use pandemic_common::{JoinPolicy, LogFormat, LoggingConfig, Metric, TrailingWindow};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for pandemic-charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the three source tables come from.
    pub sources: SourcesConfig,
    /// Which regions are charted.
    pub selection: SelectionConfig,
    /// Chart configuration.
    pub graphs: GraphsConfig,
    /// Output configuration.
    pub output: OutputConfig,
    /// Logging configuration.
    pub logging: LogSettings,
}

/// Source table locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// URI of the confirmed-cases table.
    pub confirmed: String,
    /// URI of the deaths table.
    pub deaths: String,
    /// URI of the recoveries table.
    pub recovered: String,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
}

impl SourcesConfig {
    /// URI configured for `metric`.
    pub fn uri(&self, metric: Metric) -> &str {
        match metric {
            Metric::Confirmed => &self.confirmed,
            Metric::Deaths => &self.deaths,
            Metric::Recovered => &self.recovered,
        }
    }
}

/// Region selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Countries to chart, matched exactly against the source's country column.
    pub countries: Vec<String>,
    /// Whether to also chart the world aggregate.
    pub include_world: bool,
    /// Read a single country name from standard input at startup.
    pub prompt_stdin: bool,
    /// Date alignment of the three series.
    pub alignment: JoinPolicy,
}

impl SelectionConfig {
    /// Country filters to chart, `None` standing for the world aggregate.
    ///
    /// Falls back to the world aggregate when nothing is selected.
    pub fn targets(&self) -> Vec<Option<String>> {
        let mut targets: Vec<Option<String>> =
            self.countries.iter().cloned().map(Some).collect();
        if self.include_world || targets.is_empty() {
            targets.push(None);
        }
        targets
    }
}

/// Chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphsConfig {
    /// Which charts are rendered.
    pub enabled: EnabledGraphsConfig,
    /// Trailing windows for the windowed-deaths chart, one chart each.
    pub windows: Vec<TrailingWindow>,
    /// Styling configuration.
    pub styling: StylingConfig,
}

/// Enabled charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct EnabledGraphsConfig {
    /// Deaths as a percentage of confirmed cases.
    pub fatality_rate: bool,
    /// Day-over-day increase of confirmed cases.
    pub daily_increase: bool,
    /// Deaths per calendar month.
    pub monthly_deaths: bool,
    /// Daily deaths over trailing windows.
    pub windowed_deaths: bool,
    /// Cumulative confirmed cases and deaths.
    pub cumulative_totals: bool,
}

impl EnabledGraphsConfig {
    /// Whether no chart is enabled at all.
    pub const fn none_enabled(&self) -> bool {
        !(self.fatality_rate
            || self.daily_increase
            || self.monthly_deaths
            || self.windowed_deaths
            || self.cumulative_totals)
    }
}

/// Styling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylingConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Whether to draw grid lines.
    pub enable_grid: bool,
    /// Color configuration.
    pub colors: ColorsConfig,
}

/// Color configuration, as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Primary line color.
    pub line: String,
    /// Color of the second series in multi-series charts.
    pub secondary: String,
    /// Background color.
    pub background: String,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory charts are written to.
    pub directory: PathBuf,
    /// Also write each composite table as CSV.
    pub export_csv: bool,
}

/// Logging configuration as it appears in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Level filter directive.
    pub level: String,
    /// Line format.
    pub format: LogFormat,
    /// Optional log file.
    pub file: Option<PathBuf>,
    /// Whether span open/close events are logged.
    pub include_spans: bool,
}

impl LogSettings {
    /// Converts into the logging subsystem's configuration.
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            format: self.format,
            file_path: self.file.clone(),
            include_spans: self.include_spans,
            ..LoggingConfig::default()
        }
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> pandemic_common::Result<()> {
        crate::validator::ConfigValidator::validate(self)
    }
}
