//! Default values.

use crate::schema::*;
use pandemic_common::{JoinPolicy, LogFormat, TrailingWindow};
use std::path::PathBuf;

/// Public CSSE time series of confirmed cases.
pub const CONFIRMED_GLOBAL_URL: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_time_series/time_series_covid19_confirmed_global.csv";

/// Public CSSE time series of deaths.
pub const DEATHS_GLOBAL_URL: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_time_series/time_series_covid19_deaths_global.csv";

/// Public CSSE time series of recoveries.
pub const RECOVERED_GLOBAL_URL: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_time_series/time_series_covid19_recovered_global.csv";

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: SourcesConfig::default(),
            selection: SelectionConfig::default(),
            graphs: GraphsConfig::default(),
            output: OutputConfig::default(),
            logging: LogSettings::default(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            confirmed: CONFIRMED_GLOBAL_URL.to_string(),
            deaths: DEATHS_GLOBAL_URL.to_string(),
            recovered: RECOVERED_GLOBAL_URL.to_string(),
            timeout_seconds: 60,
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            countries: Vec::new(),
            include_world: true,
            prompt_stdin: false,
            alignment: JoinPolicy::Outer,
        }
    }
}

impl Default for GraphsConfig {
    fn default() -> Self {
        Self {
            enabled: EnabledGraphsConfig::default(),
            windows: vec![TrailingWindow::Months(1), TrailingWindow::Weeks(3)],
            styling: StylingConfig::default(),
        }
    }
}

impl Default for EnabledGraphsConfig {
    fn default() -> Self {
        Self {
            fatality_rate: true,
            daily_increase: true,
            monthly_deaths: true,
            windowed_deaths: true,
            cumulative_totals: false,
        }
    }
}

impl Default for StylingConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            enable_grid: true,
            colors: ColorsConfig::default(),
        }
    }
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            line: "#1f77b4".to_string(),
            secondary: "#d62728".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("charts"),
            export_csv: false,
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file: None,
            include_spans: false,
        }
    }
}
