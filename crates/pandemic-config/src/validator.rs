//! Runtime validation of loaded configuration.

use crate::schema::{ColorsConfig, Config};
use pandemic_common::{Metric, PandemicError, Result};
use url::Url;

/// Largest accepted image edge in pixels.
pub const MAX_DIMENSION: u32 = 8000;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<()> {
        for metric in Metric::ALL {
            Self::validate_source_uri(config.sources.uri(metric), metric)?;
        }

        if !(1..=300).contains(&config.sources.timeout_seconds) {
            return Err(PandemicError::validation_field(
                "Timeout must be between 1 and 300 seconds",
                "sources.timeout_seconds",
            ));
        }

        if config
            .selection
            .countries
            .iter()
            .any(|country| country.trim().is_empty())
        {
            return Err(PandemicError::validation_field(
                "Country names cannot be blank",
                "selection.countries",
            ));
        }

        let styling = &config.graphs.styling;
        for (value, field) in [
            (styling.width, "graphs.styling.width"),
            (styling.height, "graphs.styling.height"),
        ] {
            if value == 0 || value > MAX_DIMENSION {
                return Err(PandemicError::validation_field(
                    format!("Dimension must be between 1 and {MAX_DIMENSION} pixels"),
                    field,
                ));
            }
        }

        Self::validate_colors(&styling.colors)?;

        if config.graphs.enabled.windowed_deaths && config.graphs.windows.is_empty() {
            return Err(PandemicError::validation_field(
                "Windowed deaths chart is enabled but no windows are configured",
                "graphs.windows",
            ));
        }

        if config.logging.level.trim().is_empty() {
            return Err(PandemicError::validation_field(
                "Log level cannot be empty",
                "logging.level",
            ));
        }

        Ok(())
    }

    fn validate_source_uri(uri: &str, metric: Metric) -> Result<()> {
        let field = format!("sources.{}", metric.label().to_ascii_lowercase());
        let parsed = Url::parse(uri).map_err(|e| {
            PandemicError::validation_field(format!("Invalid URI '{uri}': {e}"), field.clone())
        })?;

        match parsed.scheme() {
            "http" | "https" | "file" => Ok(()),
            scheme => Err(PandemicError::validation_field(
                format!("Unsupported URI scheme '{scheme}'"),
                field,
            )),
        }
    }

    fn validate_colors(colors: &ColorsConfig) -> Result<()> {
        for (value, field) in [
            (&colors.line, "graphs.styling.colors.line"),
            (&colors.secondary, "graphs.styling.colors.secondary"),
            (&colors.background, "graphs.styling.colors.background"),
        ] {
            if !is_hex_color(value) {
                return Err(PandemicError::validation_field(
                    format!("'{value}' is not a #rrggbb color"),
                    field,
                ));
            }
        }
        Ok(())
    }
}

/// Whether `value` looks like `#rrggbb`.
pub fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_unsupported_scheme() {
        let mut config = Config::default();
        config.sources.deaths = "ftp://example.org/deaths.csv".to_string();
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(
            err,
            PandemicError::Validation { field: Some(ref f), .. } if f == "sources.deaths"
        ));
    }

    #[test]
    fn test_rejects_unparseable_uri() {
        let mut config = Config::default();
        config.sources.confirmed = "not a uri".to_string();
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_rejects_timeout_out_of_range() {
        let mut config = Config::default();
        config.sources.timeout_seconds = 0;
        assert!(ConfigValidator::validate(&config).is_err());
        config.sources.timeout_seconds = 301;
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_rejects_bad_dimensions_and_colors() {
        let mut config = Config::default();
        config.graphs.styling.width = 0;
        assert!(ConfigValidator::validate(&config).is_err());

        let mut config = Config::default();
        config.graphs.styling.colors.line = "blue".to_string();
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_windowed_chart_needs_windows() {
        let mut config = Config::default();
        config.graphs.windows.clear();
        assert!(ConfigValidator::validate(&config).is_err());

        config.graphs.enabled.windowed_deaths = false;
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#1f77b4"));
        assert!(is_hex_color("#FFFFFF"));
        assert!(!is_hex_color("1f77b4"));
        assert!(!is_hex_color("#fff"));
        assert!(!is_hex_color("#gggggg"));
    }
}
