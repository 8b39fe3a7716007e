//! Error types and utilities for pandemic-charts

use thiserror::Error;

/// Result type alias for pandemic-charts operations
pub type Result<T> = std::result::Result<T, PandemicError>;

/// Boxed error source carried by most variants
type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for pandemic-charts operations
#[derive(Error, Debug)]
pub enum PandemicError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Retrieval of a source table failed
    #[error("Fetch error: {message}")]
    Fetch {
        /// Human readable description
        message: String,
        /// HTTP status code when the server answered
        status_code: Option<u16>,
        /// Underlying cause, if any
        #[source]
        source: Option<BoxedSource>,
    },

    /// A source table was malformed
    #[error("Parse error: {message}")]
    Parse {
        /// Human readable description
        message: String,
        /// 1-based line of the offending record
        line: Option<u64>,
        /// Header of the offending column
        column: Option<String>,
        /// Underlying cause, if any
        #[source]
        source: Option<BoxedSource>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Chart preparation and plotting errors
    #[error("Chart error: {message}")]
    Chart {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<BoxedSource>,
    },

    /// Validation errors for configuration values or user input
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description
        message: String,
        /// Name of the offending field
        field: Option<String>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<BoxedSource>,
    },
}

impl PandemicError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new fetch error
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch {
            message: msg.into(),
            status_code: None,
            source: None,
        }
    }

    /// Create a new fetch error with an HTTP status code
    pub fn fetch_with_status(msg: impl Into<String>, status: u16) -> Self {
        Self::Fetch {
            message: msg.into(),
            status_code: Some(status),
            source: None,
        }
    }

    /// Create a new fetch error with source
    pub fn fetch_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Fetch {
            message: msg.into(),
            status_code: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
            line: None,
            column: None,
            source: None,
        }
    }

    /// Create a new parse error pointing at a line and column
    pub fn parse_at(msg: impl Into<String>, line: Option<u64>, column: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
            line,
            column: Some(column.into()),
            source: None,
        }
    }

    /// Create a new chart error
    pub fn chart(msg: impl Into<String>) -> Self {
        Self::Chart {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new chart error with source
    pub fn chart_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Chart {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Whether the error came from loading a source table
    pub const fn is_source_failure(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::Parse { .. })
    }
}

// Error conversion implementations for external types

/// Convert from reqwest::Error to PandemicError
impl From<reqwest::Error> for PandemicError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::fetch_with_source("Request timeout", err)
        } else if err.is_connect() {
            Self::fetch_with_source("Connection failed", err)
        } else if let Some(status) = err.status() {
            Self::Fetch {
                message: format!("HTTP error: {}", status.as_u16()),
                status_code: Some(status.as_u16()),
                source: Some(Box::new(err)),
            }
        } else {
            Self::fetch_with_source("Network request failed", err)
        }
    }
}

/// Convert from csv::Error to PandemicError
impl From<csv::Error> for PandemicError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(csv::Position::line);
        Self::Parse {
            message: "Malformed CSV".to_string(),
            line,
            column: None,
            source: Some(Box::new(err)),
        }
    }
}

/// Convert from serde_yaml::Error to PandemicError
impl From<serde_yaml::Error> for PandemicError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::config_with_source("YAML parsing error", err)
    }
}

/// Convert from toml::de::Error to PandemicError
impl From<toml::de::Error> for PandemicError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_source("TOML parsing error", err)
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to PandemicError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for PandemicError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::chart_with_source("Chart rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let error = PandemicError::new("test message");
        assert!(error.to_string().contains("test message"));

        let config_error = PandemicError::config("config issue");
        assert_eq!(config_error.to_string(), "Configuration error: config issue");

        let fetch_error = PandemicError::fetch_with_status("Not found", 404);
        assert_eq!(fetch_error.to_string(), "Fetch error: Not found");
        assert!(matches!(
            fetch_error,
            PandemicError::Fetch {
                status_code: Some(404),
                ..
            }
        ));

        let parse_error = PandemicError::parse_at("bad count", Some(3), "1/22/20");
        assert!(parse_error.to_string().contains("Parse error"));
        match parse_error {
            PandemicError::Parse { line, column, .. } => {
                assert_eq!(line, Some(3));
                assert_eq!(column.as_deref(), Some("1/22/20"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }

        let validation_error = PandemicError::validation_field("Invalid input", "width");
        assert!(validation_error.to_string().contains("Validation error"));
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped_error = PandemicError::with_source("Failed to read file", io_error);

        assert!(wrapped_error.to_string().contains("Failed to read file"));
        assert!(wrapped_error.source().is_some());

        let chart_error = PandemicError::chart_with_source(
            "Chart drawing failed",
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        );
        assert!(chart_error.to_string().contains("Chart error"));
        assert!(chart_error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: PandemicError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_error = serde_yaml::from_str::<Vec<u32>>("not: [a list").unwrap_err();
        let error: PandemicError = yaml_error.into();
        assert!(matches!(error, PandemicError::Config { .. }));
    }

    #[test]
    fn test_csv_error_conversion() {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader("a,b\nc\n".as_bytes());
        let err = reader
            .records()
            .find_map(std::result::Result::err)
            .expect("ragged rows should fail");
        let error: PandemicError = err.into();
        assert!(matches!(error, PandemicError::Parse { .. }));
    }

    #[test]
    fn test_source_failure_classification() {
        assert!(PandemicError::fetch("down").is_source_failure());
        assert!(PandemicError::parse("bad").is_source_failure());
        assert!(!PandemicError::chart("empty").is_source_failure());
    }
}
