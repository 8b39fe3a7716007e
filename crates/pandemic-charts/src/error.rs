//! Application-wide error types using thiserror.

use pandemic_common::PandemicError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Loading, composing or charting failed.
    #[error(transparent)]
    Pandemic(#[from] PandemicError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;
