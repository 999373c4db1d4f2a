use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CutoutError>;

#[derive(Error, Debug)]
pub enum CutoutError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required config parameter(s): {}", .0.join(", "))]
    MissingParameters(Vec<String>),

    #[error("Invalid value '{value}' for config parameter '{key}'")]
    InvalidParameter { key: String, value: String },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Column '{0}' not found in target table")]
    MissingColumn(String),

    #[error("Invalid coordinate in row {row}, column '{column}': '{value}'")]
    InvalidCoordinate {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Cannot build a filename from object name '{0}'")]
    InvalidName(String),

    #[error("Post-processing failed for {}: {message}", .path.display())]
    PostProcess { path: PathBuf, message: String },
}

impl CutoutError {
    /// Whether a failed fetch is worth another attempt.
    ///
    /// Status-level and connection-level failures are transient. Request
    /// construction errors, local I/O and everything configuration related
    /// are not.
    pub fn is_transient(&self) -> bool {
        match self {
            CutoutError::Http { .. } => true,
            CutoutError::Network(e) => {
                !e.is_builder()
                    && (e.is_timeout()
                        || e.is_connect()
                        || e.is_request()
                        || e.is_body()
                        || e.is_decode()
                        || e.is_redirect()
                        || e.is_status())
            }
            _ => false,
        }
    }
}
