use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Fleet table not found: {path}")]
    SourceNotFound { path: String },

    #[error("Fleet table could not be parsed: {message}")]
    MalformedSource { message: String },

    #[error("Invalid parameters: {message}")]
    InvalidParameters { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
