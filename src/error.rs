use thiserror::Error;

#[derive(Error, Debug)]
pub enum KrishiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Device position unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("No translation table for language: {0}")]
    UnsupportedLanguage(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, KrishiError>;
