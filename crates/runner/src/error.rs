use thiserror::Error;
use vigil_scenario::ConfigError;

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Exported text is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Top-level runner errors
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Usage error: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
