use thiserror::Error;

#[derive(Error, Debug)]
pub enum OsintError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Collector error ({collector}): {message}")]
    Collector { collector: String, message: String },

    #[error("Export error at node {label:?}: {message}")]
    Export { label: String, message: String },
}

pub type Result<T> = std::result::Result<T, OsintError>;
