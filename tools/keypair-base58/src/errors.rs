use thiserror::Error;

pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("File not found: {0}")]
    FileNotFound(String, #[source] std::io::Error),

    #[error("Invalid JSON in {0}")]
    InvalidJson(String, #[source] serde_json::Error),

    #[error("{0}")]
    InvalidKeypair(serde_json::Error),
}
