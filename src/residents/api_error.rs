use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("JSON decode error: {0}")]
    Decode(String),
    #[error("Unexpected data shape: {0}")]
    UnexpectedShape(String),
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}
