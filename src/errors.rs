// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors raised while routing a request (unknown routes, missing residents,
/// malformed forms). Backend failures never get here: the review page
/// reports those itself.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
