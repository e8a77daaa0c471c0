use crate::http::Method;

/// Why a request could not be acknowledged.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(Method),

    /// Body is not a JSON object of the expected shape.
    #[error("{0}")]
    MalformedBody(#[from] serde_json::Error),
}
