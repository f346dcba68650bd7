use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Transport, service or timeout failure talking to the AI collaborator
    #[error("Request failed: {0}")]
    RequestFailure(String),

    /// The collaborator answered with the wrong shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Empty input")]
    EmptyInput,

    #[error("No meal plan")]
    NoPlan,

    #[error("Invalid plan index: {0}")]
    InvalidPlanIndex(usize),

    #[error("Camera unavailable: {0}")]
    CameraUnavailable(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
