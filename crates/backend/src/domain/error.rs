use thiserror::Error;

/// Errors surfaced by domain services. Handlers translate each variant
/// into an HTTP status plus the `{"error": ...}` envelope.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
