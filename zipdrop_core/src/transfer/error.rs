use thiserror::Error;

/// Failures reported by a transfer service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("invalid invite code: {0}")]
    InvalidCode(String),
    #[error("no shared file found for code {0}")]
    NotFound(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0} seconds")]
    TimedOut(u64),
    #[error("transfer service unavailable")]
    Unavailable,
}
