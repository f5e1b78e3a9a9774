use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The browsing context refused access to its key-value store (storage
    /// disabled, sandboxed frame). The auth gate treats this as "not
    /// authenticated" - fail closed.
    #[error("Session store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
