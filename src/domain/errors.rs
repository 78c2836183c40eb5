use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Shipping rule store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
