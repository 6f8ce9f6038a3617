use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid phone number format: {0}")]
    InvalidPhoneNumber(String),

    #[error("Phone number is already blocked: {0}")]
    AlreadyBlocked(String),

    #[error("Blocked phone record not found or not active: {0}")]
    BlockNotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
