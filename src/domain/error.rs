use thiserror::Error;

/// Domain-level errors representing malformed values or violated preconditions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Amount must be positive")]
    NonPositiveAmount,

    #[error("Account owner must not be empty")]
    EmptyOwner,

    #[error("Account id must not be empty")]
    EmptyAccountId,

    #[error("Transaction id is not a non-negative integer: {0}")]
    InvalidTransactionId(String),

    #[error("Unknown transaction type: {0}")]
    UnknownTransactionKind(String),
}
