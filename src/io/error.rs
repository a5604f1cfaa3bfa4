use std::io;
use thiserror::Error;

/// Caller-supplied input that cannot become a request; never reaches the network
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid amount format: {0}")]
    InvalidAmount(String),

    #[error("Invalid transaction type: {0}")]
    InvalidTransactionType(String),
}

/// Failures while rendering results for the terminal
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
