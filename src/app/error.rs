use std::io;
use thiserror::Error;

use crate::client::ClientError;
use crate::io::RenderError;
use crate::orchestrator::OrchestratorError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Output error: {0}")]
    Render(#[from] RenderError),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error(transparent)]
    Orchestrator(#[from] OrchestratorError),

    #[error("Unhealthy services: {0}")]
    Unhealthy(String),
}
