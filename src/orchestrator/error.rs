use std::fmt;

use thiserror::Error;

use crate::client::ClientError;
use crate::domain::TransactionId;
use crate::io::InputError;

/// Coarse classification of any orchestrator failure, for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Input,
    Validation,
    Transport,
    Service,
    Decode,
    Configuration,
    Processing,
    Aggregation,
}

impl From<&ClientError> for ErrorKind {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Validation(_) => Self::Validation,
            ClientError::Transport(_) => Self::Transport,
            ClientError::Service { .. } => Self::Service,
            ClientError::Decode(_) => Self::Decode,
            ClientError::InvalidBaseUrl { .. } => Self::Configuration,
        }
    }
}

/// One of the three independent dashboard reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardRead {
    Accounts,
    Transactions,
    Analytics,
}

impl fmt::Display for DashboardRead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Accounts => "accounts",
            Self::Transactions => "transactions",
            Self::Analytics => "analytics",
        })
    }
}

/// A dashboard read that failed, with the client error it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure {
    pub read: DashboardRead,
    pub error: ClientError,
}

impl fmt::Display for ReadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.read, self.error)
    }
}

fn join_failures(failures: &[ReadFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// The dashboard could not be assembled; no partial result is returned
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregationError {
    #[error("Dashboard reads failed: {}", join_failures(.0))]
    ReadsFailed(Vec<ReadFailure>),

    #[error("Total balance overflowed")]
    BalanceOverflow,
}

impl AggregationError {
    /// Reads that failed, in accounts/transactions/analytics order
    pub fn failed_reads(&self) -> Vec<DashboardRead> {
        match self {
            Self::ReadsFailed(failures) => failures.iter().map(|f| f.read).collect(),
            Self::BalanceOverflow => Vec::new(),
        }
    }
}

/// Orchestrator-level errors returned to the presentation layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrchestratorError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error(transparent)]
    Client(#[from] ClientError),

    /// The ledger record exists; only the processor hand-off failed
    #[error("Transaction {transaction_id} was created but processing failed: {source}")]
    Processing {
        transaction_id: TransactionId,
        source: ClientError,
    },

    #[error("Aggregation error: {0}")]
    Aggregation(#[from] AggregationError),
}

impl OrchestratorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Input(_) => ErrorKind::Input,
            Self::Client(error) => ErrorKind::from(error),
            Self::Processing { .. } => ErrorKind::Processing,
            Self::Aggregation(_) => ErrorKind::Aggregation,
        }
    }

    /// Id of the already-created transaction, when one exists
    pub fn transaction_id(&self) -> Option<TransactionId> {
        match self {
            Self::Processing { transaction_id, .. } => Some(*transaction_id),
            _ => None,
        }
    }
}
