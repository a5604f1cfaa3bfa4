//! Prelude module for convenient imports
//!
//! Import everything you need with: `use teller::prelude::*;`

// Domain types
pub use crate::domain::{
    Account, AccountId, Amount, DomainError, NewAccount, NewTransaction, Transaction,
    TransactionId, TransactionKind, TransactionStatus,
};

// Client types
pub use crate::client::{
    BatchResult, ClientError, LedgerApi, LedgerClient, ProcessorApi, ProcessorClient,
};

// Configuration
pub use crate::config::ServiceConfig;

// Orchestrator types
pub use crate::orchestrator::{
    AggregationError, AnalyticsPolicy, BestEffortAnalytics, Dashboard, ErrorKind,
    OrchestratorError, RequireAnalytics, ServiceHealth, Submission, SubmissionOrchestrator,
    SubmissionState,
};

// IO types
pub use crate::io::{
    InputError, RawAccountRequest, RawSubmission, RenderError, write_accounts,
    write_batch_results, write_dashboard, write_health, write_json, write_transactions,
};

// App types
pub use crate::app::{AppError, CliApp, Stdout};
