use async_trait::async_trait;
use serde_json::Value;

use super::error::ClientError;
use super::processor::BatchResult;
use crate::domain::{Account, AccountId, NewAccount, NewTransaction, Transaction, TransactionId};

/// Typed access to the ledger service (accounts and transaction records)
///
/// Every method issues exactly one request and never retries.
#[async_trait]
pub trait LedgerApi: Send + Sync {
    /// All accounts, in the order the service returns them
    async fn list_accounts(&self) -> Result<Vec<Account>, ClientError>;

    /// All transactions, in the order the service returns them
    async fn list_transactions(&self) -> Result<Vec<Transaction>, ClientError>;

    async fn get_account(&self, id: &AccountId) -> Result<Account, ClientError>;

    async fn get_transaction(&self, id: TransactionId) -> Result<Transaction, ClientError>;

    /// Open an account; the ledger assigns the id
    async fn create_account(&self, request: NewAccount) -> Result<Account, ClientError>;

    /// Record a transaction; the ledger assigns the id and sets status to pending
    async fn create_transaction(&self, request: NewTransaction)
    -> Result<Transaction, ClientError>;

    /// Status text reported by the service health endpoint
    async fn health(&self) -> Result<String, ClientError>;
}

/// Typed access to the transaction-processor service
#[async_trait]
pub trait ProcessorApi: Send + Sync {
    /// Hand a created transaction to the processor; success is acknowledgment only
    async fn process(&self, transaction: &Transaction) -> Result<(), ClientError>;

    /// Opaque analytics payload, surfaced but never interpreted
    async fn analytics(&self) -> Result<Value, ClientError>;

    async fn analytics_for_account(&self, account_id: &AccountId) -> Result<Value, ClientError>;

    /// Ask the processor to settle everything still queued
    async fn process_batch(&self) -> Result<Vec<BatchResult>, ClientError>;

    async fn health(&self) -> Result<String, ClientError>;
}
