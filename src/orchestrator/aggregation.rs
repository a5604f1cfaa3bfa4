use serde_json::Value;
use tracing::{debug, info};

use super::error::{AggregationError, DashboardRead, OrchestratorError, ReadFailure};
use super::policy::AnalyticsPolicy;
use super::submission::SubmissionOrchestrator;
use crate::client::{BatchResult, ClientError, LedgerApi, ProcessorApi};
use crate::domain::{
    Account, AccountId, Amount, RECENT_TRANSACTION_LIMIT, Transaction, TransactionId,
    recent_transactions, sort_by_recency, total_balance,
};

/// Derived dashboard view; never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub total_balance: Amount,
    pub account_count: usize,
    pub transaction_count: usize,
    /// The most recent transactions, id descending
    pub recent_transactions: Vec<Transaction>,
    /// Opaque processor payload, or the error a tolerated read produced
    pub analytics: Result<Value, ClientError>,
}

impl Dashboard {
    /// Build the view from reads that have already succeeded
    pub fn assemble(
        accounts: &[Account],
        transactions: Vec<Transaction>,
        analytics: Result<Value, ClientError>,
    ) -> Result<Self, AggregationError> {
        let total_balance =
            total_balance(accounts).map_err(|_| AggregationError::BalanceOverflow)?;
        let transaction_count = transactions.len();

        Ok(Self {
            total_balance,
            account_count: accounts.len(),
            transaction_count,
            recent_transactions: recent_transactions(transactions, RECENT_TRANSACTION_LIMIT),
            analytics,
        })
    }

    pub fn analytics(&self) -> Option<&Value> {
        self.analytics.as_ref().ok()
    }

    pub fn recent_ids(&self) -> Vec<TransactionId> {
        self.recent_transactions.iter().map(|tx| tx.id).collect()
    }
}

/// Health reported by each service, checked independently
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceHealth {
    pub ledger: Result<String, ClientError>,
    pub processor: Result<String, ClientError>,
}

impl ServiceHealth {
    pub fn is_healthy(&self) -> bool {
        self.ledger.is_ok() && self.processor.is_ok()
    }
}

fn record<T>(
    read: DashboardRead,
    result: Result<T, ClientError>,
    failures: &mut Vec<ReadFailure>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            failures.push(ReadFailure { read, error });
            None
        }
    }
}

impl<L, R, P> SubmissionOrchestrator<L, R, P>
where
    L: LedgerApi,
    R: ProcessorApi,
    P: AnalyticsPolicy,
{
    /// Fetch accounts, transactions and analytics concurrently and reconcile them
    ///
    /// All three reads resolve before anything is decided. A failed accounts or
    /// transactions read fails the whole view; a failed analytics read is
    /// judged by the analytics policy.
    pub async fn dashboard(&self) -> Result<Dashboard, OrchestratorError> {
        let (accounts, transactions, analytics) = futures::join!(
            self.ledger().list_accounts(),
            self.ledger().list_transactions(),
            self.processor().analytics(),
        );

        let mut failures = Vec::new();
        let accounts = record(DashboardRead::Accounts, accounts, &mut failures);
        let transactions = record(DashboardRead::Transactions, transactions, &mut failures);
        if let Err(error) = &analytics
            && !self.analytics_policy().tolerates(error)
        {
            failures.push(ReadFailure {
                read: DashboardRead::Analytics,
                error: error.clone(),
            });
        }

        let (Some(accounts), Some(transactions)) = (accounts, transactions) else {
            return Err(AggregationError::ReadsFailed(failures).into());
        };
        if !failures.is_empty() {
            return Err(AggregationError::ReadsFailed(failures).into());
        }

        let dashboard = Dashboard::assemble(&accounts, transactions, analytics)?;
        info!(
            accounts = dashboard.account_count,
            transactions = dashboard.transaction_count,
            total_balance = %dashboard.total_balance,
            analytics = dashboard.analytics.is_ok(),
            "Dashboard assembled"
        );
        Ok(dashboard)
    }

    /// Accounts for a selection list, in service order
    pub async fn account_choices(&self) -> Result<Vec<Account>, OrchestratorError> {
        Ok(self.ledger().list_accounts().await?)
    }

    /// Every transaction, most recent first
    pub async fn transaction_history(&self) -> Result<Vec<Transaction>, OrchestratorError> {
        let mut transactions = self.ledger().list_transactions().await?;
        sort_by_recency(&mut transactions);
        debug!(count = transactions.len(), "Transaction history loaded");
        Ok(transactions)
    }

    pub async fn account(&self, id: &AccountId) -> Result<Account, OrchestratorError> {
        Ok(self.ledger().get_account(id).await?)
    }

    /// Re-read one transaction, e.g. to reconcile after a processing failure
    pub async fn transaction(&self, id: TransactionId) -> Result<Transaction, OrchestratorError> {
        Ok(self.ledger().get_transaction(id).await?)
    }

    /// Analytics payload, optionally scoped to one account
    pub async fn analytics(&self, account_id: Option<&AccountId>) -> Result<Value, OrchestratorError> {
        let analytics = match account_id {
            Some(account_id) => self.processor().analytics_for_account(account_id).await?,
            None => self.processor().analytics().await?,
        };
        Ok(analytics)
    }

    /// Ask the processor to settle everything it has queued
    pub async fn settle_pending(&self) -> Result<Vec<BatchResult>, OrchestratorError> {
        let results = self.processor().process_batch().await?;
        info!(count = results.len(), "Pending transactions settled");
        Ok(results)
    }

    pub async fn service_health(&self) -> ServiceHealth {
        let (ledger, processor) = futures::join!(self.ledger().health(), self.processor().health());
        ServiceHealth { ledger, processor }
    }
}
