use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::error::ClientError;
use super::http::{HealthStatus, HttpEndpoint};
use super::traits::LedgerApi;
use crate::config::ServiceConfig;
use crate::domain::{Account, AccountId, NewAccount, NewTransaction, Transaction, TransactionId};

/// HTTP client for the ledger service
#[derive(Debug, Clone)]
pub struct LedgerClient {
    endpoint: HttpEndpoint,
}

impl LedgerClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), &config.ledger_base_url)
    }

    /// Build on an existing `reqwest::Client` (shared connection pool, custom timeouts)
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            endpoint: HttpEndpoint::new(client, base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        self.endpoint.base_url()
    }
}

#[async_trait]
impl LedgerApi for LedgerClient {
    async fn list_accounts(&self) -> Result<Vec<Account>, ClientError> {
        let accounts: Vec<Account> = self.endpoint.get_list(&["accounts"]).await?;
        debug!(count = accounts.len(), "Fetched accounts");
        Ok(accounts)
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, ClientError> {
        let transactions: Vec<Transaction> = self.endpoint.get_list(&["transactions"]).await?;
        debug!(count = transactions.len(), "Fetched transactions");
        Ok(transactions)
    }

    async fn get_account(&self, id: &AccountId) -> Result<Account, ClientError> {
        self.endpoint.get(&["accounts", id.as_str()]).await
    }

    async fn get_transaction(&self, id: TransactionId) -> Result<Transaction, ClientError> {
        let id = id.to_string();
        self.endpoint.get(&["transactions", &id]).await
    }

    async fn create_account(&self, request: NewAccount) -> Result<Account, ClientError> {
        request.validate()?;
        let account: Account = self.endpoint.post(&["accounts"], &request).await?;
        debug!(account_id = %account.id, "Account created");
        Ok(account)
    }

    async fn create_transaction(
        &self,
        request: NewTransaction,
    ) -> Result<Transaction, ClientError> {
        request.validate()?;
        let transaction: Transaction = self.endpoint.post(&["transactions"], &request).await?;
        debug!(
            transaction_id = %transaction.id,
            account_id = %transaction.account_id,
            "Transaction created"
        );
        Ok(transaction)
    }

    async fn health(&self) -> Result<String, ClientError> {
        let health: HealthStatus = self.endpoint.get(&["health"]).await?;
        Ok(health.status)
    }
}
