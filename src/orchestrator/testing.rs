//! In-process fakes of the service clients, recording every call

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::client::{BatchResult, ClientError, LedgerApi, ProcessorApi};
use crate::domain::{
    Account, AccountId, NewAccount, NewTransaction, Transaction, TransactionId, TransactionStatus,
};

#[derive(Default)]
struct LedgerState {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    next_account_id: u64,
    next_transaction_id: u64,
    list_accounts_error: Option<ClientError>,
    list_transactions_error: Option<ClientError>,
    create_error: Option<ClientError>,
    calls: usize,
}

/// Ledger fake; clones share state so tests can inspect it after handing one off
#[derive(Clone, Default)]
pub(crate) struct FakeLedger {
    state: Arc<Mutex<LedgerState>>,
}

impl FakeLedger {
    pub(crate) fn new() -> Self {
        let ledger = Self::default();
        {
            let mut state = ledger.state();
            state.next_account_id = 1;
            state.next_transaction_id = 1;
        }
        ledger
    }

    fn state(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap()
    }

    pub(crate) fn with_accounts(self, accounts: Vec<Account>) -> Self {
        self.state().accounts = accounts;
        self
    }

    pub(crate) fn with_transactions(self, transactions: Vec<Transaction>) -> Self {
        self.state().transactions = transactions;
        self
    }

    pub(crate) fn with_next_transaction_id(self, id: u64) -> Self {
        self.state().next_transaction_id = id;
        self
    }

    pub(crate) fn failing_list_accounts(self, error: ClientError) -> Self {
        self.state().list_accounts_error = Some(error);
        self
    }

    pub(crate) fn failing_list_transactions(self, error: ClientError) -> Self {
        self.state().list_transactions_error = Some(error);
        self
    }

    pub(crate) fn failing_create(self, error: ClientError) -> Self {
        self.state().create_error = Some(error);
        self
    }

    pub(crate) fn accounts(&self) -> Vec<Account> {
        self.state().accounts.clone()
    }

    pub(crate) fn transaction_ids(&self) -> Vec<TransactionId> {
        self.state().transactions.iter().map(|tx| tx.id).collect()
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.state().calls
    }
}

#[async_trait]
impl LedgerApi for FakeLedger {
    async fn list_accounts(&self) -> Result<Vec<Account>, ClientError> {
        let mut state = self.state();
        state.calls += 1;
        match &state.list_accounts_error {
            Some(error) => Err(error.clone()),
            None => Ok(state.accounts.clone()),
        }
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, ClientError> {
        let mut state = self.state();
        state.calls += 1;
        match &state.list_transactions_error {
            Some(error) => Err(error.clone()),
            None => Ok(state.transactions.clone()),
        }
    }

    async fn get_account(&self, id: &AccountId) -> Result<Account, ClientError> {
        let mut state = self.state();
        state.calls += 1;
        state
            .accounts
            .iter()
            .find(|account| &account.id == id)
            .cloned()
            .ok_or_else(|| not_found("Account not found"))
    }

    async fn get_transaction(&self, id: TransactionId) -> Result<Transaction, ClientError> {
        let mut state = self.state();
        state.calls += 1;
        state
            .transactions
            .iter()
            .find(|tx| tx.id == id)
            .cloned()
            .ok_or_else(|| not_found("Transaction not found"))
    }

    async fn create_account(&self, request: NewAccount) -> Result<Account, ClientError> {
        let mut state = self.state();
        state.calls += 1;
        if let Some(error) = &state.create_error {
            return Err(error.clone());
        }
        let id = state.next_account_id;
        state.next_account_id += 1;
        let account = Account::new(id.to_string(), request.owner, request.balance);
        state.accounts.push(account.clone());
        Ok(account)
    }

    async fn create_transaction(
        &self,
        request: NewTransaction,
    ) -> Result<Transaction, ClientError> {
        let mut state = self.state();
        state.calls += 1;
        if let Some(error) = &state.create_error {
            return Err(error.clone());
        }
        let id = state.next_transaction_id;
        state.next_transaction_id += 1;
        let transaction = Transaction {
            id: TransactionId::new(id),
            account_id: request.account_id,
            amount: request.amount,
            kind: request.kind,
            description: request.description,
            status: TransactionStatus::Pending,
        };
        state.transactions.push(transaction.clone());
        Ok(transaction)
    }

    async fn health(&self) -> Result<String, ClientError> {
        self.state().calls += 1;
        Ok("healthy".to_string())
    }
}

struct ProcessorState {
    analytics: Value,
    process_error: Option<ClientError>,
    analytics_error: Option<ClientError>,
    processed: Vec<TransactionId>,
    process_calls: usize,
    calls: usize,
}

#[derive(Clone)]
pub(crate) struct FakeProcessor {
    state: Arc<Mutex<ProcessorState>>,
}

impl FakeProcessor {
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ProcessorState {
                analytics: json!({"total_transactions": 0}),
                process_error: None,
                analytics_error: None,
                processed: Vec::new(),
                process_calls: 0,
                calls: 0,
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, ProcessorState> {
        self.state.lock().unwrap()
    }

    pub(crate) fn with_analytics(self, analytics: Value) -> Self {
        self.state().analytics = analytics;
        self
    }

    pub(crate) fn failing_process(self, error: ClientError) -> Self {
        self.state().process_error = Some(error);
        self
    }

    pub(crate) fn failing_analytics(self, error: ClientError) -> Self {
        self.state().analytics_error = Some(error);
        self
    }

    pub(crate) fn processed_ids(&self) -> Vec<TransactionId> {
        self.state().processed.clone()
    }

    pub(crate) fn process_calls(&self) -> usize {
        self.state().process_calls
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.state().calls
    }
}

#[async_trait]
impl ProcessorApi for FakeProcessor {
    async fn process(&self, transaction: &Transaction) -> Result<(), ClientError> {
        let mut state = self.state();
        state.calls += 1;
        state.process_calls += 1;
        if let Some(error) = &state.process_error {
            return Err(error.clone());
        }
        state.processed.push(transaction.id);
        Ok(())
    }

    async fn analytics(&self) -> Result<Value, ClientError> {
        let mut state = self.state();
        state.calls += 1;
        match &state.analytics_error {
            Some(error) => Err(error.clone()),
            None => Ok(state.analytics.clone()),
        }
    }

    async fn analytics_for_account(&self, account_id: &AccountId) -> Result<Value, ClientError> {
        let mut state = self.state();
        state.calls += 1;
        match &state.analytics_error {
            Some(error) => Err(error.clone()),
            None => Ok(json!({"account_id": account_id.as_str(), "total_transactions": 0})),
        }
    }

    async fn process_batch(&self) -> Result<Vec<BatchResult>, ClientError> {
        let mut state = self.state();
        state.calls += 1;
        Ok(state
            .processed
            .iter()
            .map(|id| BatchResult {
                transaction_id: id.to_string(),
                status: "success".to_string(),
                message: "Transaction processed".to_string(),
            })
            .collect())
    }

    async fn health(&self) -> Result<String, ClientError> {
        self.state().calls += 1;
        Ok("healthy".to_string())
    }
}

fn not_found(message: &str) -> ClientError {
    ClientError::Service {
        status: 404,
        message: message.to_string(),
    }
}
