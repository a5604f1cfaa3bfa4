use super::account::Account;
use super::amount::Amount;
use super::error::DomainError;
use super::transaction::Transaction;

/// Number of transactions shown as recent activity on the dashboard
pub const RECENT_TRANSACTION_LIMIT: usize = 5;

/// Exact sum of all account balances (zero when there are no accounts)
pub fn total_balance(accounts: &[Account]) -> Result<Amount, DomainError> {
    accounts.iter().try_fold(Amount::zero(), |total, account| {
        total
            .checked_add(account.balance)
            .ok_or(DomainError::Overflow)
    })
}

/// Sort transactions newest first, comparing ids numerically
pub fn sort_by_recency(transactions: &mut [Transaction]) {
    transactions.sort_unstable_by(|a, b| b.id.cmp(&a.id));
}

/// The `limit` transactions with the largest ids, newest first
pub fn recent_transactions(mut transactions: Vec<Transaction>, limit: usize) -> Vec<Transaction> {
    sort_by_recency(&mut transactions);
    transactions.truncate(limit);
    transactions
}
