pub mod account;
pub mod amount;
pub mod error;
pub mod id;
pub mod summary;
pub mod transaction;

// Re-export commonly used types
pub use account::{Account, NewAccount};
pub use amount::Amount;
pub use error::DomainError;
pub use id::{AccountId, TransactionId};
pub use summary::{RECENT_TRANSACTION_LIMIT, recent_transactions, sort_by_recency, total_balance};
pub use transaction::{NewTransaction, Transaction, TransactionKind, TransactionStatus};
