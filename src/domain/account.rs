use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::error::DomainError;
use super::id::AccountId;

/// Account as reported by the ledger service
///
/// The balance is owned by the ledger; clients only ever read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    #[serde(default)]
    pub owner: String,
    pub balance: Amount,
}

impl Account {
    pub fn new(id: impl Into<AccountId>, owner: impl Into<String>, balance: Amount) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            balance,
        }
    }

    /// Human-readable label for selection lists
    pub fn label(&self) -> String {
        let owner = self.owner.trim();
        if owner.is_empty() {
            format!("Account {} - {}", self.id, self.balance)
        } else {
            format!("{} ({}) - {}", owner, self.id, self.balance)
        }
    }
}

/// Request body for opening an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAccount {
    pub owner: String,
    pub balance: Amount,
}

impl NewAccount {
    pub fn new(owner: impl Into<String>, balance: Amount) -> Self {
        Self {
            owner: owner.into(),
            balance,
        }
    }

    /// Check the preconditions the ledger relies on
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.owner.trim().is_empty() {
            return Err(DomainError::EmptyOwner);
        }
        Ok(())
    }
}
