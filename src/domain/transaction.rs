use std::fmt;
use std::str::FromStr;

use serde::de::IntoDeserializer;
use serde::de::value::StringDeserializer;
use serde::{Deserialize, Deserializer, Serialize};

use super::amount::Amount;
use super::error::DomainError;
use super::id::{AccountId, TransactionId};

/// Direction of a transaction; the sign of its amount is derived from this
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deposit" => Ok(Self::Deposit),
            "withdrawal" => Ok(Self::Withdrawal),
            _ => Err(DomainError::UnknownTransactionKind(s.to_string())),
        }
    }
}

/// Processing status, written by the processor pipeline
///
/// The ledger reports settled transactions as `completed`, which is the same
/// state as `processed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Pending,
    #[serde(alias = "completed")]
    Processed,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processed => "processed",
            Self::Failed => "failed",
        }
    }
}

/// Status as the ledger sends it; a blank or `null` status means not yet processed
fn status_or_pending<'de, D>(deserializer: D) -> Result<TransactionStatus, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(status) if !status.trim().is_empty() => {
            let status: StringDeserializer<D::Error> = status.into_deserializer();
            TransactionStatus::deserialize(status)
        }
        _ => Ok(TransactionStatus::Pending),
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transaction row as recorded by the ledger service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub account_id: AccountId,
    pub amount: Amount,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "status_or_pending")]
    pub status: TransactionStatus,
}

impl Transaction {
    /// Amount with the sign implied by the transaction kind
    pub fn signed_amount(&self) -> Result<Amount, DomainError> {
        match self.kind {
            TransactionKind::Deposit => Ok(self.amount),
            TransactionKind::Withdrawal => self.amount.checked_neg().ok_or(DomainError::Overflow),
        }
    }
}

/// Request body for recording a new transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTransaction {
    pub account_id: AccountId,
    pub amount: Amount,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
}

impl NewTransaction {
    pub fn new(
        account_id: impl Into<AccountId>,
        amount: Amount,
        kind: TransactionKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            amount,
            kind,
            description: description.into(),
        }
    }

    /// Check the preconditions the ledger relies on
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.account_id.is_blank() {
            return Err(DomainError::EmptyAccountId);
        }
        if !self.amount.is_positive() {
            return Err(DomainError::NonPositiveAmount);
        }
        Ok(())
    }
}
