use super::error::InputError;
use crate::domain::{AccountId, Amount, NewAccount, NewTransaction, TransactionKind};

/// Returns the trimmed value, or `MissingField` when it is blank
fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputError::MissingField(field));
    }
    Ok(trimmed)
}

fn parse_amount(value: &str) -> Result<Amount, InputError> {
    Amount::from_decimal_str(value).map_err(|_| InputError::InvalidAmount(value.to_string()))
}

/// Raw transaction form values as entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSubmission {
    pub account_id: String,
    pub amount: String,
    pub description: String,
    pub kind: String,
}

impl RawSubmission {
    pub fn new(
        account_id: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            amount: amount.into(),
            description: description.into(),
            kind: kind.into(),
        }
    }

    /// Parse this raw input into a typed request
    ///
    /// All four fields must be present and the amount must be a finite
    /// decimal. Sign and range checks are left to the ledger client.
    pub fn parse(&self) -> Result<NewTransaction, InputError> {
        let account_id = required(&self.account_id, "account_id")?;
        let amount = required(&self.amount, "amount")?;
        let description = required(&self.description, "description")?;
        let kind = required(&self.kind, "type")?;

        let kind: TransactionKind = kind
            .parse()
            .map_err(|_| InputError::InvalidTransactionType(kind.to_string()))?;

        Ok(NewTransaction {
            account_id: AccountId::new(account_id),
            amount: parse_amount(amount)?,
            kind,
            description: description.to_string(),
        })
    }
}

/// Raw account form values as entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAccountRequest {
    pub owner: String,
    pub balance: String,
}

impl RawAccountRequest {
    pub fn new(owner: impl Into<String>, balance: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            balance: balance.into(),
        }
    }

    pub fn parse(&self) -> Result<NewAccount, InputError> {
        let owner = required(&self.owner, "owner")?;
        let balance = required(&self.balance, "balance")?;

        Ok(NewAccount::new(owner, parse_amount(balance)?))
    }
}
