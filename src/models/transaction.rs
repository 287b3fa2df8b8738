//! Transaction model
//!
//! A transaction is one coin movement: positive amounts are gains, negative
//! amounts are spends. `previous_balance` is filled in by the store whenever
//! a profile is saved and is only used for display.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::ids::TransactionId;
use super::timestamp;

/// A single coin movement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// When the transaction happened
    #[serde(with = "timestamp::serde_format")]
    pub date: NaiveDateTime,

    /// Signed amount in whole coins
    pub amount: i64,

    /// Free-text source/category label
    pub source: String,

    /// Running balance immediately before this transaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_balance: Option<i64>,
}

impl Transaction {
    /// Create a new transaction with a fresh ID
    pub fn new(amount: i64, source: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            amount,
            source: source.into(),
            previous_balance: None,
        }
    }

    /// Check if this is a gain (positive amount)
    pub fn is_gain(&self) -> bool {
        self.amount > 0
    }

    /// Check if this is a spend (negative amount)
    pub fn is_spend(&self) -> bool {
        self.amount < 0
    }

    /// Absolute size of the movement, saturating at `i64::MAX`
    pub fn magnitude(&self) -> i64 {
        self.amount.saturating_abs()
    }

    /// Balance right after this transaction, when the store has computed it
    pub fn balance_after(&self) -> Option<i64> {
        self.previous_balance
            .and_then(|prev| prev.checked_add(self.amount))
    }

    /// Validate the user-editable fields
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        validate_fields(self.amount, &self.source)
    }
}

/// Validate an amount/source pair before it becomes a transaction
pub fn validate_fields(amount: i64, source: &str) -> Result<(), TransactionValidationError> {
    if amount == 0 {
        return Err(TransactionValidationError::ZeroAmount);
    }
    if amount == i64::MIN {
        return Err(TransactionValidationError::AmountOutOfRange(amount));
    }
    if source.trim().is_empty() {
        return Err(TransactionValidationError::EmptySource);
    }
    Ok(())
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:+}",
            self.date.format("%Y-%m-%d"),
            self.source,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionValidationError {
    #[error("Amount must not be zero")]
    ZeroAmount,
    #[error("Source must not be empty")]
    EmptySource,
    #[error("Amount out of range: {0}")]
    AmountOutOfRange(i64),
    #[error("Running balance would overflow at {0}")]
    BalanceOverflow(String),
}
