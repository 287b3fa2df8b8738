//! Profile model
//!
//! A profile is a named, isolated working set of transactions plus settings.
//! It is persisted as a single document.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ids::TransactionId;
use super::settings::ProfileSettings;
use super::timestamp;
use super::transaction::{Transaction, TransactionValidationError};

/// Name of the profile that always exists
pub const DEFAULT_PROFILE: &str = "Default";

/// Longest accepted profile name, in characters
pub const MAX_PROFILE_NAME_LEN: usize = 64;

/// A profile document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub profile_name: String,

    #[serde(
        default,
        with = "timestamp::serde_format_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<NaiveDateTime>,

    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub settings: ProfileSettings,
}

impl Profile {
    /// Create an empty profile with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            profile_name: name.into(),
            last_updated: None,
            transactions: Vec::new(),
            settings: ProfileSettings::default(),
        }
    }

    /// Sort transactions chronologically and refresh `previous_balance`
    ///
    /// The sort is stable, so transactions sharing a timestamp keep their
    /// insertion order. Fails without touching the balances if the running
    /// balance leaves the `i64` range at any point.
    pub fn recalculate_balances(&mut self) -> Result<(), TransactionValidationError> {
        self.transactions.sort_by(|a, b| a.date.cmp(&b.date));

        let mut previous = Vec::with_capacity(self.transactions.len());
        let mut balance = 0i64;
        for txn in &self.transactions {
            previous.push(balance);
            balance = balance
                .checked_add(txn.amount)
                .ok_or_else(|| TransactionValidationError::BalanceOverflow(txn.id.to_string()))?;
        }

        for (txn, prev) in self.transactions.iter_mut().zip(previous) {
            txn.previous_balance = Some(prev);
        }
        Ok(())
    }

    /// Like [`Profile::recalculate_balances`], but drops every transaction
    /// that would push the running balance out of range
    ///
    /// Returns the number of transactions dropped.
    pub fn recalculate_balances_lossy(&mut self) -> usize {
        self.transactions.sort_by(|a, b| a.date.cmp(&b.date));

        let before = self.transactions.len();
        let mut balance = 0i64;
        self.transactions.retain_mut(|txn| match balance.checked_add(txn.amount) {
            Some(next) => {
                txn.previous_balance = Some(balance);
                balance = next;
                true
            }
            None => false,
        });
        before - self.transactions.len()
    }

    /// Find a transaction by exact ID
    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }
}

/// Check that a profile name is usable as a document name
pub fn validate_profile_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Profile name must not be empty".into());
    }
    if trimmed != name {
        return Err("Profile name must not start or end with whitespace".into());
    }
    if name.chars().count() > MAX_PROFILE_NAME_LEN {
        return Err(format!(
            "Profile name must be at most {} characters",
            MAX_PROFILE_NAME_LEN
        ));
    }
    if name.starts_with('.') {
        return Err("Profile name must not start with '.'".into());
    }
    let invalid = |c: char| {
        matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control()
    };
    if name.chars().any(invalid) {
        return Err(format!("Profile name contains invalid characters: {}", name));
    }
    Ok(())
}
