//! Transaction service
//!
//! Create, edit, delete and query the transactions of one profile. Every
//! mutation is a load, change, save cycle against the profile document, so
//! running balances are recomputed on each write.

use chrono::{Local, NaiveDateTime};
use tracing::info;

use crate::analytics::{filter_transactions, TransactionFilter};
use crate::error::{CoinError, CoinResult};
use crate::models::{validate_fields, Transaction, TransactionId};
use crate::storage::Storage;

/// Shortest id prefix accepted by [`TransactionService::find`]
pub const MIN_ID_PREFIX_LEN: usize = 4;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
    profile: &'a str,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub amount: i64,
    pub source: String,
    /// Defaults to the current local time
    pub date: Option<NaiveDateTime>,
}

/// Fields to change on an existing transaction; `None` leaves a field alone
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    pub amount: Option<i64>,
    pub source: Option<String>,
    pub date: Option<NaiveDateTime>,
}

impl UpdateTransactionInput {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.source.is_none() && self.date.is_none()
    }
}

impl<'a> TransactionService<'a> {
    /// Create a transaction service for a profile
    pub fn new(storage: &'a Storage, profile: &'a str) -> Self {
        Self { storage, profile }
    }

    /// Record a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> CoinResult<Transaction> {
        let source = input.source.trim();
        validate_fields(input.amount, source)?;

        let date = input.date.unwrap_or_else(|| Local::now().naive_local());
        let txn = Transaction::new(input.amount, source, date);

        let mut profile = self.storage.profiles.load(self.profile)?;
        profile.transactions.push(txn.clone());
        self.storage.profiles.save(&mut profile)?;

        info!(profile = self.profile, id = %txn.id, amount = txn.amount, source = %txn.source, "created transaction");

        // Return the stored copy so previous_balance is filled in
        Ok(profile.transaction(txn.id).cloned().unwrap_or(txn))
    }


    /// Find a transaction by full UUID, `txn-` display form, or id prefix
    pub fn find(&self, identifier: &str) -> CoinResult<Transaction> {
        let profile = self.storage.profiles.load(self.profile)?;

        if let Ok(id) = identifier.parse::<TransactionId>() {
            return profile
                .transaction(id)
                .cloned()
                .ok_or_else(|| CoinError::transaction_not_found(identifier));
        }

        let hex_len = identifier
            .trim()
            .trim_start_matches("txn-")
            .chars()
            .filter(|c| *c != '-')
            .count();
        if hex_len < MIN_ID_PREFIX_LEN {
            return Err(CoinError::Validation(format!(
                "Transaction id prefix must be at least {} characters: {}",
                MIN_ID_PREFIX_LEN, identifier
            )));
        }

        let mut matches = profile
            .transactions
            .iter()
            .filter(|t| t.id.matches_prefix(identifier));

        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(txn.clone()),
            (None, _) => Err(CoinError::transaction_not_found(identifier)),
            (Some(_), Some(_)) => Err(CoinError::Validation(format!(
                "Transaction id '{}' is ambiguous; use more characters",
                identifier
            ))),
        }
    }

    /// Transactions passing `filter`, newest first
    pub fn list(&self, filter: &TransactionFilter, limit: Option<usize>) -> CoinResult<Vec<Transaction>> {
        let profile = self.storage.profiles.load(self.profile)?;

        let mut transactions: Vec<Transaction> = filter_transactions(&profile.transactions, filter)
            .into_iter()
            .cloned()
            .collect();

        // Stored order is ascending and stable, so reversing keeps ties newest-inserted first
        transactions.reverse();

        if let Some(limit) = limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Every transaction of the profile, oldest first
    pub fn all(&self) -> CoinResult<Vec<Transaction>> {
        Ok(self.storage.profiles.load(self.profile)?.transactions)
    }

    /// Replace the amount, source and/or date of a transaction
    pub fn update(&self, id: TransactionId, input: UpdateTransactionInput) -> CoinResult<Transaction> {
        let mut profile = self.storage.profiles.load(self.profile)?;

        let txn = profile
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| CoinError::transaction_not_found(id.to_string()))?;

        let before = txn.clone();

        if let Some(amount) = input.amount {
            txn.amount = amount;
        }
        if let Some(source) = input.source {
            txn.source = source.trim().to_string();
        }
        if let Some(date) = input.date {
            txn.date = date;
        }

        txn.validate()?;

        let mut changes = Vec::new();
        if before.amount != txn.amount {
            changes.push(format!("amount: {} -> {}", before.amount, txn.amount));
        }
        if before.source != txn.source {
            changes.push(format!("source: '{}' -> '{}'", before.source, txn.source));
        }
        if before.date != txn.date {
            changes.push(format!("date: {} -> {}", before.date, txn.date));
        }

        self.storage.profiles.save(&mut profile)?;

        info!(profile = self.profile, id = %id, changes = %changes.join(", "), "updated transaction");

        profile
            .transaction(id)
            .cloned()
            .ok_or_else(|| CoinError::transaction_not_found(id.to_string()))
    }

    /// Delete a transaction, returning what was removed
    pub fn delete(&self, id: TransactionId) -> CoinResult<Transaction> {
        let mut profile = self.storage.profiles.load(self.profile)?;

        let index = profile
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoinError::transaction_not_found(id.to_string()))?;

        let txn = profile.transactions.remove(index);
        self.storage.profiles.save(&mut profile)?;

        info!(profile = self.profile, id = %id, "deleted transaction");

        Ok(txn)
    }
}
