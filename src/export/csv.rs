//! CSV export
//!
//! One row per transaction, oldest first, with the balance right after it.

use std::io::Write;

use serde::Serialize;

use crate::error::{CoinError, CoinResult};
use crate::models::timestamp::format_timestamp;
use crate::storage::Storage;

#[derive(Debug, Serialize)]
struct TransactionRow {
    id: String,
    date: String,
    source: String,
    amount: i64,
    balance_after: i64,
}

/// Export a profile's transactions to CSV
pub fn export_transactions_csv<W: Write>(
    storage: &Storage,
    profile_name: &str,
    writer: W,
) -> CoinResult<()> {
    let profile = storage.profiles.load(profile_name)?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    for txn in &profile.transactions {
        let balance = txn.balance_after().ok_or_else(|| {
            CoinError::Export(format!("No running balance for transaction {}", txn.id))
        })?;
        csv_writer
            .serialize(TransactionRow {
                id: txn.id.as_uuid().to_string(),
                date: format_timestamp(&txn.date),
                source: txn.source.clone(),
                amount: txn.amount,
                balance_after: balance,
            })
            .map_err(|e| CoinError::Export(e.to_string()))?;
    }

    // Headers come from the first serialized row, so write them by hand when empty
    if profile.transactions.is_empty() {
        csv_writer
            .write_record(["id", "date", "source", "amount", "balance_after"])
            .map_err(|e| CoinError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| CoinError::Export(e.to_string()))?;

    Ok(())
}
