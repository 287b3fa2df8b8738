//! Transaction display formatting
//!
//! History tables and single-transaction detail views.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::{format_coins, format_signed, truncate};
use crate::models::Transaction;

const SOURCE_WIDTH: usize = 28;

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

impl HistoryRow {
    fn new(txn: &Transaction, date_format: &str) -> Self {
        Self {
            id: txn.id.to_string(),
            date: txn.date.format(date_format).to_string(),
            source: truncate(&txn.source, SOURCE_WIDTH),
            amount: format_signed(txn.amount),
            balance: txn
                .balance_after()
                .map(format_coins)
                .unwrap_or_default(),
        }
    }
}

/// Format transactions as a history table
pub fn format_transaction_table(transactions: &[Transaction], date_format: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<HistoryRow> = transactions
        .iter()
        .map(|t| HistoryRow::new(t, date_format))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(3..)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("UUID:        {}\n", txn.id.as_uuid()));
    output.push_str(&format!("Date:        {}\n", txn.date.format(date_format)));
    output.push_str(&format!("Source:      {}\n", txn.source));
    output.push_str(&format!("Amount:      {}\n", format_signed(txn.amount)));
    output.push_str(&format!(
        "Type:        {}\n",
        if txn.is_gain() { "Gain" } else { "Spend" }
    ));

    if let (Some(before), Some(after)) = (txn.previous_balance, txn.balance_after()) {
        output.push_str(&format!(
            "Balance:     {} -> {}\n",
            format_coins(before),
            format_coins(after)
        ));
    }

    output
}
