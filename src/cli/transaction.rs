//! Transaction CLI commands
//!
//! Implements `add`, `spend` and the `txn` subcommands.

use clap::{Args, Subcommand};

use super::{parse_date_arg, parse_day_arg, AppContext};
use crate::analytics::TransactionFilter;
use crate::display::{format_coins, format_signed, format_transaction_details, format_transaction_table};
use crate::error::{CoinError, CoinResult};
use crate::services::{CreateTransactionInput, TransactionService, UpdateTransactionInput};

/// Filter flags shared by `txn list` and `history`
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Only this exact source
    #[arg(short, long)]
    pub source: Option<String>,

    /// Case-insensitive text to find in source or amount
    #[arg(long)]
    pub search: Option<String>,

    /// Maximum number of rows
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl FilterArgs {
    /// Build the engine filter from the flags
    pub fn to_filter(&self) -> CoinResult<TransactionFilter> {
        let mut filter = TransactionFilter::new();
        if let Some(from) = &self.from {
            filter = filter.from(parse_day_arg(from)?);
        }
        if let Some(to) = &self.to {
            filter = filter.to(parse_day_arg(to)?);
        }
        if let (Some(from), Some(to)) = (filter.date_from, filter.date_to) {
            if from > to {
                return Err(CoinError::Validation(format!(
                    "--from {} is after --to {}",
                    from, to
                )));
            }
        }
        if let Some(source) = &self.source {
            filter = filter.source(source.clone());
        }
        if let Some(search) = &self.search {
            filter = filter.search(search.clone());
        }
        Ok(filter)
    }
}

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// List transactions, newest first
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show transaction details
    Show {
        /// Transaction ID (full UUID, txn-xxxxxxxx, or prefix)
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New signed amount (negative for a spend)
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<i64>,
        /// New source
        #[arg(short, long)]
        source: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Record a gain (`add`) or a spend (`spend`)
///
/// The sign comes from the command, so only the magnitude of `amount` is used.
pub fn handle_add(
    ctx: &AppContext,
    amount: i64,
    source: String,
    date: Option<String>,
    spend: bool,
) -> CoinResult<()> {
    let magnitude = amount.checked_abs().ok_or_else(|| {
        CoinError::Validation(format!("Amount out of range: {}", amount))
    })?;
    let amount = if spend { -magnitude } else { magnitude };
    let date = date.as_deref().map(parse_date_arg).transpose()?;

    let txn = TransactionService::new(&ctx.storage, &ctx.profile).create(CreateTransactionInput {
        amount,
        source,
        date,
    })?;

    println!(
        "Recorded {} {} ({})",
        format_signed(txn.amount),
        txn.source,
        txn.id
    );
    if let Some(balance) = txn.balance_after() {
        println!("Balance after: {}", format_coins(balance));
    }
    Ok(())
}

/// Handle a `txn` subcommand
pub fn handle_transaction_command(ctx: &AppContext, cmd: TransactionCommands) -> CoinResult<()> {
    let service = TransactionService::new(&ctx.storage, &ctx.profile);
    let date_format = ctx.config.date_format.as_str();

    match cmd {
        TransactionCommands::List { filter } => {
            let transactions = service.list(&filter.to_filter()?, filter.limit)?;
            print!("{}", format_transaction_table(&transactions, date_format));
        }
        TransactionCommands::Show { id } => {
            let txn = service.find(&id)?;
            print!("{}", format_transaction_details(&txn, date_format));
        }
        TransactionCommands::Edit {
            id,
            amount,
            source,
            date,
        } => {
            let input = UpdateTransactionInput {
                amount,
                source,
                date: date.as_deref().map(parse_date_arg).transpose()?,
            };
            if input.is_empty() {
                println!("Nothing to change. Use --amount, --source or --date.");
                return Ok(());
            }

            let txn = service.find(&id)?;
            let updated = service.update(txn.id, input)?;
            println!("Updated transaction {}", updated.id);
            print!("{}", format_transaction_details(&updated, date_format));
        }
        TransactionCommands::Delete { id } => {
            let txn = service.find(&id)?;
            let removed = service.delete(txn.id)?;
            println!(
                "Deleted {} {} ({})",
                format_signed(removed.amount),
                removed.source,
                removed.id
            );
        }
    }

    Ok(())
}
