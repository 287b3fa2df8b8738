//! Quick action CLI commands

use clap::Subcommand;

use super::{parse_date_arg, AppContext};
use crate::display::{format_coins, format_quick_actions, format_signed};
use crate::error::CoinResult;
use crate::services::{QuickActionRef, QuickActionService};

/// Quick action subcommands
#[derive(Subcommand)]
pub enum QuickActionCommands {
    /// List quick actions
    List,
    /// Add a quick action
    Add {
        /// Label, also used as the transaction source
        text: String,
        /// Coin value
        value: i64,
        /// Make it a spend instead of a gain
        #[arg(long)]
        spend: bool,
    },
    /// Remove a quick action by label or list number
    Remove {
        action: String,
    },
    /// Restore the default quick actions
    Reset,
}

/// Apply a quick action by label or list number
pub fn handle_quick(ctx: &AppContext, action: &str, date: Option<String>) -> CoinResult<()> {
    let date = date.as_deref().map(parse_date_arg).transpose()?;
    let txn = QuickActionService::new(&ctx.storage, &ctx.profile)
        .apply(&QuickActionRef::parse(action), date)?;

    println!("Recorded {} {} ({})", format_signed(txn.amount), txn.source, txn.id);
    if let Some(balance) = txn.balance_after() {
        println!("Balance after: {}", format_coins(balance));
    }
    Ok(())
}

/// Handle a `quick-action` subcommand
pub fn handle_quick_action_command(ctx: &AppContext, cmd: QuickActionCommands) -> CoinResult<()> {
    let service = QuickActionService::new(&ctx.storage, &ctx.profile);

    match cmd {
        QuickActionCommands::List => {
            print!("{}", format_quick_actions(&service.list()?));
        }
        QuickActionCommands::Add { text, value, spend } => {
            let action = service.add(&text, value, !spend)?;
            println!(
                "Added quick action: {} ({})",
                action.text,
                format_signed(action.signed_value())
            );
        }
        QuickActionCommands::Remove { action } => {
            let removed = service.remove(&QuickActionRef::parse(&action))?;
            println!("Removed quick action: {}", removed.text);
        }
        QuickActionCommands::Reset => {
            let actions = service.reset()?;
            println!("Restored {} default quick actions", actions.len());
        }
    }

    Ok(())
}
