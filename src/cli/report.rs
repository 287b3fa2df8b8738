//! Report CLI commands: summary, analytics, history and sources

use super::{now, AppContext, FilterArgs};
use crate::analytics::{compute_unique_sources, ProfileSnapshot};
use crate::display::{format_analytics, format_sources, format_summary, format_transaction_table};
use crate::error::{CoinError, CoinResult};
use crate::services::TransactionService;

fn snapshot(ctx: &AppContext) -> CoinResult<ProfileSnapshot> {
    let profile = ctx.storage.profiles.load(&ctx.profile)?;
    Ok(ProfileSnapshot::build(
        &ctx.profile,
        &profile.transactions,
        &profile.settings,
        now(),
    ))
}

fn print_json(snapshot: &ProfileSnapshot) -> CoinResult<()> {
    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|e| CoinError::Json(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

/// Balance, goal progress and this day/week/month's earnings
pub fn handle_summary(ctx: &AppContext, json: bool) -> CoinResult<()> {
    let snapshot = snapshot(ctx)?;
    if json {
        return print_json(&snapshot);
    }
    print!("{}", format_summary(&snapshot));
    Ok(())
}

/// Totals, breakdowns and timeline
pub fn handle_analytics(ctx: &AppContext, json: bool, top: Option<usize>) -> CoinResult<()> {
    let snapshot = snapshot(ctx)?;
    if json {
        return print_json(&snapshot);
    }
    print!("{}", format_analytics(&snapshot, top));
    Ok(())
}

/// Recent transactions; the row limit defaults to the configured one
pub fn handle_history(ctx: &AppContext, filter: FilterArgs) -> CoinResult<()> {
    let limit = filter.limit.unwrap_or(ctx.config.history_limit);
    let transactions = TransactionService::new(&ctx.storage, &ctx.profile)
        .list(&filter.to_filter()?, Some(limit))?;
    print!(
        "{}",
        format_transaction_table(&transactions, &ctx.config.date_format)
    );
    Ok(())
}

/// Every distinct source, sorted
pub fn handle_sources(ctx: &AppContext) -> CoinResult<()> {
    let transactions = TransactionService::new(&ctx.storage, &ctx.profile).all()?;
    print!("{}", format_sources(&compute_unique_sources(&transactions)));
    Ok(())
}
