//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod backup;
pub mod export;
pub mod profile;
pub mod quick_action;
pub mod report;
pub mod settings;
pub mod transaction;

pub use backup::{handle_backup_command, BackupCommands};
pub use export::{handle_export, handle_import, ExportFormat};
pub use profile::{handle_profile_command, ProfileCommands};
pub use quick_action::{handle_quick, handle_quick_action_command, QuickActionCommands};
pub use report::{handle_analytics, handle_history, handle_sources, handle_summary};
pub use settings::{handle_goal_command, handle_theme_command, GoalCommands, ThemeCommands};
pub use transaction::{
    handle_add, handle_transaction_command, FilterArgs, TransactionCommands,
};

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::config::{AppConfig, CoinPaths};
use crate::error::{CoinError, CoinResult};
use crate::models::timestamp::parse_timestamp;
use crate::services::ProfileService;
use crate::storage::Storage;

/// Application state owned by the entry point and lent to every handler
pub struct AppContext {
    pub storage: Storage,
    pub config: AppConfig,
    /// Profile the current command operates on
    pub profile: String,
}

impl AppContext {
    /// Open storage and config, and settle which profile to use
    ///
    /// `profile_override` applies to this invocation only and must name an
    /// existing profile.
    pub fn open(paths: CoinPaths, profile_override: Option<&str>) -> CoinResult<Self> {
        let config = AppConfig::load_or_create(&paths)?;
        let storage = Storage::new(paths)?;

        let profiles = ProfileService::new(&storage);
        let profile = match profile_override {
            Some(name) => profiles.resolve(name)?,
            None => profiles.current(&config),
        };

        Ok(Self {
            storage,
            config,
            profile,
        })
    }
}

/// The evaluation instant for dashboard figures
pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a `--date` argument
pub(crate) fn parse_date_arg(input: &str) -> CoinResult<NaiveDateTime> {
    parse_timestamp(input).ok_or_else(|| {
        CoinError::Validation(format!(
            "Invalid date '{}'. Use YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]",
            input
        ))
    })
}

/// Parse a calendar-day filter argument
pub(crate) fn parse_day_arg(input: &str) -> CoinResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        CoinError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", input))
    })
}
