//! Service layer for CoinTracker
//!
//! Services sit on top of the storage layer and own validation and logging.
//! Each one borrows the storage and works on a single named profile with a
//! load, change, save cycle.

pub mod profile;
pub mod quick_action;
pub mod settings;
pub mod theme;
pub mod transaction;

pub use profile::ProfileService;
pub use quick_action::{QuickActionRef, QuickActionService};
pub use settings::{SettingsPatch, SettingsService};
pub use theme::{OptimisticUpdate, Phase, ThemeService};
pub use transaction::{CreateTransactionInput, TransactionService, UpdateTransactionInput};
