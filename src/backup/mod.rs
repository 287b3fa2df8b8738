//! Profile backups
//!
//! Backups reuse the JSON export format, so a backup file can also be fed to
//! `coin import`.

mod manager;

pub use manager::{BackupInfo, BackupManager};
