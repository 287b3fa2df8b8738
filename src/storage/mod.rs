//! Storage layer for CoinTracker
//!
//! One JSON document per profile, written atomically, read leniently.

pub mod file_io;
pub mod profiles;
pub mod repair;

pub use file_io::{read_json_value, write_json_atomic};
pub use profiles::ProfileRepository;
pub use repair::{merge_settings, repair_profile, repair_transactions, RepairReport};

use crate::config::paths::CoinPaths;
use crate::error::CoinError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: CoinPaths,
    pub profiles: ProfileRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: CoinPaths) -> Result<Self, CoinError> {
        paths.ensure_directories()?;

        Ok(Self {
            profiles: ProfileRepository::new(paths.profiles_dir()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &CoinPaths {
        &self.paths
    }
}
