//! Path management for CoinTracker
//!
//! ## Path Resolution Order
//!
//! 1. `COIN_TRACKER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory joined with `coin-tracker`
//!    (`~/.config/coin-tracker` on Linux, `%APPDATA%\coin-tracker` on Windows)

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::CoinError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "COIN_TRACKER_DATA_DIR";

/// Manages all paths used by CoinTracker
#[derive(Debug, Clone)]
pub struct CoinPaths {
    /// Base directory for all CoinTracker data
    base_dir: PathBuf,
}

impl CoinPaths {
    /// Create a new CoinPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// environment override is not set.
    pub fn new() -> Result<Self, CoinError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create CoinPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the application config file
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the directory holding one document per profile
    pub fn profiles_dir(&self) -> PathBuf {
        self.base_dir.join("profiles")
    }

    /// Get the directory holding timestamped profile backups
    pub fn backups_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the document path for a profile
    pub fn profile_file(&self, profile_name: &str) -> PathBuf {
        self.profiles_dir().join(format!("{}.json", profile_name))
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), CoinError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CoinError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.profiles_dir())
            .map_err(|e| CoinError::Io(format!("Failed to create profiles directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, CoinError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| CoinError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("coin-tracker"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CoinPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.profiles_dir(), temp_dir.path().join("profiles"));
        assert_eq!(paths.backups_dir(), temp_dir.path().join("backups"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CoinPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.profiles_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CoinPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.config_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.profile_file("Default"),
            temp_dir.path().join("profiles").join("Default.json")
        );
    }
}
