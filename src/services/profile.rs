//! Profile service
//!
//! Profiles are isolated working sets. The last active profile is kept in
//! the application config so it survives restarts.

use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::{CoinError, CoinResult};
use crate::models::{validate_profile_name, Profile, DEFAULT_PROFILE};
use crate::storage::Storage;

/// Service for profile management
pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// `Default` plus every stored profile, sorted
    pub fn list(&self) -> CoinResult<Vec<String>> {
        let mut names: BTreeSet<String> = self.storage.profiles.list_names()?.into_iter().collect();
        names.insert(DEFAULT_PROFILE.to_string());
        Ok(names.into_iter().collect())
    }

    /// Whether `name` is a known profile
    pub fn exists(&self, name: &str) -> bool {
        name == DEFAULT_PROFILE || self.storage.profiles.exists(name)
    }

    /// The last active profile
    ///
    /// A blank or invalid name in the config falls back to `Default`.
    pub fn current(&self, config: &AppConfig) -> String {
        let name = config.current_profile.as_str();
        if name.trim().is_empty() {
            return DEFAULT_PROFILE.to_string();
        }
        if let Err(e) = validate_profile_name(name) {
            warn!(profile = name, error = %e, "ignoring invalid current profile");
            return DEFAULT_PROFILE.to_string();
        }
        name.to_string()
    }

    /// Check that `name` may be used for a one-off command
    pub fn resolve(&self, name: &str) -> CoinResult<String> {
        validate_profile_name(name).map_err(CoinError::Validation)?;
        if !self.exists(name) {
            return Err(CoinError::profile_not_found(name));
        }
        Ok(name.to_string())
    }

    /// Create an empty profile and make it current
    pub fn create(&self, config: &mut AppConfig, name: &str) -> CoinResult<Profile> {
        validate_profile_name(name).map_err(CoinError::Validation)?;
        if self.exists(name) {
            return Err(CoinError::Duplicate {
                entity_type: "Profile",
                identifier: name.to_string(),
            });
        }

        let profile = self.storage.profiles.create(name)?;
        self.set_current(config, name)?;
        Ok(profile)
    }

    /// Make an existing profile current
    pub fn switch(&self, config: &mut AppConfig, name: &str) -> CoinResult<()> {
        let name = self.resolve(name)?;
        self.set_current(config, &name)
    }

    /// Delete a profile's document
    ///
    /// `Default` and the current profile can't be deleted.
    pub fn delete(&self, config: &AppConfig, name: &str) -> CoinResult<()> {
        if name == DEFAULT_PROFILE {
            return Err(CoinError::Validation(
                "The Default profile cannot be deleted".into(),
            ));
        }
        if name == self.current(config) {
            return Err(CoinError::Validation(format!(
                "Profile '{}' is current; switch to another profile first",
                name
            )));
        }
        self.storage.profiles.delete(name)
    }

    fn set_current(&self, config: &mut AppConfig, name: &str) -> CoinResult<()> {
        let previous = std::mem::replace(&mut config.current_profile, name.to_string());
        config.save(self.storage.paths())?;
        info!(from = %previous, to = name, "switched profile");
        Ok(())
    }
}
