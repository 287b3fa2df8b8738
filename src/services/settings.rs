//! Settings service
//!
//! Reads and updates the per-profile goal and theme preference.

use tracing::info;

use crate::error::{CoinError, CoinResult};
use crate::models::ProfileSettings;
use crate::storage::Storage;

/// Settings fields to change; `None` leaves a field alone
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub goal: Option<i64>,
    pub dark_mode: Option<bool>,
}

/// Service for per-profile settings
pub struct SettingsService<'a> {
    storage: &'a Storage,
    profile: &'a str,
}

impl<'a> SettingsService<'a> {
    pub fn new(storage: &'a Storage, profile: &'a str) -> Self {
        Self { storage, profile }
    }

    /// Current settings
    pub fn get(&self) -> CoinResult<ProfileSettings> {
        Ok(self.storage.profiles.load(self.profile)?.settings)
    }

    /// Set the savings goal; negative goals are rejected
    pub fn set_goal(&self, goal: i64) -> CoinResult<ProfileSettings> {
        self.update(SettingsPatch {
            goal: Some(goal),
            ..Default::default()
        })
    }

    /// Set the theme preference
    pub fn set_dark_mode(&self, dark_mode: bool) -> CoinResult<ProfileSettings> {
        self.update(SettingsPatch {
            dark_mode: Some(dark_mode),
            ..Default::default()
        })
    }

    /// Apply every provided field, validating before anything is written
    pub fn update(&self, patch: SettingsPatch) -> CoinResult<ProfileSettings> {
        if let Some(goal) = patch.goal {
            if goal < 0 {
                return Err(CoinError::invalid_goal(goal));
            }
        }

        let mut profile = self.storage.profiles.load(self.profile)?;

        if let Some(goal) = patch.goal {
            profile.settings.goal = goal;
        }
        if let Some(dark_mode) = patch.dark_mode {
            profile.settings.dark_mode = dark_mode;
        }

        self.storage.profiles.save(&mut profile)?;

        info!(
            profile = self.profile,
            goal = profile.settings.goal,
            dark_mode = profile.settings.dark_mode,
            "updated settings"
        );

        Ok(profile.settings)
    }
}
