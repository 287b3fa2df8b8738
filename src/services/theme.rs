//! Theme service
//!
//! Toggling the theme is the one optimistic mutation: the caller's view
//! flips immediately, and is flipped back if the store rejects the write.

use tracing::{info, warn};

use super::settings::SettingsService;
use crate::error::CoinResult;
use crate::models::ProfileSettings;
use crate::storage::Storage;

/// Where an optimistic update stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Visible locally, not yet acknowledged by the store
    Applied,
    /// The store accepted the new value
    Confirmed,
    /// The store rejected it and the previous value is back
    RolledBack,
}

/// A local change that may still be undone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimisticUpdate<T> {
    previous: T,
    applied: T,
    phase: Phase,
}

impl<T: Clone> OptimisticUpdate<T> {
    /// Write `next` into `slot`, remembering what was there
    pub fn apply(slot: &mut T, next: T) -> Self {
        let previous = std::mem::replace(slot, next.clone());
        Self {
            previous,
            applied: next,
            phase: Phase::Applied,
        }
    }

    /// Mark the applied value as accepted
    pub fn confirm(&mut self) {
        if self.phase == Phase::Applied {
            self.phase = Phase::Confirmed;
        }
    }

    /// Put the previous value back into `slot`
    pub fn roll_back(&mut self, slot: &mut T) {
        if self.phase == Phase::Applied {
            *slot = self.previous.clone();
            self.phase = Phase::RolledBack;
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn previous(&self) -> &T {
        &self.previous
    }

    pub fn applied(&self) -> &T {
        &self.applied
    }
}

/// Service for the theme preference
pub struct ThemeService<'a> {
    storage: &'a Storage,
    profile: &'a str,
}

impl<'a> ThemeService<'a> {
    pub fn new(storage: &'a Storage, profile: &'a str) -> Self {
        Self { storage, profile }
    }

    /// Flip `view.dark_mode` and persist it
    ///
    /// On failure `view` is restored and the store's error is returned.
    pub fn toggle(&self, view: &mut ProfileSettings) -> CoinResult<OptimisticUpdate<bool>> {
        let next = !view.dark_mode;
        self.set(view, next)
    }

    /// Set `view.dark_mode` to `dark_mode` and persist it
    pub fn set(
        &self,
        view: &mut ProfileSettings,
        dark_mode: bool,
    ) -> CoinResult<OptimisticUpdate<bool>> {
        let mut update = OptimisticUpdate::apply(&mut view.dark_mode, dark_mode);

        match SettingsService::new(self.storage, self.profile).set_dark_mode(dark_mode) {
            Ok(_) => {
                update.confirm();
                info!(
                    profile = self.profile,
                    from = *update.previous(),
                    to = *update.applied(),
                    "theme saved"
                );
                Ok(update)
            }
            Err(e) => {
                update.roll_back(&mut view.dark_mode);
                warn!(
                    profile = self.profile,
                    attempted = *update.applied(),
                    error = %e,
                    "theme change rolled back"
                );
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CoinPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CoinPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_update_phases() {
        let mut slot = 1;
        let mut update = OptimisticUpdate::apply(&mut slot, 2);
        assert_eq!(slot, 2);
        assert_eq!(update.phase(), Phase::Applied);

        update.roll_back(&mut slot);
        assert_eq!(slot, 1);
        assert_eq!(update.phase(), Phase::RolledBack);

        // Settled updates don't move again
        update.confirm();
        assert_eq!(update.phase(), Phase::RolledBack);
    }

    #[test]
    fn test_toggle_confirms() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ThemeService::new(&storage, "Default");
        let mut view = SettingsService::new(&storage, "Default").get().unwrap();

        let update = service.toggle(&mut view).unwrap();
        assert_eq!(update.phase(), Phase::Confirmed);
        assert!(!*update.previous());
        assert!(*update.applied());
        assert!(view.dark_mode);

        let stored = SettingsService::new(&storage, "Default").get().unwrap();
        assert!(stored.dark_mode);
    }

    #[test]
    fn test_toggle_rolls_back_on_store_failure() {
        let (_temp_dir, storage) = create_test_storage();
        let profiles_dir = storage.paths().profiles_dir();
        std::fs::remove_dir_all(&profiles_dir).unwrap();
        std::fs::write(&profiles_dir, "blocking file").unwrap();

        let service = ThemeService::new(&storage, "Default");
        let mut view = crate::models::ProfileSettings::default();

        let err = service.toggle(&mut view).unwrap_err();
        assert!(matches!(err, crate::error::CoinError::Storage(_)));
        assert!(!view.dark_mode);
    }
}
