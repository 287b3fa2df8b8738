//! Profile repository for JSON storage
//!
//! Each profile is one document at `profiles/<name>.json`. Documents are
//! read leniently (see [`super::repair`]) and always written in canonical
//! form.

use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::error::CoinError;
use crate::models::Profile;

use super::file_io::{read_json_value, write_json_atomic};
use super::repair::repair_profile;

/// Repository for profile persistence
pub struct ProfileRepository {
    dir: PathBuf,
}

impl ProfileRepository {
    /// Create a repository rooted at the profiles directory
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Document path for a profile
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    /// Whether a document exists for this profile
    pub fn exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    /// Names of all stored profiles, sorted
    pub fn list_names(&self) -> Result<Vec<String>, CoinError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).map_err(|e| {
            CoinError::Storage(format!("Failed to read {}: {}", self.dir.display(), e))
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Load a profile
    ///
    /// A profile with no document yet loads as empty with default settings.
    pub fn load(&self, name: &str) -> Result<Profile, CoinError> {
        let path = self.path(name);
        let Some(doc) = read_json_value(&path)? else {
            debug!(profile = name, "no document, using empty profile");
            return Ok(Profile::new(name));
        };

        let (profile, report) = repair_profile(name, &doc);
        if !report.is_clean() {
            warn!(
                profile = name,
                dropped = report.dropped_transactions,
                fixed_transactions = report.fixed_transactions,
                fixed_settings = report.fixed_settings,
                "repaired profile document on load"
            );
        }
        debug!(
            profile = name,
            transactions = profile.transactions.len(),
            "loaded profile"
        );
        Ok(profile)
    }

    /// Save a profile, refreshing running balances and `last_updated`
    pub fn save(&self, profile: &mut Profile) -> Result<(), CoinError> {
        self.save_at(profile, Local::now().naive_local())
    }

    /// Save a profile with an explicit `last_updated` stamp
    pub fn save_at(&self, profile: &mut Profile, now: NaiveDateTime) -> Result<(), CoinError> {
        profile.recalculate_balances()?;
        profile.last_updated = Some(now);
        write_json_atomic(self.path(&profile.profile_name), profile)?;
        debug!(
            profile = %profile.profile_name,
            transactions = profile.transactions.len(),
            "saved profile"
        );
        Ok(())
    }

    /// Write an empty profile document
    pub fn create(&self, name: &str) -> Result<Profile, CoinError> {
        if self.exists(name) {
            return Err(CoinError::Duplicate {
                entity_type: "Profile",
                identifier: name.to_string(),
            });
        }

        let mut profile = Profile::new(name);
        self.save(&mut profile)?;
        info!(profile = name, "created profile");
        Ok(profile)
    }

    /// Remove a profile document
    pub fn delete(&self, name: &str) -> Result<(), CoinError> {
        let path = self.path(name);
        if !path.is_file() {
            return Err(CoinError::profile_not_found(name));
        }
        fs::remove_file(&path).map_err(|e| {
            CoinError::Storage(format!("Failed to remove {}: {}", path.display(), e))
        })?;
        info!(profile = name, "deleted profile");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ProfileRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ProfileRepository::new(temp_dir.path().join("profiles"));
        (temp_dir, repo)
    }

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_missing_profile_loads_empty() {
        let (_temp, repo) = setup();
        let profile = repo.load("Default").unwrap();
        assert_eq!(profile.profile_name, "Default");
        assert!(profile.transactions.is_empty());
        assert_eq!(profile.settings.goal, 13_500);
        assert!(repo.list_names().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let (_temp, repo) = setup();
        let mut profile = Profile::new("Default");
        profile.transactions.push(Transaction::new(-100, "snacks", at(11)));
        profile.transactions.push(Transaction::new(300, "chores", at(10)));
        profile.settings.goal = 1000;

        repo.save_at(&mut profile, at(12)).unwrap();

        let loaded = repo.load("Default").unwrap();
        assert_eq!(loaded, profile);
        assert_eq!(loaded.transactions[0].source, "chores");
        assert_eq!(loaded.transactions[1].previous_balance, Some(300));
        assert_eq!(loaded.last_updated, Some(at(12)));
    }

    #[test]
    fn test_create_and_list() {
        let (_temp, repo) = setup();
        repo.create("Weekend").unwrap();
        repo.create("Kid").unwrap();

        assert_eq!(repo.list_names().unwrap(), vec!["Kid", "Weekend"]);
        assert!(repo.exists("Kid"));

        let err = repo.create("Kid").unwrap_err();
        assert!(err.is_duplicate());
    }

    #[test]
    fn test_delete() {
        let (_temp, repo) = setup();
        repo.create("Kid").unwrap();
        repo.delete("Kid").unwrap();
        assert!(!repo.exists("Kid"));
        assert!(repo.delete("Kid").unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_ignores_temp_files() {
        let (_temp, repo) = setup();
        repo.create("Kid").unwrap();
        fs::write(repo.dir.join("Kid.json.tmp"), "{}").unwrap();
        fs::write(repo.dir.join("notes.txt"), "hi").unwrap();
        assert_eq!(repo.list_names().unwrap(), vec!["Kid"]);
    }

    #[test]
    fn test_load_repairs_damaged_document() {
        let (_temp, repo) = setup();
        fs::create_dir_all(&repo.dir).unwrap();
        fs::write(
            repo.path("Default"),
            r#"{"transactions": [{"date": "2025-01-10", "amount": "5", "source": "ads"}, 42],
                "settings": {"goal": -1}}"#,
        )
        .unwrap();

        let profile = repo.load("Default").unwrap();
        assert_eq!(profile.transactions.len(), 1);
        assert_eq!(profile.transactions[0].amount, 5);
        assert_eq!(profile.settings.goal, 0);
    }

    #[test]
    fn test_save_rejects_overflowing_balance() {
        let (_temp, repo) = setup();
        let mut profile = Profile::new("Default");
        profile.transactions.push(Transaction::new(i64::MAX, "jackpot", at(1)));
        repo.save(&mut profile).unwrap();

        profile.transactions.push(Transaction::new(1, "one more", at(2)));
        let err = repo.save(&mut profile).unwrap_err();
        assert!(err.is_validation());

        let stored = repo.load("Default").unwrap();
        assert_eq!(stored.transactions.len(), 1);
        assert_eq!(stored.transactions[0].balance_after(), Some(i64::MAX));
    }

    #[test]
    fn test_load_drops_entries_that_overflow_balance() {
        let (_temp, repo) = setup();
        fs::create_dir_all(&repo.dir).unwrap();
        fs::write(
            repo.path("Default"),
            format!(
                r#"{{"transactions": [
                    {{"date": "2025-01-10", "amount": {}, "source": "jackpot"}},
                    {{"date": "2025-01-11", "amount": 1, "source": "one more"}}
                ]}}"#,
                i64::MAX
            ),
        )
        .unwrap();

        let profile = repo.load("Default").unwrap();
        assert_eq!(profile.transactions.len(), 1);
        assert_eq!(profile.transactions[0].source, "jackpot");
    }
}
