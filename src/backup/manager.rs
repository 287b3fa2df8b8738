//! Backup manager for CoinTracker
//!
//! A backup is a full JSON export of one profile, written to the backups
//! directory as `<profile>_backup_<YYYYmmdd_HHMMSS>.json`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::info;

use crate::error::{CoinError, CoinResult};
use crate::export::json::{import_profile_json, ImportSummary, ProfileExport};
use crate::storage::{write_json_atomic, Storage};

const NAME_MARKER: &str = "_backup_";
const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const STAMP_LEN: usize = 15;

/// Metadata about a backup file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupInfo {
    pub filename: String,
    pub path: PathBuf,
    /// Profile the backup was taken from
    pub profile: String,
    /// Local time encoded in the filename
    pub created_at: NaiveDateTime,
    pub size_bytes: u64,
}

/// Creates, lists and restores profile backups
pub struct BackupManager<'a> {
    storage: &'a Storage,
    backup_dir: PathBuf,
}

impl<'a> BackupManager<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            backup_dir: storage.paths().backups_dir(),
            storage,
        }
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Back up a profile now
    pub fn create_backup(&self, profile: &str) -> CoinResult<BackupInfo> {
        self.create_backup_at(profile, Local::now().naive_local())
    }

    /// Back up a profile with an explicit timestamp
    ///
    /// A second backup within the same second gets a numeric suffix rather
    /// than replacing the first.
    pub fn create_backup_at(&self, profile: &str, now: NaiveDateTime) -> CoinResult<BackupInfo> {
        fs::create_dir_all(&self.backup_dir).map_err(|e| {
            CoinError::Io(format!("Failed to create backup directory: {}", e))
        })?;

        let export = ProfileExport::from_storage(self.storage, profile)?;

        let stem = format!("{}{}{}", profile, NAME_MARKER, now.format(STAMP_FORMAT));
        let mut path = self.backup_dir.join(format!("{}.json", stem));
        let mut n = 1;
        while path.exists() {
            path = self.backup_dir.join(format!("{}_{}.json", stem, n));
            n += 1;
        }

        write_json_atomic(&path, &export)?;
        info!(profile, path = %path.display(), "created backup");

        parse_backup_info(&path).ok_or_else(|| {
            CoinError::Storage(format!("Unreadable backup name: {}", path.display()))
        })
    }

    /// Backups in the backup directory, newest first
    ///
    /// With `profile`, only that profile's backups are listed. Files that do
    /// not follow the backup naming scheme are skipped.
    pub fn list_backups(&self, profile: Option<&str>) -> CoinResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.backup_dir).map_err(|e| {
            CoinError::Io(format!("Failed to read backup directory: {}", e))
        })?;

        let mut backups = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                CoinError::Io(format!("Failed to read directory entry: {}", e))
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(info) = parse_backup_info(&path) {
                    if profile.map_or(true, |p| p == info.profile) {
                        backups.push(info);
                    }
                }
            }
        }

        backups.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.filename.cmp(&a.filename))
        });
        Ok(backups)
    }

    /// Find a backup by filename, path, or `latest` for `profile`
    pub fn find_backup(&self, profile: &str, reference: &str) -> CoinResult<PathBuf> {
        if reference == "latest" {
            return self
                .list_backups(Some(profile))?
                .into_iter()
                .next()
                .map(|b| b.path)
                .ok_or_else(|| CoinError::NotFound {
                    entity_type: "Backup",
                    identifier: format!("latest for profile '{}'", profile),
                });
        }

        let in_dir = self.backup_dir.join(reference);
        if in_dir.is_file() {
            return Ok(in_dir);
        }
        let as_path = PathBuf::from(reference);
        if as_path.is_file() {
            return Ok(as_path);
        }

        Err(CoinError::NotFound {
            entity_type: "Backup",
            identifier: reference.to_string(),
        })
    }

    /// Load a backup into `profile`, replacing its transactions
    pub fn restore_backup(&self, profile: &str, reference: &str) -> CoinResult<ImportSummary> {
        let path = self.find_backup(profile, reference)?;
        let contents = fs::read_to_string(&path).map_err(|e| {
            CoinError::Io(format!("Failed to read backup {}: {}", path.display(), e))
        })?;

        let summary = import_profile_json(self.storage, profile, &contents)?;
        info!(profile, path = %path.display(), "restored backup");
        Ok(summary)
    }
}

/// Parse profile and timestamp from `<profile>_backup_<stamp>[_n].json`
fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_str()?.to_string();
    let stem = filename.strip_suffix(".json")?;

    let marker = stem.rfind(NAME_MARKER)?;
    let profile = &stem[..marker];
    let stamp = &stem[marker + NAME_MARKER.len()..];
    if profile.is_empty() || stamp.len() < STAMP_LEN {
        return None;
    }

    let (stamp, suffix) = stamp.split_at(STAMP_LEN);
    if !(suffix.is_empty() || suffix.strip_prefix('_').is_some_and(|n| n.parse::<u32>().is_ok())) {
        return None;
    }
    let created_at = NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT).ok()?;
    let size_bytes = fs::metadata(path).ok()?.len();

    Some(BackupInfo {
        filename: filename.clone(),
        path: path.to_path_buf(),
        profile: profile.to_string(),
        created_at,
        size_bytes,
    })
}
