//! JSON export and import
//!
//! An export holds one profile's transactions and settings together with
//! schema and provenance fields. Import also accepts a bare
//! `{transactions, settings}` document.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{CoinError, CoinResult};
use crate::models::timestamp::format_timestamp;
use crate::models::{ProfileSettings, Transaction};
use crate::storage::{merge_settings, repair_transactions, RepairReport, Storage};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Export of a single profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub profile_name: String,

    /// Transactions, oldest first, with running balances
    pub transactions: Vec<Transaction>,

    pub settings: ProfileSettings,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,

    /// Date of the oldest transaction
    pub earliest_transaction: Option<String>,

    /// Date of the newest transaction
    pub latest_transaction: Option<String>,
}

impl ProfileExport {
    /// Build an export of one profile from storage
    pub fn from_storage(storage: &Storage, profile_name: &str) -> CoinResult<Self> {
        let profile = storage.profiles.load(profile_name)?;
        let transactions = profile.transactions;

        let earliest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .min()
            .map(|d| format_timestamp(&d));

        let latest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .max()
            .map(|d| format_timestamp(&d));

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            earliest_transaction,
            latest_transaction,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            profile_name: profile.profile_name,
            transactions,
            settings: profile.settings,
            metadata,
        })
    }
}

/// Export a profile to JSON
pub fn export_profile_json<W: Write>(
    storage: &Storage,
    profile_name: &str,
    writer: &mut W,
    pretty: bool,
) -> CoinResult<()> {
    let export = ProfileExport::from_storage(storage, profile_name)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| CoinError::Export(e.to_string()))?;

    Ok(())
}

/// Outcome of an import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Transactions now stored in the profile
    pub imported: usize,
    /// Whether any settings were present in the payload
    pub settings_merged: bool,
    pub repairs: RepairReport,
}

/// Import a JSON payload into a profile
///
/// Transactions in the payload replace the profile's transactions; settings
/// present in the payload are merged over the current ones. Damaged entries
/// are repaired or dropped the same way as on load.
pub fn import_profile_json(
    storage: &Storage,
    profile_name: &str,
    json_str: &str,
) -> CoinResult<ImportSummary> {
    let payload: Value =
        serde_json::from_str(json_str).map_err(|e| CoinError::Import(e.to_string()))?;

    let obj = payload
        .as_object()
        .ok_or_else(|| CoinError::Import("Expected a JSON object".into()))?;

    if !obj.contains_key("transactions") && !obj.contains_key("settings") {
        return Err(CoinError::Import(
            "Payload has neither transactions nor settings".into(),
        ));
    }

    if let Some(version) = obj.get("schema_version").and_then(Value::as_str) {
        if version != EXPORT_SCHEMA_VERSION {
            return Err(CoinError::Import(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, version
            )));
        }
    }

    let transactions = obj.get("transactions");
    if transactions.is_some_and(|t| !t.is_array()) {
        return Err(CoinError::Import("transactions must be a list".into()));
    }
    let settings = obj.get("settings");
    if settings.is_some_and(|s| !s.is_object()) {
        return Err(CoinError::Import("settings must be an object".into()));
    }

    let mut report = RepairReport::default();
    let mut profile = storage.profiles.load(profile_name)?;

    if transactions.is_some() {
        profile.transactions = repair_transactions(transactions, &mut report);
    }
    if let Some(Value::Object(map)) = settings {
        profile.settings = merge_settings(&profile.settings, map, &mut report);
    }

    storage.profiles.save(&mut profile)?;

    if !report.is_clean() {
        warn!(
            profile = profile_name,
            dropped = report.dropped_transactions,
            fixed = report.fixed_transactions + report.fixed_settings,
            "repaired entries during import"
        );
    }
    info!(
        profile = profile_name,
        transactions = profile.transactions.len(),
        "imported profile data"
    );

    Ok(ImportSummary {
        imported: profile.transactions.len(),
        settings_merged: settings.is_some(),
        repairs: report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CoinPaths;
    use crate::services::{CreateTransactionInput, SettingsService, TransactionService};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CoinPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn add(storage: &Storage, amount: i64, source: &str, day: u32) {
        TransactionService::new(storage, "Default")
            .create(CreateTransactionInput {
                amount,
                source: source.into(),
                date: NaiveDate::from_ymd_opt(2025, 1, day)
                    .unwrap()
                    .and_hms_opt(9, 0, 0),
            })
            .unwrap();
    }

    #[test]
    fn test_profile_export() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, 300, "chores", 10);
        add(&storage, -100, "snacks", 12);

        let export = ProfileExport::from_storage(&storage, "Default").unwrap();
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.profile_name, "Default");
        assert_eq!(export.metadata.transaction_count, 2);
        assert_eq!(
            export.metadata.earliest_transaction.as_deref(),
            Some("2025-01-10T09:00:00")
        );
        assert_eq!(
            export.metadata.latest_transaction.as_deref(),
            Some("2025-01-12T09:00:00")
        );
    }

    #[test]
    fn test_json_roundtrip_into_other_profile() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, 300, "chores", 10);
        SettingsService::new(&storage, "Default").set_goal(999).unwrap();

        let mut output = Vec::new();
        export_profile_json(&storage, "Default", &mut output, true).unwrap();
        let json = String::from_utf8(output).unwrap();

        let summary = import_profile_json(&storage, "Kid", &json).unwrap();
        assert_eq!(summary.imported, 1);
        assert!(summary.settings_merged);
        assert!(summary.repairs.is_clean());

        let kid = storage.profiles.load("Kid").unwrap();
        let original = storage.profiles.load("Default").unwrap();
        assert_eq!(kid.transactions, original.transactions);
        assert_eq!(kid.settings.goal, 999);
    }

    #[test]
    fn test_import_bare_document_replaces_transactions() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, 300, "chores", 10);
        SettingsService::new(&storage, "Default").set_dark_mode(true).unwrap();

        let payload = r#"{
            "transactions": [
                {"date": "2025-02-01", "amount": 20, "source": "ads"},
                {"date": "2025-02-02", "amount": "-5", "source": "box"},
                {"amount": 1}
            ],
            "settings": {"goal": 40}
        }"#;

        let summary = import_profile_json(&storage, "Default", payload).unwrap();
        assert_eq!(summary.imported, 2);
        assert_eq!(summary.repairs.dropped_transactions, 1);

        let profile = storage.profiles.load("Default").unwrap();
        let sources: Vec<_> = profile.transactions.iter().map(|t| t.source.as_str()).collect();
        assert_eq!(sources, vec!["ads", "box"]);
        assert_eq!(profile.settings.goal, 40);
        assert!(profile.settings.dark_mode);
    }

    #[test]
    fn test_import_settings_only_keeps_transactions() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, 300, "chores", 10);

        import_profile_json(&storage, "Default", r#"{"settings": {"dark_mode": true}}"#).unwrap();

        let profile = storage.profiles.load("Default").unwrap();
        assert_eq!(profile.transactions.len(), 1);
        assert!(profile.settings.dark_mode);
    }

    #[test]
    fn test_import_rejects_bad_payloads() {
        let (_temp_dir, storage) = create_test_storage();

        for payload in [
            "not json",
            "[1, 2]",
            r#"{"other": 1}"#,
            r#"{"transactions": "none"}"#,
            r#"{"settings": 5}"#,
            r#"{"schema_version": "9.9.9", "transactions": []}"#,
        ] {
            let err = import_profile_json(&storage, "Default", payload).unwrap_err();
            assert!(matches!(err, CoinError::Import(_)), "accepted {}", payload);
        }
    }

    #[test]
    fn test_import_rejects_overflowing_balance() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, 10, "chores", 1);

        let payload = format!(
            r#"{{"transactions": [
                {{"date": "2025-01-10", "amount": {}, "source": "jackpot"}},
                {{"date": "2025-01-11", "amount": 1, "source": "one more"}}
            ]}}"#,
            i64::MAX
        );
        let err = import_profile_json(&storage, "Default", &payload).unwrap_err();
        assert!(err.is_validation());

        let profile = storage.profiles.load("Default").unwrap();
        assert_eq!(profile.transactions.len(), 1);
        assert_eq!(profile.transactions[0].source, "chores");
    }
}
