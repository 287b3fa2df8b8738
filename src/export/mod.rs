//! Export module for CoinTracker
//!
//! Exports one profile at a time:
//! - CSV: transactions with running balances (spreadsheet-compatible)
//! - JSON: transactions plus settings, also accepted back by import
//! - YAML: the JSON structure in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_transactions_csv;
pub use json::{
    export_profile_json, import_profile_json, ImportSummary, ProfileExport, EXPORT_SCHEMA_VERSION,
};
pub use yaml::export_profile_yaml;
