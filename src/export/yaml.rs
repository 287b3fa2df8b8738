//! YAML export
//!
//! Same structure as the JSON export, for people who'd rather read it.

use std::io::Write;

use crate::error::{CoinError, CoinResult};
use crate::export::json::ProfileExport;
use crate::storage::Storage;

/// Export a profile to YAML with a short header comment
pub fn export_profile_yaml<W: Write>(
    storage: &Storage,
    profile_name: &str,
    writer: &mut W,
) -> CoinResult<()> {
    let export = ProfileExport::from_storage(storage, profile_name)?;
    let export_err = |e: std::io::Error| CoinError::Export(e.to_string());

    writeln!(writer, "# CoinTracker profile export: {}", export.profile_name).map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| CoinError::Export(e.to_string()))?;

    Ok(())
}
