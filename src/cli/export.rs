//! CLI commands for export and import

use std::fs;
use std::path::Path;

use clap::ValueEnum;

use super::AppContext;
use crate::error::{CoinError, CoinResult};
use crate::export::{csv, json, yaml};

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON (transactions and settings; importable)
    Json,
    /// YAML (same content, human-readable)
    Yaml,
    /// CSV (transactions only)
    Csv,
}

/// Write the current profile to `output`
///
/// The export is rendered in memory first so a failure leaves `output`
/// untouched.
pub fn handle_export(
    ctx: &AppContext,
    output: &Path,
    format: ExportFormat,
    pretty: bool,
) -> CoinResult<()> {
    let mut buffer = Vec::new();

    match format {
        ExportFormat::Json => {
            json::export_profile_json(&ctx.storage, &ctx.profile, &mut buffer, pretty)?
        }
        ExportFormat::Yaml => yaml::export_profile_yaml(&ctx.storage, &ctx.profile, &mut buffer)?,
        ExportFormat::Csv => csv::export_transactions_csv(&ctx.storage, &ctx.profile, &mut buffer)?,
    }

    fs::write(output, &buffer).map_err(|e| {
        CoinError::Export(format!(
            "Failed to write file {}: {}",
            output.display(),
            e
        ))
    })?;

    println!(
        "Exported profile '{}' to: {}",
        ctx.profile,
        output.display()
    );
    Ok(())
}

/// Load a JSON export (or bare document) into the current profile
pub fn handle_import(ctx: &AppContext, input: &Path) -> CoinResult<()> {
    let contents = fs::read_to_string(input).map_err(|e| {
        CoinError::Import(format!("Failed to read {}: {}", input.display(), e))
    })?;

    let summary = json::import_profile_json(&ctx.storage, &ctx.profile, &contents)?;

    println!(
        "Imported {} transactions into profile '{}'",
        summary.imported, ctx.profile
    );
    if summary.settings_merged {
        println!("Settings merged");
    }
    if !summary.repairs.is_clean() {
        println!(
            "Skipped {} invalid transactions, fixed {} entries",
            summary.repairs.dropped_transactions,
            summary.repairs.fixed_transactions + summary.repairs.fixed_settings
        );
    }
    Ok(())
}
