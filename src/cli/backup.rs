//! Backup CLI commands

use clap::Subcommand;

use super::AppContext;
use crate::backup::BackupManager;
use crate::error::CoinResult;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Back up the current profile
    Create,

    /// List backups of the current profile
    List {
        /// Include backups of every profile
        #[arg(short, long)]
        all: bool,
    },

    /// Restore the current profile from a backup
    Restore {
        /// Backup filename or path ('latest' for the most recent)
        backup: String,
    },
}

/// Handle a `backup` subcommand
pub fn handle_backup_command(ctx: &AppContext, cmd: BackupCommands) -> CoinResult<()> {
    let manager = BackupManager::new(&ctx.storage);

    match cmd {
        BackupCommands::Create => {
            let info = manager.create_backup(&ctx.profile)?;
            println!("Backup created: {}", info.filename);
            println!("Location: {}", info.path.display());
        }

        BackupCommands::List { all } => {
            let profile = (!all).then_some(ctx.profile.as_str());
            let backups = manager.list_backups(profile)?;

            if backups.is_empty() {
                println!("No backups found.");
                println!("Create one with: coin backup create");
                return Ok(());
            }

            for backup in &backups {
                println!(
                    "{}  {:<20} {:>8} KB  {}",
                    backup.created_at.format("%Y-%m-%d %H:%M:%S"),
                    backup.profile,
                    (backup.size_bytes + 1023) / 1024,
                    backup.filename
                );
            }
            println!();
            println!("Directory: {}", manager.backup_dir().display());
        }

        BackupCommands::Restore { backup } => {
            let summary = manager.restore_backup(&ctx.profile, &backup)?;
            println!(
                "Restored {} transactions into profile '{}'",
                summary.imported, ctx.profile
            );
        }
    }

    Ok(())
}
