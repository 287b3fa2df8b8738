//! Profile CLI commands

use clap::Subcommand;

use super::AppContext;
use crate::display::format_profile_list;
use crate::error::CoinResult;
use crate::services::ProfileService;

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// List profiles, marking the current one
    List,
    /// Show the current profile
    Current,
    /// Create a profile and switch to it
    Create { name: String },
    /// Switch to another profile
    Switch { name: String },
    /// Delete a profile (not Default, not the current one)
    Delete { name: String },
}

/// Handle a `profile` subcommand
///
/// Changes to the current profile are written to the config.
pub fn handle_profile_command(ctx: &mut AppContext, cmd: ProfileCommands) -> CoinResult<()> {
    let service = ProfileService::new(&ctx.storage);

    match cmd {
        ProfileCommands::List => {
            let current = service.current(&ctx.config);
            print!("{}", format_profile_list(&service.list()?, &current));
        }
        ProfileCommands::Current => {
            println!("{}", service.current(&ctx.config));
        }
        ProfileCommands::Create { name } => {
            service.create(&mut ctx.config, &name)?;
            println!("Created profile '{}' and switched to it", name);
        }
        ProfileCommands::Switch { name } => {
            service.switch(&mut ctx.config, &name)?;
            println!("Switched to profile '{}'", name);
        }
        ProfileCommands::Delete { name } => {
            service.delete(&ctx.config, &name)?;
            println!("Deleted profile '{}'", name);
        }
    }

    Ok(())
}
