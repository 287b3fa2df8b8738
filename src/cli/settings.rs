//! Goal and theme CLI commands

use clap::{Subcommand, ValueEnum};

use super::AppContext;
use crate::display::format_coins;
use crate::error::CoinResult;
use crate::services::{SettingsService, ThemeService};

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Show the savings goal
    Show,
    /// Set the savings goal
    Set {
        /// Target balance (zero or more)
        #[arg(allow_hyphen_values = true)]
        goal: i64,
    },
}

/// Theme choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Theme subcommands
#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Show the current theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Set the theme
    Set {
        #[arg(value_enum)]
        theme: Theme,
    },
}

/// Handle a `goal` subcommand
pub fn handle_goal_command(ctx: &AppContext, cmd: GoalCommands) -> CoinResult<()> {
    let service = SettingsService::new(&ctx.storage, &ctx.profile);

    match cmd {
        GoalCommands::Show => {
            println!("Goal: {}", format_coins(service.get()?.goal));
        }
        GoalCommands::Set { goal } => {
            let settings = service.set_goal(goal)?;
            println!("Goal set to {}", format_coins(settings.goal));
        }
    }

    Ok(())
}

/// Handle a `theme` subcommand
pub fn handle_theme_command(ctx: &AppContext, cmd: ThemeCommands) -> CoinResult<()> {
    let mut view = SettingsService::new(&ctx.storage, &ctx.profile).get()?;
    let themes = ThemeService::new(&ctx.storage, &ctx.profile);

    match cmd {
        ThemeCommands::Show => {}
        ThemeCommands::Toggle => {
            themes.toggle(&mut view)?;
        }
        ThemeCommands::Set { theme } => {
            themes.set(&mut view, theme == Theme::Dark)?;
        }
    }

    println!("Theme: {}", Theme::from_dark_mode(view.dark_mode).label());
    Ok(())
}
