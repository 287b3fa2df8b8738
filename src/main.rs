use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use coin_tracker::cli::{
    handle_add, handle_analytics, handle_backup_command, handle_export, handle_goal_command,
    handle_history, handle_import, handle_profile_command, handle_quick,
    handle_quick_action_command, handle_sources, handle_summary, handle_theme_command,
    handle_transaction_command, AppContext, BackupCommands, ExportFormat, FilterArgs,
    GoalCommands, ProfileCommands, QuickActionCommands, ThemeCommands, TransactionCommands,
};
use coin_tracker::config::paths::{CoinPaths, DATA_DIR_ENV};
use coin_tracker::logging::{init_tracing, LOG_ENV};

#[derive(Parser)]
#[command(
    name = "coin",
    author = "Kaylee Beyene",
    version,
    about = "Track coins earned and spent against a savings goal",
    long_about = "CoinTracker records gains and spends against a virtual coin balance, \
                  tracks progress toward a savings goal, and shows history and \
                  analytics, with separate profiles for separate savers."
)]
struct Cli {
    /// Use this profile for one command without switching
    #[arg(short, long, global = true)]
    profile: Option<String>,

    /// Data directory (defaults to the platform config directory)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Log filter directive, e.g. "coin_tracker=debug"
    #[arg(long, global = true, env = LOG_ENV)]
    log: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record coins earned
    Add {
        amount: i64,
        source: String,
        /// When it happened (defaults to now)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Record coins spent
    Spend {
        amount: i64,
        source: String,
        /// When it happened (defaults to now)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Apply a quick action by label or list number
    Quick {
        action: String,
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "transaction")]
    Txn(TransactionCommands),

    /// Show recent transactions
    History {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Balance, goal progress and recent earnings
    Summary {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Earnings and spending breakdowns and balance timeline
    Analytics {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
        /// Show only the N largest sources in each breakdown
        #[arg(long)]
        top: Option<usize>,
    },

    /// List every source used so far
    Sources,

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Theme preference commands
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Quick action management commands
    #[command(subcommand, name = "quick-action")]
    QuickAction(QuickActionCommands),

    /// Profile management commands
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Export the current profile
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Import a JSON export into the current profile
    Import {
        /// JSON file to read
        input: PathBuf,
    },

    /// Backup commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir.clone() {
        Some(dir) => CoinPaths::with_base_dir(dir),
        None => CoinPaths::new()?,
    };
    let mut ctx = AppContext::open(paths, cli.profile.as_deref())?;
    init_tracing(
        cli.log.as_deref(),
        cli.verbose,
        ctx.config.log_level.as_deref(),
    );

    match cli.command {
        Some(Commands::Add {
            amount,
            source,
            date,
        }) => handle_add(&ctx, amount, source, date, false)?,
        Some(Commands::Spend {
            amount,
            source,
            date,
        }) => handle_add(&ctx, amount, source, date, true)?,
        Some(Commands::Quick { action, date }) => handle_quick(&ctx, &action, date)?,
        Some(Commands::Txn(cmd)) => handle_transaction_command(&ctx, cmd)?,
        Some(Commands::History { filter }) => handle_history(&ctx, filter)?,
        Some(Commands::Summary { json }) => handle_summary(&ctx, json)?,
        Some(Commands::Analytics { json, top }) => handle_analytics(&ctx, json, top)?,
        Some(Commands::Sources) => handle_sources(&ctx)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&ctx, cmd)?,
        Some(Commands::Theme(cmd)) => handle_theme_command(&ctx, cmd)?,
        Some(Commands::QuickAction(cmd)) => handle_quick_action_command(&ctx, cmd)?,
        Some(Commands::Profile(cmd)) => handle_profile_command(&mut ctx, cmd)?,
        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => handle_export(&ctx, &output, format, pretty)?,
        Some(Commands::Import { input }) => handle_import(&ctx, &input)?,
        Some(Commands::Backup(cmd)) => handle_backup_command(&ctx, cmd)?,
        Some(Commands::Config) => {
            let paths = ctx.storage.paths();
            println!("CoinTracker Configuration");
            println!("=========================");
            println!("Data directory:     {}", paths.base_dir().display());
            println!("Config file:        {}", paths.config_file().display());
            println!("Profiles directory: {}", paths.profiles_dir().display());
            println!("Backups directory:  {}", paths.backups_dir().display());
            println!();
            println!("Settings:");
            println!("  Current profile: {}", ctx.config.current_profile);
            println!("  Date format:     {}", ctx.config.date_format);
            println!("  History limit:   {}", ctx.config.history_limit);
            println!(
                "  Log level:       {}",
                ctx.config.log_level.as_deref().unwrap_or("(default)")
            );
        }
        None => {
            println!("CoinTracker - coins earned, coins spent, goal in sight");
            println!();
            println!("Run 'coin --help' for usage information.");
            println!("Run 'coin summary' to see where you stand.");
        }
    }

    Ok(())
}
