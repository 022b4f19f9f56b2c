use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

#[derive(Parser)]
#[command(name = "rbxtask")]
#[command(about = "RBX Task - earn coins through daily tasks, streaks and achievements")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show balance, rank, streak and today's progress
    Status,

    /// List all tasks with their current state
    Tasks,

    /// Mark a task as completed
    Complete {
        /// Task id, e.g. daily_checkin
        task: String,
    },

    /// Claim a completed task's reward
    Claim {
        /// Task id, e.g. daily_checkin
        task: String,
    },

    /// Spin the reward wheel
    Spin,

    /// Show the 7-day login bonus, or claim today's reward
    Daily {
        /// Claim today's reward
        #[arg(long)]
        claim: bool,
    },

    /// Withdraw coins as cash-out value
    Withdraw {
        /// Amount in coins; defaults to the largest available multiple of 1000
        #[arg(long)]
        coins: Option<u64>,
    },

    /// Show the transaction history, newest first
    History {
        /// Number of entries to show
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// List achievements
    Achievements,

    /// Show or edit the profile
    Profile {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },

    /// Delete the local snapshot and start fresh
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Status) | None => cli::status::status_command()?,
        Some(Commands::Tasks) => cli::earn::tasks_command()?,
        Some(Commands::Complete { task }) => cli::earn::complete_command(&task)?,
        Some(Commands::Claim { task }) => cli::earn::claim_command(&task)?,
        Some(Commands::Spin) => cli::earn::spin_command()?,
        Some(Commands::Daily { claim }) => cli::earn::daily_command(claim)?,
        Some(Commands::Withdraw { coins }) => cli::wallet::withdraw_command(coins)?,
        Some(Commands::History { limit }) => cli::wallet::history_command(limit)?,
        Some(Commands::Achievements) => cli::status::achievements_command()?,
        Some(Commands::Profile { username, image }) => {
            cli::profile::profile_command(username.as_deref(), image.as_deref())?
        }
        Some(Commands::Reset { force }) => cli::profile::reset_command(force)?,
    }

    Ok(())
}
