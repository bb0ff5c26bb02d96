use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "edutrack", version, about = "EduTrack CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a field validator
    Validate {
        #[command(subcommand)]
        action: commands::validate::ValidateAction,
    },
    /// XP rewards and the level curve
    Xp {
        #[command(subcommand)]
        action: commands::xp::XpAction,
    },
    /// Task list, weekly progress and completion toggles
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Month grid and daily agenda
    Calendar {
        #[command(subcommand)]
        action: commands::calendar::CalendarAction,
    },
    /// Notification inbox
    Notification {
        #[command(subcommand)]
        action: commands::notification::NotificationAction,
    },
    /// Signed-in user profile
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("EDUTRACK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Validate { action } => commands::validate::run(action),
        Commands::Xp { action } => commands::xp::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Calendar { action } => commands::calendar::run(action),
        Commands::Notification { action } => commands::notification::run(action),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
