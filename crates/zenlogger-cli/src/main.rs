use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zenlogger_core::Config;

mod bell;
mod commands;

#[derive(Parser)]
#[command(name = "zenlogger", version, about = "Zen Logger meditation timer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the session timer
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Session log
    Sessions {
        #[command(subcommand)]
        action: commands::sessions::SessionsAction,
    },
    /// User preferences
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Export or restore the whole store
    Backup {
        #[command(subcommand)]
        action: commands::backup::BackupAction,
    },
    /// Session statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    init_logging(&config);

    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action, &config).await,
        Commands::Sessions { action } => commands::sessions::run(action, &config).await,
        Commands::Settings { action } => commands::settings::run(action, &config).await,
        Commands::Backup { action } => commands::backup::run(action, &config).await,
        Commands::Stats { action } => commands::stats::run(action, &config).await,
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
