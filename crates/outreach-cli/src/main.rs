use clap::{Parser, Subcommand};
use outreach_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "outreach", version, about = "Outreach CLI")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the status progression for one contact
    Progress(commands::progress::ProgressArgs),
    /// Show the status transition table
    Rules(commands::rules::RulesArgs),
    /// Lifecycle status information
    Status {
        #[command(subcommand)]
        action: commands::status::StatusAction,
    },
    /// Summarize a pipeline of contacts
    Summary(commands::summary::SummaryArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging(verbose: bool, config_level: &str) {
    let default_level = if verbose { "debug" } else { config_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    init_logging(cli.verbose, &config.log.level);

    let result = match cli.command {
        Commands::Progress(args) => commands::progress::run(args, &config),
        Commands::Rules(args) => commands::rules::run(args, &config),
        Commands::Status { action } => commands::status::run(action, &config),
        Commands::Summary(args) => commands::summary::run(args, &config),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
