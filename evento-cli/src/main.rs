mod commands;
mod render;
mod validate;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use evento_core::EventStatus;
use evento_core::config::EventoConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "evento")]
#[command(about = "Register, browse and join local events")]
struct Cli {
    /// Event file to use instead of the configured one
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Session,
    /// Print stored events in schedule order
    List {
        /// Only show events with this status
        #[arg(short, long, value_enum)]
        status: Option<StatusFilter>,
    },
    /// Register an event without the interactive menu
    New {
        /// Event name (at least 3 characters)
        name: String,

        /// Address (at least 5 characters)
        #[arg(short, long)]
        address: String,

        /// Category: party, show, sport, conference, workshop or other
        #[arg(short, long)]
        category: String,

        /// Date and time as dd/MM/yyyy HH:mm
        #[arg(long)]
        at: String,

        /// Description (at least 10 characters)
        #[arg(short, long)]
        description: String,
    },
    /// Show configuration paths, optionally changing the event file
    Config {
        /// Persist a new event file location
        #[arg(long)]
        set_data_file: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusFilter {
    Scheduled,
    InProgress,
    Finished,
}

impl From<StatusFilter> for EventStatus {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::Scheduled => EventStatus::Scheduled,
            StatusFilter::InProgress => EventStatus::InProgress,
            StatusFilter::Finished => EventStatus::Finished,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = EventoConfig::load()?;
    init_logger(&config.log_level)?;

    if let Some(data_file) = cli.data_file {
        config.data_file = data_file;
    }

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => commands::session::run(config.store()),
        Commands::List { status } => {
            commands::list::run(&config.store(), status.map(Into::into), commands::now())
        }
        Commands::New {
            name,
            address,
            category,
            at,
            description,
        } => commands::new::run(
            &config.store(),
            commands::new::NewEvent {
                name,
                address,
                category,
                at,
                description,
            },
            commands::now(),
        ),
        Commands::Config { set_data_file } => commands::config::run(config, set_data_file),
    }
}

/// RUST_LOG wins over the configured level. Logs go to stderr so menus stay readable.
fn init_logger(default_level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into());

    let subscriber = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(subscriber)
        .with(env_filter)
        .try_init()?;

    Ok(())
}
