use anyhow::Result;
use clap::{Parser, Subcommand};
use newsdesk::config::LoggingConfig;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(
    name = "newsdesk",
    version,
    about = "Search the Guardian for recent articles and list them",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json), overrides `logging.format`
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and list articles for the configured topic
    Fetch {
        /// Topic keyword (overrides preferences)
        #[arg(short, long)]
        topic: Option<String>,

        /// Sort order: newest, oldest, relevance (overrides preferences)
        #[arg(short, long)]
        order_by: Option<String>,

        /// Print articles as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Parse a saved search response body
    Parse {
        /// Response file
        input: PathBuf,

        /// Print articles as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Show effective preferences and the request that fetch would send
    Settings,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Warnings raised while reading configuration go to a plain stderr logger
    let bootstrap = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, || {
        commands::load_config(cli.config.as_deref())
    })?;

    // Initialize tracing/logging
    setup_tracing(&config.logging, cli.log_format.as_deref(), cli.verbose)?;

    tracing::info!("newsdesk starting");

    match cli.command {
        Commands::Fetch {
            topic,
            order_by,
            json,
        } => {
            tracing::info!(
                topic = ?topic,
                order_by = ?order_by,
                json = %json,
                "Starting fetch command"
            );
            commands::fetch(config, topic, order_by, json).await?;
        }

        Commands::Parse { input, json } => {
            tracing::info!(input = %input.display(), json = %json, "Starting parse command");
            commands::parse(&input, json)?;
        }

        Commands::Settings => {
            commands::settings(&config)?;
        }
    }

    tracing::info!("newsdesk completed successfully");
    Ok(())
}

fn setup_tracing(logging: &LoggingConfig, format: Option<&str>, verbose: bool) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_new(logging.filter_directive(verbose))?;

    let json = match format {
        Some(format) => format.eq_ignore_ascii_case("json"),
        None => logging.is_json(),
    };

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}
