//! Command-line tool for the application bootstrap configuration.
//!
//! `appcfg render` prints the configuration that would be handed to the
//! service container, resolved from the current environment. `appcfg check`
//! validates the environment bindings without printing secrets. Both exit
//! non-zero when the configuration cannot be built, with the same error an
//! application boot would abort with.

use anyhow::{Context, Result};
use appcfg::{AppConfig, ProcessEnv};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "appcfg")]
#[command(version, about = "Application bootstrap configuration tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved configuration
    Render {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Validate the environment bindings without printing credentials
    Check,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

/// Initialize tracing/logging.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();
}

fn main() -> Result<()> {
    // Local runs may keep bindings in a .env file; the platform sets them
    // directly.
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render { format } => render(format),
        Commands::Check => check(),
    }
}

fn render(format: Format) -> Result<()> {
    let config = AppConfig::load(&ProcessEnv)
        .context("failed to resolve application configuration")?;

    let rendered = match format {
        Format::Json => serde_json::to_string_pretty(&config)?,
        Format::Yaml => serde_yaml::to_string(&config)?,
    };
    println!("{rendered}");
    Ok(())
}

fn check() -> Result<()> {
    let config = AppConfig::load(&ProcessEnv)
        .context("environment bindings are incomplete")?;

    tracing::info!(
        hostname = %config.db.hostname,
        database = %config.db.database,
        "database binding resolved"
    );

    let oauth = [
        ("facebook_client_id", &config.social_auth.facebook_client_id),
        ("facebook_secret", &config.social_auth.facebook_secret),
        ("twitter_consumer_key", &config.social_auth.twitter_consumer_key),
        (
            "twitter_consumer_secret",
            &config.social_auth.twitter_consumer_secret,
        ),
    ];
    for (name, value) in oauth {
        if value.is_none() {
            tracing::warn!(variable = name, "social-auth variable is not set");
        }
    }

    println!(
        "configuration OK: database {} at {}",
        config.db.database, config.db.hostname
    );
    Ok(())
}
