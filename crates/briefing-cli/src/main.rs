//! Daily Briefing CLI
//!
//! Prints a one-sentence briefing for a user: greeting, current weather in
//! the requested city and the title of their latest post.

mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use briefing::{
    BriefingAssembler, BriefingRequest, ConfigError, ConfigReader, JsonPlaceholderClient,
    OpenWeatherClient, WEATHER_SERVICE,
};

#[derive(Parser)]
#[command(name = "briefing")]
#[command(
    about = "Generate a daily briefing for a user, including weather and recent posts",
    long_about = None
)]
#[command(version, arg_required_else_help = true)]
struct Cli {
    /// Config file (defaults to ./config.toml, then the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log upstream calls to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and print a daily briefing for a user and city
    GetBriefing {
        /// The ID of the user to generate the briefing for
        #[arg(allow_negative_numbers = true)]
        user_id: i64,
        /// The city for the weather report (e.g. "London")
        #[arg(short, long)]
        city: String,
    },

    /// Check that the weather API key can be resolved
    CheckConfig,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    init_tracing(cli.verbose);

    let config_path = config::resolve_config_path(cli.config);

    let result = match cli.command {
        Commands::GetBriefing { user_id, city } => {
            cmd_get_briefing(user_id, city, config_path).await
        }
        Commands::CheckConfig => cmd_check_config(config_path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_line(&err).red());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Single-line rendering of a command failure
fn error_line(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ConfigError>() {
        Some(config_err) => format!("Configuration Error: {config_err}"),
        None => format!("Error: {err}"),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_get_briefing(user_id: i64, city: String, config_path: PathBuf) -> Result<()> {
    println!("Requesting briefing for User ID: {user_id}, City: {city}...");

    let request = BriefingRequest::new(user_id, city)?;

    let config = ConfigReader::load(config_path)?;
    let assembler = BriefingAssembler::new(
        Arc::new(JsonPlaceholderClient::from_config(&config)?),
        Arc::new(OpenWeatherClient::from_config(&config)?),
    );

    let briefing = assembler.assemble(&request).await?;

    println!("\n{}", "--- Your Briefing ---".cyan().bold());
    println!("{briefing}");

    Ok(())
}

fn cmd_check_config(config_path: PathBuf) -> Result<()> {
    println!("Checking configuration in {}...", config_path.display());

    ConfigReader::load(config_path)?.get_api_key(WEATHER_SERVICE)?;

    println!("{}", "✅ Configuration found and seems valid.".green());
    Ok(())
}
