//! Trade journal CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::commands::Session;
use cli::{Cli, Commands};
use tradelog_config::load_config;
use tradelog_monitor::setup_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {:?}", cli.config))?;

    // Setup logging
    let log_level = match cli.log_level {
        Some(cli::LogLevel::Trace) => "trace",
        Some(cli::LogLevel::Debug) => "debug",
        Some(cli::LogLevel::Info) => "info",
        Some(cli::LogLevel::Warn) => "warn",
        Some(cli::LogLevel::Error) => "error",
        None => config.logging.level.as_str(),
    };
    let json = cli.json_logs || config.logging.is_json();
    // The dashboard owns the terminal; log to the file only
    let console = !matches!(cli.command, Commands::Dashboard(_));
    let _guard = setup_logging(
        log_level,
        json,
        console,
        config.logging.file.as_deref().map(std::path::Path::new),
    )
    .context("Failed to open log file")?;

    let session = Session::new(config, cli.mode);

    // Execute command
    match cli.command {
        Commands::Init(args) => cli::commands::init::run(args, &session),
        Commands::Add(args) => cli::commands::add::run(args, &session),
        Commands::Show(args) => cli::commands::show::run(args, &session),
        Commands::List => cli::commands::list::run(&session),
        Commands::Export(args) => cli::commands::export::run(args, &session),
        Commands::Clear(args) => cli::commands::clear::run(args, &session),
        Commands::Dashboard(args) => cli::commands::dashboard::run(args, &session),
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config, &session),
    }
}
