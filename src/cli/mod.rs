//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tradelog_core::TradeMode;

#[derive(Parser)]
#[command(name = "tradelog")]
#[command(author, version, about = "Trade journal with return, drawdown and streak statistics")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "tradelog.toml", global = true)]
    pub config: PathBuf,

    /// Log level (defaults to the configured level)
    #[arg(short, long, global = true)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Journal mode: standard or risk_reward (defaults to the configured mode)
    #[arg(short, long, global = true)]
    pub mode: Option<TradeMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a risk-reward journal with an initial capital and fixed risk
    Init(InitArgs),
    /// Record one trade
    Add(AddArgs),
    /// Print journal statistics
    Show(ShowArgs),
    /// Print recorded trades
    List,
    /// Write the return or capital curve as CSV
    Export(ExportArgs),
    /// Delete the journal history
    Clear(ClearArgs),
    /// Open the interactive dashboard
    Dashboard(DashboardArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Initial capital (prompted when omitted)
    #[arg(long)]
    pub capital: Option<f64>,

    /// Fixed risk amount per trade (prompted when omitted)
    #[arg(long)]
    pub risk: Option<f64>,

    /// Replace an existing risk-reward journal
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct AddArgs {
    /// Return in percent (standard) or risk-reward multiple, 0 for a loss (risk_reward)
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(clap::Args)]
pub struct ShowArgs {
    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,
}

#[derive(clap::Args)]
pub struct ExportArgs {
    /// Destination CSV file
    pub path: PathBuf,
}

#[derive(clap::Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(clap::Args)]
pub struct DashboardArgs {
    /// Screen refresh interval in milliseconds
    #[arg(long, default_value = "250")]
    pub refresh_ms: u64,
}
