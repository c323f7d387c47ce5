//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Vitals using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Vitals - Health Export ETL Tool
#[derive(Parser, Debug)]
#[command(name = "vitals")]
#[command(version, about, long_about = None)]
#[command(author = "Vitals Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "vitals.toml", env = "VITALS_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "VITALS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import a health-data export document into PostgreSQL
    Import(commands::import::ImportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
