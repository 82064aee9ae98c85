//! Command-line interface for the griot binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scheduled AI page-posting bot.
#[derive(Debug, Parser)]
#[command(name = "griot", version, about)]
pub struct Cli {
    /// Path to the TOML configuration file; defaults apply when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Keep history in memory and skip the durable post log
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Operating modes of the bot.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one posting cycle and exit (external-trigger mode)
    Once,
    /// Fire today's remaining scheduled slots in order, then exit
    Serve,
    /// Show today's quota usage and the active topic-repeat window
    Status,
}
