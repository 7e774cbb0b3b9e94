//! Command-line interface of the `daylog` demonstration binary.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::LogLevel;

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "daylog",
    about = "Write leveled messages to a day-rotated log file",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Show daylog's own diagnostics (rotation, writer thread) on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Config file (default: daylog.toml in the documents directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for CurrentLog.txt and its backups
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Minimum level written (none, error, warning, info, debug, verbose)
    #[arg(short, long, global = true)]
    pub level: Option<LogLevel>,

    /// Number of backups kept on rotation (clamped to 1..=5)
    #[arg(short, long, global = true)]
    pub backups: Option<usize>,

    /// Do not echo lines to stdout
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write one message at the given level
    Log(LogOpts),
    /// Write one message per level, most severe first
    Demo,
    /// Write messages concurrently from several threads
    Burst(BurstOpts),
    /// Write a heartbeat line periodically until interrupted
    Heartbeat(HeartbeatOpts),
    /// List the current log file and its backups
    Files,
    /// Print version information
    Version,
}

/// Options for the `log` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct LogOpts {
    /// Level of the message
    #[arg(value_name = "LEVEL")]
    pub severity: LogLevel,

    /// Message text; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}

/// Options for the `burst` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct BurstOpts {
    /// Number of concurrent writers
    #[arg(short, long, default_value_t = 4)]
    pub threads: usize,

    /// Messages written by each writer
    #[arg(short = 'n', long, default_value_t = 100)]
    pub count: usize,
}

/// Options for the `heartbeat` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct HeartbeatOpts {
    /// Milliseconds between heartbeats
    #[arg(short, long, default_value_t = 1000)]
    pub interval_ms: u64,

    /// Stop after this many heartbeats (default: run until Ctrl-C)
    #[arg(long)]
    pub limit: Option<u64>,
}
