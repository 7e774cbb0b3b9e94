//! `daylog` command-line entry point.

use anyhow::Result;
use clap::Parser;

use daylog::cli::{Cli, Command};
use daylog::commands;
use daylog::logging;

fn main() -> Result<()> {
    let args = Cli::parse();
    logging::init_subscriber(args.verbose);

    if matches!(args.command, Command::Version) {
        return commands::version::run(&mut std::io::stdout());
    }

    let log = commands::start_logger(&args.global)?;
    let result = match &args.command {
        Command::Log(opts) => commands::log::run(opts, &log),
        Command::Demo => commands::demo::run(&log),
        Command::Burst(opts) => commands::burst::run(opts, &log),
        Command::Heartbeat(opts) => commands::heartbeat::run(opts, &log),
        Command::Files => commands::files::run(log.paths(), &mut std::io::stdout()),
        Command::Version => Ok(()),
    };

    log.flush_and_wait()?;
    result
}
