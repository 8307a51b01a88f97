#![warn(missing_docs)]

//! Entry point for the `moveit` binary.

mod cli;
mod commands;
mod error;

use std::{io, process};

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, registry};
use x11_winops::X11Ops;

use crate::{cli::Cli, error::Result};

fn main() {
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, load the config, and dispatch to the chosen command.
fn run() -> Result<()> {
    let Cli {
        log,
        config_path,
        command,
    } = Cli::parse();
    let log_spec = log.spec();
    let env_filter = logging::env_filter_from_spec(&log_spec);
    registry()
        .with(env_filter)
        .with(fmt::layer().without_time().with_writer(io::stderr))
        .try_init()
        .ok();

    let cfg = config::load(config_path.as_deref())?;
    let ops = X11Ops::connect()?;
    let stdout = io::stdout();
    commands::run(&ops, &cfg, &command, &mut stdout.lock())
}
