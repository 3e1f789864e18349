#![allow(dead_code, unused_imports)]

mod cli;
mod application;
mod domain;
mod data;
mod infra;

use anyhow::Result;
use cli::Cli;
use clap::Parser;
use infra::logging::{LogContext, DEFAULT_LOG_DIR};

fn main() -> Result<()> {
    // The guard keeps the log file open for the whole run and
    // syncs it on the way out.
    let _log_context = LogContext::init(DEFAULT_LOG_DIR)?;

    let cli = Cli::parse();
    cli.run()
}
