use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;
mod config;
mod narrate;

use config::CliArgs;
use narrate::Narrator;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(&args.log_level);

    let pause = Duration::from_millis(args.pause_ms);
    let mut narrator = Narrator::new(io::stdout().lock(), args.format, pause);
    commands::run(args.command, &mut narrator)
}

/// Logs go to stderr so stdout stays a clean narration or JSON stream.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}
