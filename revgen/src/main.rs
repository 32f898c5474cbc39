mod commands;
mod language;
mod ops;
mod reports;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, prelude::*};

use crate::commands::Cli;

/// Environment variable holding the default log filter.
const LOG_ENV_VAR: &str = "REVGEN_LOG";

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    cli.run()
}

fn init_tracing(log: Option<&str>) {
    let builder = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV_VAR);
    let filter = match log {
        Some(directives) => builder.parse_lossy(directives),
        None => builder.from_env_lossy(),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
