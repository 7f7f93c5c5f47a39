//! # storefront
//!
//! Command-line entry point. See [`storefront_cli::config::USAGE`].

use std::env;

use storefront_cli::clock::SystemClock;
use storefront_cli::config::{CliConfig, Command, USAGE};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut config = CliConfig::load()?;
    if config.apply_args(env::args().skip(1))? == Command::Help {
        println!("{USAGE}");
        return Ok(());
    }

    info!(
        catalog = %config.catalog_path,
        currency = config.currency.code,
        fixed_now = config.now.is_some(),
        "Configuration loaded"
    );

    // anyhow prints the error chain once on exit
    let output = storefront_cli::run(&config, &SystemClock)?;
    println!("{output}");
    Ok(())
}
