// Converts the delivery app's SVG assets to PNG.
// Takes no arguments; see ConverterConfig for the environment variables it reads.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use asset_converter::{ConverterConfig, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = ConverterConfig::from_env().context("Invalid configuration")?;

    // Diagnostics go to stderr so stdout carries only the status lines
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .compact();

    subscriber.init();

    info!("=== Asset conversion starting ===");

    let summary = run(&config)
        .await
        .with_context(|| format!("Conversion failed in {}", config.assets_dir.display()))?;

    info!(
        "=== Asset conversion finished ({} converted, {} skipped) ===",
        summary.converted(),
        summary.skipped()
    );
    Ok(())
}
