use anyhow::{Context, Result};
use promise_view::{config::Config, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    logger::init(&config.logging)?;
    log::info!(
        "Starting demo: request settles to {} after {}ms",
        config.demo.outcome,
        config.demo.delay_ms
    );

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
