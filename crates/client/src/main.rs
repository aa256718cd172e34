//! Duel client binary.
//!
//! Runs a scripted series of encounters against the duel runtime and prints
//! the combat log to stdout.
//!
//! ```bash
//! # Default run: three enemies, well-timed dodges
//! cargo run -p duel-client
//!
//! # React too early and take every hit, with original pacing
//! DUEL_REACTION_AT=0.3 DUEL_PACED=true cargo run -p duel-client
//! ```

use anyhow::{Context, Result};
use duel_client::{ClientConfig, Demo, logging};
use duel_runtime::{Progress, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let client_config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(client_config.log_dir.as_deref())?;

    let runtime_config = RuntimeConfig::from_env().context("failed to load runtime config")?;

    tracing::info!("Starting duel client");
    tracing::info!("Encounters: {}", client_config.script.encounters);
    tracing::info!("Tick interval: {:?}", runtime_config.tick_interval);
    tracing::debug!(combat = ?runtime_config.combat, "Combat config");

    let progress = Progress::try_new(runtime_config.player_max_hp)?;
    let demo = Demo::new(
        runtime_config.combat,
        runtime_config.host,
        progress,
        client_config.script.clone(),
    );

    let summary = demo.run(runtime_config.tick_interval).await;

    tracing::info!(
        status = ?summary.status,
        victories = summary.progress.victories(),
        defeats = summary.progress.defeats(),
        player_hp = summary.progress.player().current_hp(),
        ticks = summary.ticks,
        "Run finished"
    );

    Ok(())
}
