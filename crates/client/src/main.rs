//! tilequest client binary.
//!
//! Loads content from the data directory, plays a scripted run of the
//! configured level without a window and prints what happened.
//!
//! # Examples
//!
//! ```bash
//! TILEQUEST_SEED=7 TILEQUEST_FRAMES=600 cargo run -p tilequest
//! RUST_LOG=battle=debug,info cargo run -p tilequest
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tilequest::{ClientConfig, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging
    let log_dir = config
        .log_dir
        .clone()
        .unwrap_or_else(logging::default_log_dir);
    let started = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let _guard = logging::setup_logging(&log_dir, &format!("run_{}", started))?;

    tracing::info!("Starting tilequest");
    tracing::info!("Data directory: {}", config.data_dir.display());

    // 3. Play
    let summary = tilequest::run(&config)?;

    println!("seed            {}", summary.seed);
    println!(
        "frames          {} ({} exploring, {} in battle)",
        summary.frames, summary.exploration_frames, summary.battle_frames
    );
    println!("encounters      {}", summary.encounters);
    println!(
        "battles         {} won, {} lost, {} fled ({} failed escapes)",
        summary.victories, summary.defeats, summary.escapes, summary.failed_escapes
    );
    println!("dialogues       {}", summary.dialogues_opened);
    println!(
        "transparency    {} sorts, {} fell back to distance order",
        summary.transparency_sorts, summary.fallback_sorts
    );
    println!("draw calls      {}", summary.draw_calls);
    println!(
        "player          level {} at ({:.1}, {:.1})",
        summary.player_level, summary.final_position.x, summary.final_position.y
    );

    tracing::info!("Run complete");
    Ok(())
}
