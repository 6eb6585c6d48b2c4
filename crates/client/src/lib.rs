//! Headless tilequest client.
//!
//! # Architecture
//!
//! ```text
//! main
//!   ├─→ config     (environment variables)
//!   ├─→ logging    (tracing to stderr and a log file)
//!   └─→ demo       (content loading, frame loop)
//!         ├─→ autopilot  (scripted keys, battle and dialogue choices)
//!         └─→ scene      (sprites and sorted transparent draw calls)
//! ```
pub mod autopilot;
pub mod config;
pub mod demo;
pub mod logging;
pub mod scene;

pub use autopilot::{Autopilot, BattleChoice};
pub use config::ClientConfig;
pub use demo::{PLAYER_NAME, RunSummary, run, simulate};
pub use scene::{FrameStats, Scene};
