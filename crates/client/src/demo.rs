//! Headless game loop: load content, play a scripted run, report totals.

use anyhow::{Context, Result};
use glam::Vec2;
use tilequest_content::{ContentFactory, GameContent};
use tilequest_core::{BattleOutcome, GameSession, Mode, PcgRng, RngOracle};

use crate::autopilot::{Autopilot, BattleChoice};
use crate::config::ClientConfig;
use crate::scene::Scene;

/// Roster entry controlled by the player.
pub const PLAYER_NAME: &str = "Hero";

/// Totals for one run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u32,
    pub exploration_frames: u32,
    pub battle_frames: u32,
    pub blocked_frames: u32,
    pub dialogues_opened: u32,
    pub encounters: u32,
    pub victories: u32,
    pub defeats: u32,
    pub escapes: u32,
    pub failed_escapes: u32,
    pub rejected_inputs: u32,
    pub transparency_sorts: u32,
    pub fallback_sorts: u32,
    pub draw_calls: usize,
    pub player_level: u32,
    pub final_position: Vec2,
}

impl RunSummary {
    fn record_outcome(&mut self, outcome: BattleOutcome) {
        match outcome {
            BattleOutcome::Victory => self.victories += 1,
            BattleOutcome::Defeat => self.defeats += 1,
            BattleOutcome::Fled => self.escapes += 1,
        }
    }
}

/// Load the configured level and play it.
pub fn run(config: &ClientConfig) -> Result<RunSummary> {
    let factory = ContentFactory::new(&config.data_dir);
    let GameContent {
        config: game_config,
        roster,
        dialogue,
        level,
        ..
    } = factory
        .load_game(&config.level)
        .with_context(|| format!("Failed to load level '{}'", config.level))?;

    let player = roster
        .find(PLAYER_NAME)
        .with_context(|| format!("No combatant named '{}' in the roster", PLAYER_NAME))?;
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, frames = config.frames, level = %level.name, "starting run");

    let session = GameSession::new(&level, roster, player, dialogue, game_config)?;
    let mut rng = PcgRng::new(seed);
    let mut summary = simulate(session, &mut rng, config.frames, config.frame_time);
    summary.seed = seed;
    Ok(summary)
}

/// Drive `session` for `frames` frames of `dt` seconds with the autopilot.
pub fn simulate(
    mut session: GameSession<'_>,
    rng: &mut impl RngOracle,
    frames: u32,
    dt: f32,
) -> RunSummary {
    let mut scene = Scene::from_level(session.level());
    let mut pilot = Autopilot::default();
    let mut summary = RunSummary::default();

    for frame in 0..frames {
        match session.mode() {
            Mode::Battle => {
                match pilot.fight(&mut session, rng) {
                    // A successful run concludes the battle right away, so
                    // no frame report will carry it.
                    Some(Ok(BattleChoice::Escaped)) => summary.record_outcome(BattleOutcome::Fled),
                    Some(Ok(BattleChoice::FailedToEscape)) => summary.failed_escapes += 1,
                    Some(Ok(BattleChoice::Attacked)) | None => {}
                    Some(Err(err)) => {
                        summary.rejected_inputs += 1;
                        tracing::warn!(%err, frame, "battle input rejected");
                    }
                }
            }
            Mode::Exploration => {
                pilot.read_dialogue(&mut session);
            }
        }

        let keys = pilot.next_keys();
        let report = session.frame(dt, &keys, rng);
        match report.mode {
            Mode::Exploration => summary.exploration_frames += 1,
            Mode::Battle => summary.battle_frames += 1,
        }
        if let Some(collision) = report.collision {
            summary.blocked_frames += u32::from(collision.blocked());
            summary.dialogues_opened += u32::from(collision.interaction.is_some());
        }
        if report.encounter.is_some() {
            summary.encounters += 1;
        }
        if let Some(outcome) = report.finished {
            summary.record_outcome(outcome);
            tracing::info!(%outcome, frame, "battle finished");
        }

        let stats = scene.render(&session);
        summary.transparency_sorts += u32::from(stats.resorted);
        summary.fallback_sorts += u32::from(stats.resorted && stats.fallback);
        summary.draw_calls += stats.draw_calls;
        summary.frames += 1;
    }

    summary.player_level = session.player_combatant().map_or(0, |p| p.level);
    summary.final_position = session.actor().position;
    summary
}
