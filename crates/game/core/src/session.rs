//! Frame composition for one level: exploration or battle, never both.
//!
//! Each [`GameSession::frame`]:
//!
//! 1. ticks the dialogue reveal
//! 2. in battle mode, advances the battle and concludes it once finished
//! 3. in exploration mode, steers the actor from the held keys, runs the
//!    collider, then rolls for a random encounter while the actor walks

use glam::Vec2;

use crate::battle::{Battle, BattleError, BattleOutcome};
use crate::collider::{Actor, Collider, CollisionReport};
use crate::combat::AttackResult;
use crate::combatant::{BattleFlags, Combatant};
use crate::config::GameConfig;
use crate::dialogue::DialogueSystem;
use crate::input::KeyState;
use crate::level::Level;
use crate::rng::RngOracle;
use crate::roster::{CombatantId, Roster, RosterError};

/// Which half of the game loop ran this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Exploration,
    Battle,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Exploration => "exploration",
            Mode::Battle => "battle",
        }
    }
}

/// Summary of one frame for the caller (UI, logs, tests).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameReport {
    pub mode: Mode,
    pub collision: Option<CollisionReport>,
    /// Wild combatant that jumped out this frame.
    pub encounter: Option<CombatantId>,
    /// Set on the frame a battle is concluded.
    pub finished: Option<BattleOutcome>,
}

impl FrameReport {
    fn battle(finished: Option<BattleOutcome>) -> Self {
        Self {
            mode: Mode::Battle,
            collision: None,
            encounter: None,
            finished,
        }
    }
}

pub struct GameSession<'level> {
    level: &'level Level,
    config: GameConfig,
    roster: Roster,
    player: CombatantId,
    actor: Actor,
    collider: Collider<'level>,
    dialogue: DialogueSystem,
    battle: Option<Battle>,
    wild: Vec<CombatantId>,
    grace: f32,
}

impl<'level> GameSession<'level> {
    pub const ACTOR_SIZE: Vec2 = Vec2::new(32.0, 32.0);

    /// Place `player` at the level spawn.
    ///
    /// Wild names the roster does not know are skipped with a warning.
    pub fn new(
        level: &'level Level,
        mut roster: Roster,
        player: CombatantId,
        dialogue: DialogueSystem,
        config: GameConfig,
    ) -> Result<Self, RosterError> {
        let combatant = roster.get_mut(player).ok_or(RosterError::NotFound(player))?;
        combatant.placement.world = level.spawn;

        let wild = level
            .wild
            .iter()
            .filter_map(|name| match roster.find(name) {
                Some(id) if id != player => Some(id),
                Some(_) => {
                    tracing::warn!(level = %level.name, %name, "player listed as a wild encounter");
                    None
                }
                None => {
                    tracing::warn!(level = %level.name, %name, "unknown wild combatant");
                    None
                }
            })
            .collect();

        let actor = Actor::new(level.spawn, Self::ACTOR_SIZE).with_speed(config.encounter.walk_speed);
        let collider = level.collider(config.collider.clone());
        tracing::info!(level = %level.name, "session started");

        Ok(Self {
            level,
            config,
            roster,
            player,
            actor,
            collider,
            dialogue,
            battle: None,
            wild,
            grace: 0.0,
        })
    }

    pub fn level(&self) -> &'level Level {
        self.level
    }

    pub fn mode(&self) -> Mode {
        if self.battle.as_ref().is_some_and(Battle::is_active) {
            Mode::Battle
        } else {
            Mode::Exploration
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn player(&self) -> CombatantId {
        self.player
    }

    pub fn player_combatant(&self) -> Option<&Combatant> {
        self.roster.get(self.player)
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    pub fn collider_mut(&mut self) -> &mut Collider<'level> {
        &mut self.collider
    }

    pub fn dialogue(&self) -> &DialogueSystem {
        &self.dialogue
    }

    pub fn dialogue_mut(&mut self) -> &mut DialogueSystem {
        &mut self.dialogue
    }

    /// The running battle, or the last one until the next encounter.
    pub fn battle(&self) -> Option<&Battle> {
        self.battle.as_ref()
    }

    /// Wild combatants this level can spawn.
    pub fn wild(&self) -> &[CombatantId] {
        &self.wild
    }

    /// Seconds left before encounters are possible again.
    pub fn grace_remaining(&self) -> f32 {
        self.grace
    }

    pub fn frame(&mut self, dt: f32, keys: &impl KeyState, rng: &mut impl RngOracle) -> FrameReport {
        self.dialogue.update(dt);

        if let Some(battle) = self.battle.as_mut().filter(|b| b.is_active()) {
            battle.update(dt, &mut self.roster, rng);
            let finished = self.conclude_battle();
            return FrameReport::battle(finished);
        }

        // The conversation holds the actor in place.
        let moving = if self.dialogue.is_active() {
            self.actor.stop();
            false
        } else {
            self.actor.steer(keys)
        };
        let collision = self.collider.update(&mut self.actor, keys, &mut self.dialogue, dt);
        if let Some(player) = self.roster.get_mut(self.player) {
            player.placement.world = self.actor.position;
        }

        self.grace = (self.grace - dt).max(0.0);
        let encounter = if moving { self.roll_encounter(dt, rng) } else { None };
        if let Some(Err(err)) = encounter.map(|enemy| self.start_battle(enemy)) {
            tracing::warn!(%err, "encounter could not start a battle");
        }

        FrameReport {
            mode: Mode::Exploration,
            collision: Some(collision),
            encounter,
            finished: None,
        }
    }

    /// Begin a battle against `enemy` right away.
    pub fn start_battle(&mut self, enemy: CombatantId) -> Result<(), RosterError> {
        if enemy == self.player {
            return Err(RosterError::SameCombatant(enemy));
        }
        let name = self
            .roster
            .get(enemy)
            .map(|c| c.name.clone())
            .ok_or(RosterError::NotFound(enemy))?;

        self.actor.stop();
        self.dialogue.end_dialogue();
        let mut battle = Battle::new(self.player, Some(enemy), self.config.battle.clone());
        battle.start(&mut self.roster);
        self.battle = Some(battle);
        tracing::info!(enemy = %name, level = %self.level.name, "wild encounter");
        Ok(())
    }

    /// UI entry point: the player picked a move.
    pub fn choose_move(
        &mut self,
        name: &str,
        rng: &mut impl RngOracle,
    ) -> Result<AttackResult, BattleError> {
        let battle = active(&mut self.battle)?;
        battle.select_move(name, &mut self.roster, rng)
    }

    /// UI entry point: the player pressed "Run". Returns whether it worked.
    pub fn run(&mut self, rng: &mut impl RngOracle) -> Result<bool, BattleError> {
        let battle = active(&mut self.battle)?;
        let escaped = battle.run_away(&mut self.roster, rng)?;
        if escaped {
            self.conclude_battle();
        }
        Ok(escaped)
    }

    /// Abort the running battle, e.g. when the level is torn down.
    pub fn end_battle(&mut self) -> Option<BattleOutcome> {
        let battle = self.battle.as_mut()?;
        battle.end(&mut self.roster);
        self.conclude_battle()
    }

    fn roll_encounter(&mut self, dt: f32, rng: &mut impl RngOracle) -> Option<CombatantId> {
        let rate = self.level.encounter_rate;
        if rate <= 0.0 || self.wild.is_empty() || self.grace > 0.0 {
            return None;
        }
        if !rng.chance(rate * dt * 100.0) {
            return None;
        }
        let pick = rng.range(0, self.wild.len() as u32 - 1) as usize;
        self.wild.get(pick).copied()
    }

    /// React to the flags a finished battle left on the player.
    ///
    /// Runs once per battle: the flags are cleared afterwards.
    fn conclude_battle(&mut self) -> Option<BattleOutcome> {
        let battle = self.battle.as_ref().filter(|b| !b.is_active())?;
        let player = self.roster.get_mut(self.player)?;
        if !player.flags.contains(BattleFlags::BATTLE_END) {
            return None;
        }

        if player.flags.contains(BattleFlags::LOST) {
            player.restore();
            player.placement.world = self.level.spawn;
            self.actor.position = self.level.spawn;
        }
        player.flags = BattleFlags::empty();
        self.actor.stop();
        self.grace = self.config.encounter.grace_period;

        let outcome = battle.outcome();
        tracing::info!(outcome = ?outcome, "back to exploration");
        outcome
    }
}

fn active(battle: &mut Option<Battle>) -> Result<&mut Battle, BattleError> {
    battle
        .as_mut()
        .filter(|b| b.is_active())
        .ok_or(BattleError::NotActive)
}
