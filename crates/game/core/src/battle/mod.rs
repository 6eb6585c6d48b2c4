//! Turn-based battle session.
//!
//! A [`Battle`] pits one player-side combatant against one enemy. It holds
//! only [`CombatantId`] handles; stats live in the [`Roster`], which every
//! call borrows mutably. While a battle is active nothing else may write those
//! two combatants.
//!
//! The state machine is driven from two directions:
//! - [`Battle::update`] once per frame advances the timed states
//!   (`Start`, `EnemyTurn`, `Win`, `Lose`).
//! - [`Battle::select_move`] and [`Battle::run_away`] are called by the UI
//!   during `PlayerTurn`.
//!
//! Attack lost to burn and spent move uses only last for one battle: both
//! sides get them back however the battle ends.

mod ai;
mod errors;
mod log;
mod state;

pub use ai::{choose_enemy_move, move_weights};
pub use errors::BattleError;
pub use log::BattleLog;
pub use state::{BattleOutcome, BattleState};

use crate::combat::{AttackOutcome, AttackResult, resolve_attack};
use crate::combatant::{BattleFlags, Combatant, Visibility};
use crate::config::BattleConfig;
use crate::rng::RngOracle;
use crate::roster::{CombatantId, Roster, RosterError};
use crate::stats::{
    LevelUp, Move, MoveSet, StatusCondition, default_enemy_moves, default_player_moves,
};

/// Result of a turn-start status tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TurnStart {
    Ready,
    Skipped,
    Fainted,
}

/// Attack and move uses a combatant brought into the battle.
#[derive(Clone, Debug)]
struct Baseline {
    attack: u32,
    moves: MoveSet,
}

impl Baseline {
    fn capture(combatant: &Combatant) -> Self {
        Self {
            attack: combatant.stats.attack,
            moves: combatant.moves.clone(),
        }
    }

    fn reapply(&self, combatant: &mut Combatant) {
        combatant.stats.attack = self.attack;
        combatant.moves.clone_from(&self.moves);
    }
}

/// One battle between the player's monster and a wild enemy.
#[derive(Clone, Debug)]
pub struct Battle {
    player: CombatantId,
    enemy: Option<CombatantId>,
    state: BattleState,
    timer: f32,
    active: bool,
    outcome: Option<BattleOutcome>,
    log: BattleLog,
    config: BattleConfig,
    player_baseline: Option<Baseline>,
    enemy_baseline: Option<Baseline>,
}

impl Battle {
    pub fn new(player: CombatantId, enemy: Option<CombatantId>, config: BattleConfig) -> Self {
        Self {
            player,
            enemy,
            state: BattleState::Start,
            timer: 0.0,
            active: false,
            outcome: None,
            log: BattleLog::new(),
            config,
            player_baseline: None,
            enemy_baseline: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub fn player(&self) -> CombatantId {
        self.player
    }

    pub fn enemy(&self) -> Option<CombatantId> {
        self.enemy
    }

    /// Seconds left before the current timed state moves on.
    pub fn time_remaining(&self) -> f32 {
        self.timer.max(0.0)
    }

    /// Begin (or restart) the battle.
    ///
    /// Moves both combatants to their battle positions, shows their battle
    /// sprites, and hands out default moves to whoever has none.
    pub fn start(&mut self, roster: &mut Roster) {
        // A restart mid-battle must not capture effects of the aborted one.
        self.reapply_baselines(roster);
        self.active = true;
        self.state = BattleState::Start;
        self.timer = self.config.start_delay;
        self.outcome = None;
        self.log.clear();
        self.log.push("Battle started!");

        match roster.get_mut(self.player) {
            Some(player) => {
                player.flags = BattleFlags::empty();
                if player.moves.is_empty() {
                    player.moves = default_player_moves();
                }
                enter_battle_scene(player, self.config.player_battle_position);
                self.player_baseline = Some(Baseline::capture(player));
            }
            None => tracing::warn!(player = %self.player, "battle started without a player"),
        }

        match self.enemy.and_then(|id| roster.get_mut(id)) {
            Some(enemy) => {
                if enemy.moves.is_empty() {
                    enemy.moves = default_enemy_moves(enemy.element);
                }
                enter_battle_scene(enemy, self.config.enemy_battle_position);
                self.enemy_baseline = Some(Baseline::capture(enemy));
                self.log.push(format!("A wild {} appeared!", enemy.name));
                tracing::info!(enemy = %enemy.name, "battle started");
            }
            None => tracing::warn!("battle started without an enemy"),
        }
    }

    /// Advance timed states. Does nothing while inactive.
    pub fn update(&mut self, dt: f32, roster: &mut Roster, rng: &mut impl RngOracle) {
        if !self.active {
            return;
        }
        self.timer -= dt;
        if self.timer > 0.0 {
            return;
        }

        match self.state {
            BattleState::Start => self.begin_player_turn(roster, rng),
            BattleState::EnemyTurn => self.enemy_turn(roster, rng),
            BattleState::Win | BattleState::Lose => self.finish(roster),
            BattleState::PlayerTurn | BattleState::Finished => {}
        }
    }

    /// End the battle immediately, e.g. when the game loop tears it down.
    ///
    /// The enemy is restored so the world actor is not left damaged, and both
    /// sides get back their attack and move uses.
    pub fn end(&mut self, roster: &mut Roster) {
        if self.state == BattleState::Finished && !self.active {
            return;
        }
        self.finish(roster);
    }

    /// Execute the named player move. UI entry point during `PlayerTurn`.
    ///
    /// Invalid input (unknown move, no uses left, wrong phase) is rejected,
    /// noted in the log where the player can see it, and leaves the state
    /// machine where it was.
    pub fn select_move(
        &mut self,
        name: &str,
        roster: &mut Roster,
        rng: &mut impl RngOracle,
    ) -> Result<AttackResult, BattleError> {
        self.ensure_player_turn()?;
        let enemy_id = self.enemy.ok_or(BattleError::NoOpponent)?;
        let (player, enemy) = roster.pair_mut(self.player, enemy_id).map_err(|e| match e {
            RosterError::NotFound(id) | RosterError::SameCombatant(id) => {
                BattleError::MissingCombatant(id)
            }
        })?;

        let Some(index) = player.moves.position(name) else {
            self.log.push(format!("{name} is not a known move!"));
            return Err(BattleError::UnknownMove(name.to_string()));
        };
        let Some(mv) = player.moves.get_mut(index).and_then(take_use) else {
            self.log.push(format!("No uses left for {name}!"));
            return Err(BattleError::MoveExhausted(name.to_string()));
        };

        self.log.push(format!("{} used {}!", player.name, mv.name));
        let result = resolve_attack(
            &mv,
            &player.stats,
            &mut enemy.stats,
            &mut enemy.status,
            rng,
            &self.config,
        );
        self.log_attack(&result, player, enemy, &mv.name);

        if enemy.is_fainted() {
            self.win(roster, rng);
        } else {
            self.schedule_enemy_turn();
        }
        Ok(result)
    }

    /// Try to flee. UI entry point during `PlayerTurn`.
    ///
    /// Returns whether the escape succeeded. On success the battle is over at
    /// once and the enemy keeps its current health and condition; on failure
    /// the enemy acts.
    pub fn run_away(
        &mut self,
        roster: &mut Roster,
        rng: &mut impl RngOracle,
    ) -> Result<bool, BattleError> {
        self.ensure_player_turn()?;

        if !rng.chance(self.config.run_success_percent) {
            self.log.push("Couldn't get away!");
            self.schedule_enemy_turn();
            return Ok(false);
        }

        self.log.push("Got away safely!");
        self.outcome = Some(BattleOutcome::Fled);
        self.state = BattleState::Finished;
        self.active = false;
        if let Some(player) = roster.get_mut(self.player) {
            player.flags |= BattleFlags::FLED | BattleFlags::BATTLE_END;
            player.placement.visibility = Visibility::World;
        }
        if let Some(enemy) = self.enemy.and_then(|id| roster.get_mut(id)) {
            enemy.placement.visibility = Visibility::World;
        }
        self.reapply_baselines(roster);
        tracing::info!("player fled the battle");
        Ok(true)
    }

    fn ensure_player_turn(&self) -> Result<(), BattleError> {
        if !self.active {
            return Err(BattleError::NotActive);
        }
        if self.state != BattleState::PlayerTurn {
            return Err(BattleError::NotPlayerTurn { state: self.state });
        }
        Ok(())
    }

    fn schedule_enemy_turn(&mut self) {
        self.state = BattleState::EnemyTurn;
        self.timer = self.config.turn_delay;
    }

    /// Enter `PlayerTurn`, ticking the player's condition first.
    fn begin_player_turn(&mut self, roster: &mut Roster, rng: &mut impl RngOracle) {
        self.state = BattleState::PlayerTurn;
        match self.tick_status(self.player, roster, rng) {
            TurnStart::Fainted => self.lose(roster),
            TurnStart::Skipped => self.schedule_enemy_turn(),
            TurnStart::Ready => self.log.push("Your turn!"),
        }
    }

    fn enemy_turn(&mut self, roster: &mut Roster, rng: &mut impl RngOracle) {
        let Some(enemy_id) = self.enemy else {
            tracing::warn!("enemy turn without an enemy; returning to player");
            return self.begin_player_turn(roster, rng);
        };
        if roster.get(enemy_id).is_none_or(|e| e.moves.is_empty()) {
            tracing::warn!(enemy = %enemy_id, "enemy cannot act; returning to player");
            return self.begin_player_turn(roster, rng);
        }

        match self.tick_status(enemy_id, roster, rng) {
            TurnStart::Fainted => return self.win(roster, rng),
            TurnStart::Skipped => return self.begin_player_turn(roster, rng),
            TurnStart::Ready => {}
        }

        let Ok((player, enemy)) = roster.pair_mut(self.player, enemy_id) else {
            tracing::warn!(player = %self.player, "player missing during enemy turn");
            return self.begin_player_turn(roster, rng);
        };

        let choice = choose_enemy_move(&enemy.moves, &player.stats, player.element, rng, &self.config);
        let Some(mv) = choice
            .and_then(|i| enemy.moves.get_mut(i))
            .and_then(take_use)
        else {
            self.log.push(format!("{} has no moves left!", enemy.name));
            return self.begin_player_turn(roster, rng);
        };

        self.log.push(format!("{} used {}!", enemy.name, mv.name));
        let result = resolve_attack(
            &mv,
            &enemy.stats,
            &mut player.stats,
            &mut player.status,
            rng,
            &self.config,
        );
        self.log_attack(&result, enemy, player, &mv.name);

        if player.is_fainted() {
            self.lose(roster);
        } else {
            self.begin_player_turn(roster, rng);
        }
    }

    /// Apply the standing condition of `id` at the start of its turn.
    fn tick_status(
        &mut self,
        id: CombatantId,
        roster: &mut Roster,
        rng: &mut impl RngOracle,
    ) -> TurnStart {
        let Some(combatant) = roster.get_mut(id) else {
            return TurnStart::Ready;
        };
        let condition = combatant.status;
        let tick = condition.tick(&mut combatant.stats, rng, &self.config);

        if tick.damage > 0 {
            let source = match condition {
                StatusCondition::Burn => "the burn",
                _ => "poison",
            };
            self.log.push(format!("{} is hurt by {source}!", combatant.name));
        }
        if combatant.is_fainted() {
            self.log.push(format!("{} fainted!", combatant.name));
            return TurnStart::Fainted;
        }
        if tick.skip_turn {
            self.log.push(format!("{} is paralyzed and cannot move!", combatant.name));
            return TurnStart::Skipped;
        }
        TurnStart::Ready
    }

    fn log_attack(
        &mut self,
        result: &AttackResult,
        attacker: &Combatant,
        defender: &Combatant,
        move_name: &str,
    ) {
        match result.outcome {
            AttackOutcome::Miss => {
                self.log.push(format!("{}'s {move_name} missed!", attacker.name));
                return;
            }
            AttackOutcome::Critical => self.log.push("Critical hit!"),
            AttackOutcome::Hit => {}
        }
        if let Some(damage) = result.damage {
            self.log.push(format!("Dealt {damage} damage!"));
        }
        if let Some(condition) = result.inflicted {
            self.log.push(format!("{} is now {}!", defender.name, condition.describe()));
        }
        tracing::debug!(
            attacker = %attacker.name,
            defender = %defender.name,
            health = defender.stats.health,
            "move resolved"
        );
    }

    fn win(&mut self, roster: &mut Roster, rng: &mut impl RngOracle) {
        self.state = BattleState::Win;
        self.timer = self.config.outcome_delay;
        self.outcome = Some(BattleOutcome::Victory);
        self.log.push("You won the battle!");

        if let Some(player) = roster.get_mut(self.player) {
            let growth = LevelUp::roll(rng);
            growth.apply(&mut player.stats);
            if let Some(baseline) = self.player_baseline.as_mut() {
                baseline.attack = baseline.attack.saturating_add(growth.attack);
            }
            player.level += 1;
            player.flags |= BattleFlags::WON;
            self.log.push(format!("{} grew to level {}!", player.name, player.level));
            tracing::info!(level = player.level, ?growth, "player leveled up");
        }
    }

    fn lose(&mut self, roster: &mut Roster) {
        self.state = BattleState::Lose;
        self.timer = self.config.outcome_delay;
        self.outcome = Some(BattleOutcome::Defeat);
        self.log.push("You lost the battle!");
        if let Some(player) = roster.get_mut(self.player) {
            player.flags |= BattleFlags::LOST;
        }
    }

    fn finish(&mut self, roster: &mut Roster) {
        self.state = BattleState::Finished;
        self.active = false;

        if let Some(player) = roster.get_mut(self.player) {
            player.flags |= BattleFlags::BATTLE_END;
            player.placement.visibility = Visibility::World;
        }
        if let Some(enemy) = self.enemy.and_then(|id| roster.get_mut(id)) {
            enemy.restore();
            enemy.placement.visibility = Visibility::World;
        }
        self.reapply_baselines(roster);
        tracing::info!(outcome = ?self.outcome, "battle finished");
    }

    /// Hand back attack and move uses spent during this battle.
    fn reapply_baselines(&mut self, roster: &mut Roster) {
        let player = roster.get_mut(self.player);
        if let Some((baseline, player)) = self.player_baseline.take().zip(player) {
            baseline.reapply(player);
        }
        let enemy = self.enemy.and_then(|id| roster.get_mut(id));
        if let Some((baseline, enemy)) = self.enemy_baseline.take().zip(enemy) {
            baseline.reapply(enemy);
        }
    }
}

/// Spend one use of `mv`, returning a snapshot of it if any were left.
fn take_use(mv: &mut Move) -> Option<Move> {
    mv.consume_use().then(|| mv.clone())
}

fn enter_battle_scene(combatant: &mut Combatant, position: glam::Vec2) {
    combatant.placement.battle = position;
    combatant.placement.visibility = Visibility::Battle;
}
