//! Scripted stand-in for a player at the keyboard.

use tilequest_core::{
    BattleError, BattleState, GameSession, HeldKeys, Key, RngOracle, StatusCondition,
};

/// Walk directions, one per route segment.
const ROUTE: [Key; 6] = [Key::Down, Key::Right, Key::Down, Key::Left, Key::Up, Key::Right];

/// Health ratio below which the autopilot tries to run.
const FLEE_BELOW: f32 = 0.25;

/// What the autopilot did in a battle turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleChoice {
    Attacked,
    Escaped,
    FailedToEscape,
}

/// Produces held keys for exploration and makes battle and dialogue choices.
#[derive(Clone, Debug)]
pub struct Autopilot {
    frame: u32,
    segment_frames: u32,
    interact_every: u32,
}

impl Autopilot {
    pub fn new(segment_frames: u32, interact_every: u32) -> Self {
        Self {
            frame: 0,
            segment_frames: segment_frames.max(1),
            interact_every: interact_every.max(1),
        }
    }

    /// Keys for the next exploration frame.
    pub fn next_keys(&mut self) -> HeldKeys {
        let segment = (self.frame / self.segment_frames) as usize % ROUTE.len();
        let mut keys = HeldKeys::from_key(ROUTE[segment]);
        if self.frame % self.interact_every == 0 {
            keys |= HeldKeys::INTERACT;
        }
        self.frame += 1;
        keys
    }

    /// Skip ahead through an open dialogue: wait for the text, then take
    /// the first choice or advance. Returns whether a dialogue was open.
    pub fn read_dialogue(&self, session: &mut GameSession<'_>) -> bool {
        let dialogue = session.dialogue_mut();
        if !dialogue.is_active() {
            return false;
        }
        if dialogue.is_fully_revealed() {
            let result = if dialogue.choices().is_empty() {
                dialogue.advance()
            } else {
                dialogue.choose(0)
            };
            if let Err(err) = result {
                tracing::warn!(%err, "dialogue input rejected");
            }
        }
        true
    }

    /// Act once when it is the player's turn.
    ///
    /// Opens with a status move on an unaffected enemy, then uses the
    /// strongest move with uses left. Runs when health is low or every move
    /// is exhausted.
    pub fn fight(
        &self,
        session: &mut GameSession<'_>,
        rng: &mut impl RngOracle,
    ) -> Option<Result<BattleChoice, BattleError>> {
        let battle = session.battle()?;
        if battle.state() != BattleState::PlayerTurn {
            return None;
        }
        let enemy_status = battle
            .enemy()
            .and_then(|id| session.roster().get(id))
            .map(|enemy| enemy.status);
        let player = session.player_combatant()?;

        let low_health = player.stats.health_ratio() < FLEE_BELOW;
        let usable = || player.moves.iter().filter(|m| m.has_uses());
        let opener = usable()
            .find(|m| m.is_status_move() && m.inflicts.is_some())
            .filter(|_| enemy_status == Some(StatusCondition::None));
        let strongest = usable()
            .filter(|m| !m.is_status_move())
            .max_by_key(|m| m.power);
        let pick = opener.or(strongest).map(|m| m.name.clone());

        let choice = match pick.filter(|_| !low_health) {
            Some(name) => session.choose_move(&name, rng).map(|_| BattleChoice::Attacked),
            None => session.run(rng).map(|escaped| {
                if escaped {
                    BattleChoice::Escaped
                } else {
                    BattleChoice::FailedToEscape
                }
            }),
        };
        Some(choice)
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(90, 30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_walks_in_segments() {
        let mut pilot = Autopilot::new(2, 100);
        let keys: Vec<HeldKeys> = (0..6).map(|_| pilot.next_keys()).collect();
        assert!(keys[0].contains(HeldKeys::DOWN | HeldKeys::INTERACT));
        assert_eq!(keys[1], HeldKeys::DOWN);
        assert_eq!(keys[2], HeldKeys::RIGHT);
        assert_eq!(keys[3], HeldKeys::RIGHT);
        assert_eq!(keys[4], HeldKeys::DOWN);
    }

    #[test]
    fn interact_is_pressed_periodically() {
        let mut pilot = Autopilot::new(1000, 3);
        let pressed: Vec<bool> = (0..7)
            .map(|_| pilot.next_keys().contains(HeldKeys::INTERACT))
            .collect();
        assert_eq!(pressed, vec![true, false, false, true, false, false, true]);
    }

    #[test]
    fn zero_periods_are_clamped() {
        let mut pilot = Autopilot::new(0, 0);
        assert!(pilot.next_keys().contains(HeldKeys::INTERACT));
    }
}
