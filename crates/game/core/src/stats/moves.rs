//! Move descriptors and per-combatant move sets.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

use super::conditions::StatusCondition;
use super::element::Element;

/// A named battle action.
///
/// Everything except `uses` is fixed once the move is defined; `uses` counts
/// down each time the move is attempted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub element: Element,
    /// Base power; 0 marks a status move.
    pub power: u32,
    /// Hit chance on a 0-100 scale.
    pub accuracy: f32,
    /// Remaining uses.
    pub uses: u32,
    /// Condition applied to the target when the move lands.
    #[cfg_attr(feature = "serde", serde(default))]
    pub inflicts: Option<StatusCondition>,
}

impl Move {
    pub fn new(name: impl Into<String>, element: Element, power: u32, accuracy: f32, uses: u32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            element,
            power,
            accuracy: accuracy.clamp(0.0, 100.0),
            uses,
            inflicts: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn inflicting(mut self, condition: StatusCondition) -> Self {
        self.inflicts = Some(condition);
        self
    }

    pub fn is_status_move(&self) -> bool {
        self.power == 0
    }

    pub fn has_uses(&self) -> bool {
        self.uses > 0
    }

    /// Consume one use. Returns `false` if none were left.
    pub fn consume_use(&mut self) -> bool {
        if self.uses == 0 {
            return false;
        }
        self.uses -= 1;
        true
    }
}

/// Ordered list of up to [`GameConfig::MAX_MOVES`] moves.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MoveSet {
    moves: ArrayVec<Move, { GameConfig::MAX_MOVES }>,
}

impl MoveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a move if there is room. Returns the move back when the set is full.
    pub fn push(&mut self, mv: Move) -> Result<(), Move> {
        self.moves.try_push(mv).map_err(|e| e.element())
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.moves.iter().position(|m| m.name == name)
    }

    pub fn find(&self, name: &str) -> Option<&Move> {
        self.moves.iter().find(|m| m.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Move> {
        self.moves.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Index of the first move that still has uses.
    pub fn first_available(&self) -> Option<usize> {
        self.moves.iter().position(Move::has_uses)
    }
}

impl FromIterator<Move> for MoveSet {
    /// Collects up to the capacity; extra moves are dropped.
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().take(GameConfig::MAX_MOVES).collect(),
        }
    }
}

/// Moves handed to a player-side combatant that enters battle with none.
pub fn default_player_moves() -> MoveSet {
    [
        Move::new("Tackle", Element::Normal, 50, 95.0, 35).with_description("A basic attack"),
        Move::new("Power Strike", Element::Normal, 80, 75.0, 15)
            .with_description("A powerful but less accurate strike"),
        Move::new("Quick Attack", Element::Normal, 40, 100.0, 30)
            .with_description("A fast, accurate attack"),
        Move::new("Special Move", Element::Normal, 100, 65.0, 5)
            .with_description("A very powerful but risky attack"),
    ]
    .into_iter()
    .collect()
}

/// Moves handed to a wild combatant that enters battle with none.
///
/// `Charge` takes the combatant's own element so type preference still applies.
pub fn default_enemy_moves(element: Element) -> MoveSet {
    [
        Move::new("Tackle", Element::Normal, 45, 95.0, 35).with_description("A basic attack"),
        Move::new("Charge", element, 70, 80.0, 20).with_description("A charging attack"),
    ]
    .into_iter()
    .collect()
}
