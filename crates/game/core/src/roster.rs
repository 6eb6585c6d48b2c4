//! World roster: the single owner of every combatant.
//!
//! Systems that act on combatants (battles, encounters) hold [`CombatantId`]
//! handles and borrow the roster for the duration of a call.

use crate::combatant::Combatant;
use crate::error::{ErrorSeverity, GameError};

/// Handle to a combatant in a [`Roster`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl CombatantId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl core::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors from roster lookups.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("combatant {0} is not in the roster")]
    NotFound(CombatantId),

    #[error("combatant {0} cannot be paired with itself")]
    SameCombatant(CombatantId),
}

impl GameError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) => ErrorSeverity::Internal,
            Self::SameCombatant(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "ROSTER_NOT_FOUND",
            Self::SameCombatant(_) => "ROSTER_SAME_COMBATANT",
        }
    }
}

/// Owns all combatants. Ids are stable: combatants are never removed.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    combatants: Vec<Combatant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, combatant: Combatant) -> CombatantId {
        let id = CombatantId(self.combatants.len() as u32);
        self.combatants.push(combatant);
        id
    }

    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.get(id.index())
    }

    pub fn get_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.combatants.get_mut(id.index())
    }

    /// Look up a combatant by display name.
    pub fn find(&self, name: &str) -> Option<CombatantId> {
        self.combatants
            .iter()
            .position(|c| c.name == name)
            .map(|i| CombatantId(i as u32))
    }

    /// Mutable access to two distinct combatants at once.
    pub fn pair_mut(
        &mut self,
        a: CombatantId,
        b: CombatantId,
    ) -> Result<(&mut Combatant, &mut Combatant), RosterError> {
        if a == b {
            return Err(RosterError::SameCombatant(a));
        }
        let len = self.combatants.len();
        for id in [a, b] {
            if id.index() >= len {
                return Err(RosterError::NotFound(id));
            }
        }

        if a.index() < b.index() {
            let (left, right) = self.combatants.split_at_mut(b.index());
            Ok((&mut left[a.index()], &mut right[0]))
        } else {
            let (left, right) = self.combatants.split_at_mut(a.index());
            Ok((&mut right[0], &mut left[b.index()]))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CombatantId, &Combatant)> {
        self.combatants
            .iter()
            .enumerate()
            .map(|(i, c)| (CombatantId(i as u32), c))
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{BattleStats, Element};

    fn roster() -> (Roster, CombatantId, CombatantId) {
        let mut roster = Roster::new();
        let a = roster.insert(Combatant::new("Puddle", Element::Water, BattleStats::default()));
        let b = roster.insert(Combatant::new("Mole", Element::Ground, BattleStats::default()));
        (roster, a, b)
    }

    #[test]
    fn pair_mut_returns_in_argument_order() {
        let (mut roster, a, b) = roster();
        let (first, second) = roster.pair_mut(b, a).unwrap();
        assert_eq!(first.name, "Mole");
        assert_eq!(second.name, "Puddle");
    }

    #[test]
    fn pair_mut_rejects_aliasing_and_missing() {
        let (mut roster, a, _) = roster();
        assert_eq!(roster.pair_mut(a, a).unwrap_err(), RosterError::SameCombatant(a));
        let ghost = CombatantId(99);
        assert_eq!(roster.pair_mut(a, ghost).unwrap_err(), RosterError::NotFound(ghost));
    }

    #[test]
    fn find_by_name() {
        let (roster, _, b) = roster();
        assert_eq!(roster.find("Mole"), Some(b));
        assert_eq!(roster.find("Nobody"), None);
    }
}
