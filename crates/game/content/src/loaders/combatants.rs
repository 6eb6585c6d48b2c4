//! Combatant template loader.
//!
//! Templates name their moves; the names are resolved against the move
//! catalog so every combatant gets its own copy (with its own uses).

use std::collections::HashSet;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tilequest_core::{BattleStats, Combatant, Element, GameConfig, Move, MoveSet, Roster};

use crate::loaders::{LoadResult, parse_ron, read_file};

/// Base stats as written in content files. Health starts full.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl From<StatBlock> for BattleStats {
    fn from(block: StatBlock) -> Self {
        BattleStats::new(block.max_health, block.attack, block.defense, block.speed)
    }
}

/// One entry of `combatants.ron`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatantTemplate {
    pub name: String,
    #[serde(default)]
    pub element: Element,
    #[serde(default = "first_level")]
    pub level: u32,
    pub stats: StatBlock,
    /// Move names from the catalog. Empty means the battle hands out defaults.
    #[serde(default)]
    pub moves: Vec<String>,
    /// World position for combatants that stand in a level.
    #[serde(default)]
    pub position: Option<Vec2>,
}

fn first_level() -> u32 {
    1
}

impl CombatantTemplate {
    /// Build a combatant, copying each named move out of `catalog`.
    pub fn build(&self, catalog: &[Move]) -> LoadResult<Combatant> {
        if self.level == 0 {
            anyhow::bail!("combatant '{}' has level 0", self.name);
        }
        if self.stats.max_health == 0 {
            anyhow::bail!("combatant '{}' has no health", self.name);
        }
        if self.moves.len() > GameConfig::MAX_MOVES {
            anyhow::bail!(
                "combatant '{}' knows {} moves, at most {} are allowed",
                self.name,
                self.moves.len(),
                GameConfig::MAX_MOVES
            );
        }

        let mut moves = MoveSet::new();
        for name in &self.moves {
            let mv = catalog.iter().find(|m| &m.name == name).ok_or_else(|| {
                anyhow::anyhow!("combatant '{}' references unknown move '{}'", self.name, name)
            })?;
            moves
                .push(mv.clone())
                .map_err(|mv| anyhow::anyhow!("no room for move '{}' on '{}'", mv.name, self.name))?;
        }

        let mut combatant =
            Combatant::new(self.name.clone(), self.element, self.stats.into()).with_moves(moves);
        combatant.level = self.level;
        if let Some(position) = self.position {
            combatant = combatant.at(position);
        }
        Ok(combatant)
    }
}

/// Loader for combatant templates from RON files.
pub struct CombatantLoader;

impl CombatantLoader {
    /// Load combatants from a RON file, resolving moves against `catalog`.
    ///
    /// RON format: `Vec<CombatantTemplate>`. Names must be unique since
    /// levels refer to wild combatants by name.
    pub fn load(path: &Path, catalog: &[Move]) -> LoadResult<Vec<Combatant>> {
        let content = read_file(path)?;
        let templates: Vec<CombatantTemplate> = parse_ron(&content, path, "combatant catalog")?;

        let mut seen = HashSet::new();
        let mut combatants = Vec::with_capacity(templates.len());
        for template in &templates {
            if !seen.insert(template.name.as_str()) {
                anyhow::bail!("duplicate combatant '{}' in {}", template.name, path.display());
            }
            let combatant = template
                .build(catalog)
                .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;
            combatants.push(combatant);
        }

        tracing::debug!(path = %path.display(), count = combatants.len(), "combatants loaded");
        Ok(combatants)
    }

    /// Load combatants straight into a new roster, in file order.
    pub fn load_roster(path: &Path, catalog: &[Move]) -> LoadResult<Roster> {
        let mut roster = Roster::new();
        for combatant in Self::load(path, catalog)? {
            roster.insert(combatant);
        }
        Ok(roster)
    }
}
