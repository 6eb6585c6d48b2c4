//! Content factory for building a playable world from data files.

use std::path::{Path, PathBuf};

use tilequest_core::{DialogueConfig, DialogueSystem, GameConfig, Level, Move, Roster};

use crate::loaders::{
    CombatantLoader, ConfigLoader, DialogueLoader, LevelLoader, LoadResult, MoveLoader,
};

/// Everything needed to start a game session on one level.
#[derive(Debug)]
pub struct GameContent {
    pub config: GameConfig,
    pub moves: Vec<Move>,
    pub roster: Roster,
    pub dialogue: DialogueSystem,
    pub level: Level,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── moves.ron
/// ├── combatants.ron
/// ├── dialogue.ron
/// └── levels/
///     ├── mossy_hollow.ron
///     └── ...
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the move catalog from `moves.ron`.
    pub fn load_moves(&self) -> LoadResult<Vec<Move>> {
        MoveLoader::load(&self.data_dir.join("moves.ron"))
    }

    /// Load combatants from `combatants.ron` into a roster.
    pub fn load_roster(&self, moves: &[Move]) -> LoadResult<Roster> {
        CombatantLoader::load_roster(&self.data_dir.join("combatants.ron"), moves)
    }

    /// Load dialogue trees from `dialogue.ron`.
    pub fn load_dialogue(&self, config: DialogueConfig) -> LoadResult<DialogueSystem> {
        DialogueLoader::load_system(&self.data_dir.join("dialogue.ron"), config)
    }

    /// Load a level from `levels/{level_name}.ron`.
    pub fn load_level(&self, level_name: &str) -> LoadResult<Level> {
        let path = self.levels_dir().join(format!("{}.ron", level_name));
        LevelLoader::load(&path)
    }

    /// File stems of every level under `levels/`, sorted.
    pub fn level_names(&self) -> LoadResult<Vec<String>> {
        let dir = self.levels_dir();
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to list levels in {}: {}", dir.display(), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_owned());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Load every file a session on `level_name` needs and cross-check them.
    ///
    /// References that do not resolve (wild names missing from the roster,
    /// interactables pointing at unknown dialogue) are logged, not fatal:
    /// the session skips the former and the dialogue system rejects the
    /// latter at runtime.
    pub fn load_game(&self, level_name: &str) -> LoadResult<GameContent> {
        let config = self.load_config()?;
        let moves = self.load_moves()?;
        let roster = self.load_roster(&moves)?;
        let dialogue = self.load_dialogue(config.dialogue.clone())?;
        let level = self.load_level(level_name)?;

        for name in level.wild.iter().filter(|name| roster.find(name).is_none()) {
            tracing::warn!(level = %level.name, wild = %name, "wild combatant not in roster");
        }
        for object in &level.interactables {
            if let Some(id) = object.dialogue.filter(|id| !dialogue.contains(*id)) {
                tracing::warn!(level = %level.name, object = %object.name, dialogue = id, "interactable references unknown dialogue");
            }
        }

        tracing::info!(
            data_dir = %self.data_dir.display(),
            level = %level.name,
            moves = moves.len(),
            combatants = roster.len(),
            dialogues = dialogue.len(),
            "game content loaded"
        );
        Ok(GameContent {
            config,
            moves,
            roster,
            dialogue,
            level,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn levels_dir(&self) -> PathBuf {
        self.data_dir.join("levels")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
        assert!(factory.load_moves().is_err());
    }

    #[test]
    fn level_names_lists_ron_files_only() {
        let dir = tempfile::tempdir().unwrap();
        let levels = dir.path().join("levels");
        std::fs::create_dir(&levels).unwrap();
        std::fs::write(levels.join("b_cave.ron"), "").unwrap();
        std::fs::write(levels.join("a_field.ron"), "").unwrap();
        std::fs::write(levels.join("notes.txt"), "").unwrap();

        let names = ContentFactory::new(dir.path()).level_names().unwrap();
        assert_eq!(names, vec!["a_field".to_string(), "b_cave".to_string()]);
    }
}
