//! Level loader.
//!
//! Loads walls, interactables, spawn point and wild encounters from level
//! RON files.

use std::path::Path;

use tilequest_core::{Level, Obstacle};

use crate::loaders::{LoadResult, parse_ron, read_file};

/// Loader for levels from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a level from a RON file.
    ///
    /// RON format: a single `Level`.
    pub fn load(path: &Path) -> LoadResult<Level> {
        let content = read_file(path)?;
        let level: Level = parse_ron(&content, path, "level")?;
        validate(&level).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::debug!(
            path = %path.display(),
            level = %level.name,
            walls = level.walls.len(),
            interactables = level.interactables.len(),
            "level loaded"
        );
        Ok(level)
    }
}

fn validate(level: &Level) -> LoadResult<()> {
    if !level.encounter_rate.is_finite() || level.encounter_rate < 0.0 {
        anyhow::bail!(
            "level '{}' has an invalid encounter rate {}",
            level.name,
            level.encounter_rate
        );
    }
    if level.encounter_rate > 0.0 && level.wild.is_empty() {
        tracing::warn!(level = %level.name, "encounters enabled but no wild combatants listed");
    }
    for obstacle in level.walls.iter().chain(&level.interactables) {
        check_obstacle(level, obstacle)?;
    }
    if let Some(sign) = level.interactables.iter().find(|o| o.dialogue.is_none()) {
        tracing::warn!(level = %level.name, object = %sign.name, "interactable without dialogue");
    }
    Ok(())
}

fn check_obstacle(level: &Level, obstacle: &Obstacle) -> LoadResult<()> {
    let finite = obstacle.position.is_finite() && obstacle.size.is_finite();
    if !finite || obstacle.size.min_element() <= 0.0 {
        anyhow::bail!(
            "level '{}' has a degenerate obstacle '{}' at {} with size {}",
            level.name,
            obstacle.name,
            obstacle.position,
            obstacle.size
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::loaders::test_support::fixture;

    #[test]
    fn level_loads_with_defaults() {
        let file = fixture(
            r#"(
                name: "Mossy Hollow",
                spawn: (64.0, 64.0),
                walls: [
                    (position: (0.0, 0.0), size: (640.0, 16.0)),
                    (name: "hedge", position: (200.0, 100.0), size: (32.0, 32.0), solid: false),
                ],
                interactables: [
                    (name: "sign", position: (96.0, 40.0), size: (16.0, 16.0), dialogue: Some(1)),
                ],
                encounter_rate: 0.2,
                wild: ["Puddlefish"],
            )"#,
            "ron",
        );

        let level = LevelLoader::load(file.path()).unwrap();
        assert_eq!(level.spawn, Vec2::new(64.0, 64.0));
        assert!(level.walls[0].solid);
        assert!(!level.walls[1].solid);
        assert_eq!(level.interactables[0].dialogue, Some(1));
        assert_eq!(level.wild, vec!["Puddlefish".to_string()]);
    }

    #[test]
    fn minimal_level_has_no_encounters() {
        let file = fixture(r#"(name: "Empty", spawn: (0.0, 0.0))"#, "ron");
        let level = LevelLoader::load(file.path()).unwrap();
        assert!(level.walls.is_empty());
        assert_eq!(level.encounter_rate, 0.0);
    }

    #[test]
    fn negative_encounter_rate_is_rejected() {
        let file = fixture(r#"(name: "Bad", spawn: (0.0, 0.0), encounter_rate: -1.0)"#, "ron");
        assert!(LevelLoader::load(file.path()).is_err());
    }

    #[test]
    fn zero_sized_wall_is_rejected() {
        let file = fixture(
            r#"(name: "Bad", spawn: (0.0, 0.0), walls: [(position: (5.0, 5.0), size: (0.0, 10.0))])"#,
            "ron",
        );
        let err = LevelLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("degenerate obstacle"));
    }
}
