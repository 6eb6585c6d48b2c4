//! Game configuration loader.

use std::path::Path;

use tilequest_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Every section and key is optional; missing values keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::debug!(path = %path.display(), "game config loaded");
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        validate(&config)?;
        Ok(config)
    }
}

fn validate(config: &GameConfig) -> LoadResult<()> {
    let battle = &config.battle;
    if battle.random_factor_min > battle.random_factor_max {
        anyhow::bail!(
            "battle.random_factor_min ({}) exceeds battle.random_factor_max ({})",
            battle.random_factor_min,
            battle.random_factor_max
        );
    }
    for (key, value) in [
        ("battle.start_delay", battle.start_delay),
        ("battle.turn_delay", battle.turn_delay),
        ("battle.outcome_delay", battle.outcome_delay),
        ("collider.interaction_radius", config.collider.interaction_radius),
        ("collider.interaction_cooldown", config.collider.interaction_cooldown),
        ("encounter.grace_period", config.encounter.grace_period),
    ] {
        if !value.is_finite() || value < 0.0 {
            anyhow::bail!("{key} must be a non-negative number, got {value}");
        }
    }
    Ok(())
}
