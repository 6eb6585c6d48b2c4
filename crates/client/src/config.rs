//! Client configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Settings for one headless run.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Directory holding `config.toml`, `moves.ron`, `levels/` and friends.
    pub data_dir: PathBuf,
    /// Level file stem under `levels/`.
    pub level: String,
    /// Seed for every random roll. `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Number of frames to simulate.
    pub frames: u32,
    /// Simulated seconds per frame.
    pub frame_time: f32,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            level: "mossy_hollow".to_string(),
            seed: None,
            frames: 3600,
            frame_time: 1.0 / 60.0,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Read overrides from the environment.
    ///
    /// - `TILEQUEST_DATA_DIR`
    /// - `TILEQUEST_LEVEL`
    /// - `TILEQUEST_SEED`
    /// - `TILEQUEST_FRAMES`
    /// - `TILEQUEST_LOG_DIR`
    ///
    /// Values that do not parse are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("TILEQUEST_DATA_DIR").filter(|v| !v.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(level) = lookup("TILEQUEST_LEVEL").filter(|v| !v.is_empty()) {
            config.level = level;
        }
        config.seed = parse(&lookup, "TILEQUEST_SEED");
        if let Some(frames) = parse::<u32>(&lookup, "TILEQUEST_FRAMES") {
            config.frames = frames;
        }
        config.log_dir = lookup("TILEQUEST_LOG_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        config
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(config_from(&[]), ClientConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = config_from(&[
            ("TILEQUEST_DATA_DIR", "/srv/tilequest"),
            ("TILEQUEST_LEVEL", "quiet_cave"),
            ("TILEQUEST_SEED", " 42 "),
            ("TILEQUEST_FRAMES", "120"),
            ("TILEQUEST_LOG_DIR", "/tmp/tq-logs"),
        ]);
        assert_eq!(config.data_dir, PathBuf::from("/srv/tilequest"));
        assert_eq!(config.level, "quiet_cave");
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.frames, 120);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/tq-logs")));
    }

    #[test]
    fn unparsable_numbers_are_ignored() {
        let config = config_from(&[("TILEQUEST_SEED", "lucky"), ("TILEQUEST_FRAMES", "-3")]);
        assert_eq!(config.seed, None);
        assert_eq!(config.frames, ClientConfig::default().frames);
    }
}
