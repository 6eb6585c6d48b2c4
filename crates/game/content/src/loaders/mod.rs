//! Content loaders for reading game data from files.
//!
//! Every loader parses one file format into core types and validates the
//! result. [`ContentFactory`] ties them to a data directory layout.

pub mod combatants;
pub mod config;
pub mod dialogue;
pub mod factory;
pub mod level;
pub mod moves;

pub use combatants::{CombatantLoader, CombatantTemplate, StatBlock};
pub use config::ConfigLoader;
pub use dialogue::DialogueLoader;
pub use factory::{ContentFactory, GameContent};
pub use level::LevelLoader;
pub use moves::MoveLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Parse a RON document, naming the file and what it should contain on failure.
pub(crate) fn parse_ron<T: serde::de::DeserializeOwned>(
    content: &str,
    path: &Path,
    what: &str,
) -> LoadResult<T> {
    ron::from_str(content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} RON at {}: {}", what, path.display(), e))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Write;

    use tempfile::NamedTempFile;

    /// Write `content` to a fresh temporary file with the given extension.
    pub fn fixture(content: &str, extension: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(&format!(".{extension}"))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }
}
