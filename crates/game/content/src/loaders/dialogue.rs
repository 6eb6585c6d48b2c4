//! Dialogue tree loader.

use std::collections::HashSet;
use std::path::Path;

use tilequest_core::{DialogueConfig, DialogueSystem, DialogueTree};

use crate::loaders::{LoadResult, parse_ron, read_file};

/// Loader for dialogue trees from RON files.
pub struct DialogueLoader;

impl DialogueLoader {
    /// Load dialogue trees from a RON file.
    ///
    /// RON format: `Vec<DialogueTree>`. Ids must be unique. Links past the
    /// last node and empty trees are kept but logged, since the dialogue
    /// system already treats them as the end of a conversation.
    pub fn load(path: &Path) -> LoadResult<Vec<DialogueTree>> {
        let content = read_file(path)?;
        let trees: Vec<DialogueTree> = parse_ron(&content, path, "dialogue")?;

        let mut ids = HashSet::new();
        for tree in &trees {
            if !ids.insert(tree.id) {
                anyhow::bail!("duplicate dialogue id {} in {}", tree.id, path.display());
            }
            if tree.nodes.is_empty() {
                tracing::warn!(dialogue = tree.id, "dialogue has no nodes");
            }
            let dangling = tree.dangling_links();
            if !dangling.is_empty() {
                tracing::warn!(dialogue = tree.id, ?dangling, "dialogue links past its last node");
            }
        }

        tracing::debug!(path = %path.display(), count = trees.len(), "dialogue loaded");
        Ok(trees)
    }

    /// Load trees into a ready dialogue system.
    pub fn load_system(path: &Path, config: DialogueConfig) -> LoadResult<DialogueSystem> {
        let mut system = DialogueSystem::new(config);
        for tree in Self::load(path)? {
            system.insert(tree);
        }
        Ok(system)
    }
}
