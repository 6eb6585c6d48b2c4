//! Move catalog loader.

use std::collections::HashSet;
use std::path::Path;

use tilequest_core::Move;

use crate::loaders::{LoadResult, parse_ron, read_file};

/// Loader for the move catalog from RON files.
pub struct MoveLoader;

impl MoveLoader {
    /// Load the move catalog from a RON file.
    ///
    /// RON format: `Vec<Move>`. Names must be unique; accuracy is clamped to
    /// the 0-100 scale.
    pub fn load(path: &Path) -> LoadResult<Vec<Move>> {
        let content = read_file(path)?;
        let moves: Vec<Move> = parse_ron(&content, path, "move catalog")?;
        let moves = Self::validate(moves)?;

        tracing::debug!(path = %path.display(), count = moves.len(), "move catalog loaded");
        Ok(moves)
    }

    fn validate(mut moves: Vec<Move>) -> LoadResult<Vec<Move>> {
        let mut seen = HashSet::new();
        for mv in &mut moves {
            if mv.name.trim().is_empty() {
                anyhow::bail!("move with an empty name");
            }
            if !seen.insert(mv.name.clone()) {
                anyhow::bail!("duplicate move '{}'", mv.name);
            }
            if !mv.accuracy.is_finite() {
                anyhow::bail!("move '{}' has a non-finite accuracy", mv.name);
            }
            mv.accuracy = mv.accuracy.clamp(0.0, 100.0);
        }
        Ok(moves)
    }
}

#[cfg(test)]
mod tests {
    use tilequest_core::{Element, StatusCondition};

    use super::*;
    use crate::loaders::test_support::fixture;

    #[test]
    fn loads_damage_and_status_moves() {
        let file = fixture(
            r#"[
                (name: "Bubble", element: Water, power: 40, accuracy: 100.0, uses: 30),
                (
                    name: "Toxic Spore",
                    description: "Poisons the target",
                    element: Insect,
                    power: 0,
                    accuracy: 85.0,
                    uses: 10,
                    inflicts: Some(Poison),
                ),
            ]"#,
            "ron",
        );

        let moves = MoveLoader::load(file.path()).unwrap();
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].element, Element::Water);
        assert!(moves[0].description.is_empty());
        assert!(moves[1].is_status_move());
        assert_eq!(moves[1].inflicts, Some(StatusCondition::Poison));
    }

    #[test]
    fn accuracy_is_clamped() {
        let file = fixture(r#"[(name: "Wild Swing", power: 90, accuracy: 180.0, uses: 5)]"#, "ron");
        let moves = MoveLoader::load(file.path()).unwrap();
        assert_eq!(moves[0].accuracy, 100.0);
        assert_eq!(moves[0].element, Element::Normal);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let file = fixture(
            r#"[
                (name: "Tackle", power: 50, accuracy: 95.0, uses: 35),
                (name: "Tackle", power: 45, accuracy: 95.0, uses: 35),
            ]"#,
            "ron",
        );
        let err = MoveLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("duplicate move 'Tackle'"));
    }

    #[test]
    fn malformed_ron_names_the_file() {
        let file = fixture("[(name: \"Tackle\", power: )]", "ron");
        let err = MoveLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("move catalog"));
    }
}
