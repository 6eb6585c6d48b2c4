//! Dialogue player opened by world interactions.
//!
//! Text is revealed typewriter-style over time. A node either continues to a
//! fixed `next` node, offers choices, or ends the conversation. A fully shown
//! end node closes on its own after [`DialogueConfig::auto_close_after`].

mod errors;
mod tree;

pub use errors::DialogueError;
pub use tree::{DialogueChoice, DialogueNode, DialogueTree};

use std::collections::HashMap;

use crate::config::DialogueConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cursor {
    dialogue: u32,
    node: usize,
}

#[derive(Clone, Debug, Default)]
pub struct DialogueSystem {
    trees: HashMap<u32, DialogueTree>,
    cursor: Option<Cursor>,
    /// Characters revealed so far; fractional between frames.
    revealed: f32,
    /// Seconds a terminal node has been fully visible.
    idle: f32,
    config: DialogueConfig,
}

impl DialogueSystem {
    pub fn new(config: DialogueConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Register a tree, replacing any tree with the same id.
    pub fn insert(&mut self, tree: DialogueTree) -> Option<DialogueTree> {
        self.trees.insert(tree.id, tree)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.trees.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.cursor.is_some()
    }

    /// Id of the open dialogue.
    pub fn current_dialogue(&self) -> Option<u32> {
        self.cursor.map(|c| c.dialogue)
    }

    pub fn current_node(&self) -> Option<&DialogueNode> {
        let cursor = self.cursor?;
        self.trees.get(&cursor.dialogue)?.node(cursor.node)
    }

    /// Open dialogue `id` at its first node. An already open dialogue is
    /// replaced.
    pub fn start_dialogue(&mut self, id: u32) -> Result<(), DialogueError> {
        let Some(tree) = self.trees.get(&id) else {
            tracing::warn!(dialogue = id, "unknown dialogue requested");
            return Err(DialogueError::UnknownDialogue(id));
        };
        if tree.nodes.is_empty() {
            tracing::warn!(dialogue = id, "dialogue has no nodes");
            return Err(DialogueError::EmptyDialogue(id));
        }

        self.enter(Cursor { dialogue: id, node: 0 });
        tracing::debug!(dialogue = id, "dialogue started");
        Ok(())
    }

    pub fn end_dialogue(&mut self) {
        if let Some(cursor) = self.cursor.take() {
            tracing::debug!(dialogue = cursor.dialogue, "dialogue ended");
        }
        self.revealed = 0.0;
        self.idle = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        let Some(node) = self.current_node() else {
            return;
        };
        let total = node.char_count() as f32;
        let terminal = node.is_terminal();

        if self.revealed < total {
            self.revealed = (self.revealed + dt * self.config.chars_per_second).min(total);
            return;
        }
        if terminal {
            self.idle += dt;
            if self.idle >= self.config.auto_close_after {
                self.end_dialogue();
            }
        }
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.current_node()
            .is_some_and(|node| self.revealed >= node.char_count() as f32)
    }

    /// The part of the current node's text shown so far.
    pub fn visible_text(&self) -> &str {
        let Some(node) = self.current_node() else {
            return "";
        };
        let shown = self.revealed as usize;
        match node.text.char_indices().nth(shown) {
            Some((byte, _)) => &node.text[..byte],
            None => &node.text,
        }
    }

    /// Choices offered by the current node.
    pub fn choices(&self) -> &[DialogueChoice] {
        self.current_node()
            .map(|node| node.choices.as_slice())
            .unwrap_or_default()
    }

    /// Respond to the "continue" input.
    ///
    /// Finishes the reveal if text is still appearing; otherwise follows the
    /// node's `next` link or closes a terminal node. Nodes with choices wait
    /// for [`DialogueSystem::choose`].
    pub fn advance(&mut self) -> Result<(), DialogueError> {
        let cursor = self.cursor.ok_or(DialogueError::NotActive)?;
        let Some(node) = self.current_node() else {
            self.end_dialogue();
            return Ok(());
        };

        let total = node.char_count() as f32;
        if self.revealed < total {
            self.revealed = total;
            return Ok(());
        }
        if !node.choices.is_empty() {
            return Ok(());
        }
        match node.next.filter(|_| !node.is_end) {
            Some(next) => self.goto(cursor.dialogue, next),
            None => self.end_dialogue(),
        }
        Ok(())
    }

    pub fn choose(&mut self, index: usize) -> Result<(), DialogueError> {
        let cursor = self.cursor.ok_or(DialogueError::NotActive)?;
        let choices = self.choices();
        let Some(choice) = choices.get(index) else {
            return Err(DialogueError::InvalidChoice {
                index,
                available: choices.len(),
            });
        };
        let next = choice.next;
        self.goto(cursor.dialogue, next);
        Ok(())
    }

    fn goto(&mut self, dialogue: u32, node: usize) {
        let exists = self
            .trees
            .get(&dialogue)
            .is_some_and(|tree| node < tree.nodes.len());
        if exists {
            self.enter(Cursor { dialogue, node });
        } else {
            tracing::warn!(dialogue, node, "dialogue link points past the last node");
            self.end_dialogue();
        }
    }

    fn enter(&mut self, cursor: Cursor) {
        self.cursor = Some(cursor);
        self.idle = 0.0;
        self.revealed = if self.config.chars_per_second > 0.0 {
            0.0
        } else {
            f32::INFINITY
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn system() -> DialogueSystem {
        let mut system = DialogueSystem::new(DialogueConfig {
            chars_per_second: 10.0,
            auto_close_after: 5.0,
        });
        system.insert(DialogueTree::new(
            1,
            vec![
                DialogueNode::line("Hello there", 1),
                DialogueNode::end("Need a hand?")
                    .with_choice("Yes", 2)
                    .with_choice("No", 3),
                DialogueNode::end("Follow me."),
                DialogueNode::end("Suit yourself."),
            ],
        ));
        system
    }

    #[test]
    fn unknown_dialogue_stays_idle() {
        let mut system = system();
        assert_eq!(system.start_dialogue(42), Err(DialogueError::UnknownDialogue(42)));
        assert!(!system.is_active());
        assert_eq!(system.visible_text(), "");
    }

    #[test]
    fn text_is_revealed_over_time() {
        let mut system = system();
        system.start_dialogue(1).unwrap();
        assert_eq!(system.visible_text(), "");
        system.update(0.5);
        assert_eq!(system.visible_text(), "Hello");
        system.update(10.0);
        assert_eq!(system.visible_text(), "Hello there");
        assert!(system.is_fully_revealed());
    }

    #[test]
    fn advance_completes_reveal_then_follows_next() {
        let mut system = system();
        system.start_dialogue(1).unwrap();
        system.advance().unwrap();
        assert_eq!(system.visible_text(), "Hello there");
        system.advance().unwrap();
        assert_eq!(system.current_node().unwrap().text, "Need a hand?");
        assert_eq!(system.visible_text(), "");
    }

    #[test]
    fn choices_branch_and_wait_for_input() {
        let mut system = system();
        system.start_dialogue(1).unwrap();
        system.advance().unwrap();
        system.advance().unwrap();
        system.advance().unwrap();
        // Fully revealed choice node does not move on by itself.
        system.advance().unwrap();
        assert_eq!(system.choices().len(), 2);
        system.update(30.0);
        assert!(system.is_active());

        assert_eq!(
            system.choose(5),
            Err(DialogueError::InvalidChoice { index: 5, available: 2 })
        );
        system.choose(1).unwrap();
        assert_eq!(system.current_node().unwrap().text, "Suit yourself.");
    }

    #[test]
    fn end_node_auto_closes() {
        let mut system = system();
        system.start_dialogue(1).unwrap();
        system.advance().unwrap();
        system.advance().unwrap();
        system.advance().unwrap();
        system.choose(0).unwrap();
        system.advance().unwrap();
        system.update(4.0);
        assert!(system.is_active());
        system.update(1.0);
        assert!(!system.is_active());
    }

    #[test]
    fn advance_on_terminal_node_closes() {
        let mut system = system();
        system.start_dialogue(1).unwrap();
        system.advance().unwrap();
        system.advance().unwrap();
        system.advance().unwrap();
        system.choose(0).unwrap();
        system.advance().unwrap();
        system.advance().unwrap();
        assert!(!system.is_active());
        assert_eq!(system.advance(), Err(DialogueError::NotActive));
    }

    #[test]
    fn zero_speed_reveals_instantly() {
        let mut system = DialogueSystem::new(DialogueConfig {
            chars_per_second: 0.0,
            ..DialogueConfig::default()
        });
        system.insert(DialogueTree::new(3, vec![DialogueNode::end("Sign: Route 1")]));
        system.start_dialogue(3).unwrap();
        assert_eq!(system.visible_text(), "Sign: Route 1");
        assert!(system.is_fully_revealed());
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundaries() {
        let mut system = DialogueSystem::new(DialogueConfig {
            chars_per_second: 1.0,
            ..DialogueConfig::default()
        });
        system.insert(DialogueTree::new(9, vec![DialogueNode::end("héllo")]));
        system.start_dialogue(9).unwrap();
        system.update(2.0);
        assert_eq!(system.visible_text(), "hé");
        assert_relative_eq!(system.revealed, 2.0);
    }
}
