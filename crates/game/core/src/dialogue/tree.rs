//! Dialogue data: trees of text nodes linked by index.

/// A reply the player can pick at a node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogueChoice {
    pub label: String,
    /// Node index this choice leads to.
    pub next: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogueNode {
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub choices: Vec<DialogueChoice>,
    /// Follow-up node when there are no choices. `None` ends the dialogue.
    #[cfg_attr(feature = "serde", serde(default))]
    pub next: Option<usize>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_end: bool,
}

impl DialogueNode {
    /// A plain line that continues to `next`.
    pub fn line(text: impl Into<String>, next: usize) -> Self {
        Self {
            text: text.into(),
            choices: Vec::new(),
            next: Some(next),
            is_end: false,
        }
    }

    /// A closing line.
    pub fn end(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            choices: Vec::new(),
            next: None,
            is_end: true,
        }
    }

    #[must_use]
    pub fn with_choice(mut self, label: impl Into<String>, next: usize) -> Self {
        self.choices.push(DialogueChoice {
            label: label.into(),
            next,
        });
        self.is_end = false;
        self
    }

    /// Nothing follows this node.
    pub fn is_terminal(&self) -> bool {
        self.choices.is_empty() && (self.is_end || self.next.is_none())
    }

    pub(crate) fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// One conversation. Starts at node 0.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogueTree {
    pub id: u32,
    pub nodes: Vec<DialogueNode>,
}

impl DialogueTree {
    pub fn new(id: u32, nodes: Vec<DialogueNode>) -> Self {
        Self { id, nodes }
    }

    pub fn node(&self, index: usize) -> Option<&DialogueNode> {
        self.nodes.get(index)
    }

    /// Indices referenced by `next` or a choice that point past the last node.
    pub fn dangling_links(&self) -> Vec<usize> {
        let len = self.nodes.len();
        self.nodes
            .iter()
            .flat_map(|node| node.next.into_iter().chain(node.choices.iter().map(|c| c.next)))
            .filter(|&next| next >= len)
            .collect()
    }
}
