//! Bounded battle log.

use std::collections::VecDeque;

use crate::config::GameConfig;

/// Ring buffer of human-readable battle messages.
///
/// Holds at most [`GameConfig::MAX_LOG_ENTRIES`]; pushing past the cap evicts
/// the oldest entry. Every entry is mirrored to `tracing` under the `battle`
/// target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BattleLog {
    entries: VecDeque<String>,
}

impl BattleLog {
    pub const CAPACITY: usize = GameConfig::MAX_LOG_ENTRIES;

    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(Self::CAPACITY),
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(target: "battle", "{}", message);
        if self.entries.len() == Self::CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(message);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn contains(&self, message: &str) -> bool {
        self.entries.iter().any(|e| e == message)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
