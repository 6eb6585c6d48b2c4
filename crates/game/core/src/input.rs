//! Keyboard state as seen by the frame-driven systems.
//!
//! Polling the window is the client's job; the core only asks whether a key
//! is held right now.

use bitflags::bitflags;

/// Logical keys the exploration mode reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Interact,
}

/// Source of "is this key held" answers.
pub trait KeyState {
    fn is_down(&self, key: Key) -> bool;
}

bitflags! {
    /// Snapshot of held keys for one frame.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HeldKeys: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const INTERACT = 1 << 4;
    }
}

impl HeldKeys {
    pub const fn from_key(key: Key) -> Self {
        match key {
            Key::Up => Self::UP,
            Key::Down => Self::DOWN,
            Key::Left => Self::LEFT,
            Key::Right => Self::RIGHT,
            Key::Interact => Self::INTERACT,
        }
    }
}

impl From<Key> for HeldKeys {
    fn from(key: Key) -> Self {
        Self::from_key(key)
    }
}

impl FromIterator<Key> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |held, key| held | Self::from_key(key))
    }
}

impl KeyState for HeldKeys {
    fn is_down(&self, key: Key) -> bool {
        self.contains(Self::from_key(key))
    }
}
