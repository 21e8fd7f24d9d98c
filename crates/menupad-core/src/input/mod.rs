//! Input abstraction layer.

pub mod mock;

/// Logical keys of the 5x4 matrix keypad, named by their caps.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    Digit(u8),
    A,
    B,
    Hash,
    Star,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Cancel,
}

/// Polled key source.
///
/// Reports each physical press exactly once; holding a key does not repeat.
pub trait Keypad {
    type Error;

    fn poll_key(&mut self) -> Result<Option<Key>, Self::Error>;
}
