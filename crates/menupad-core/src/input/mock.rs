use super::{Key, Keypad};

/// No-hardware key source used during bring-up.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockKeypad;

impl MockKeypad {
    pub const fn new() -> Self {
        Self
    }
}

impl Keypad for MockKeypad {
    type Error = core::convert::Infallible;

    fn poll_key(&mut self) -> Result<Option<Key>, Self::Error> {
        Ok(None)
    }
}
