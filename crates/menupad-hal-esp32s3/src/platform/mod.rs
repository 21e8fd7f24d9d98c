//! Board-level peripheral adapters.

pub mod console;
pub mod display;
pub mod time;
