//! Keypad input drivers.

pub mod keypad;
