#![cfg_attr(not(test), no_std)]

//! Platform-independent menu navigation core: the page table, cursor state
//! machine, window math, and a renderer that drives a 20x4 character panel
//! together with its serial mirror.

pub mod app;
pub mod console;
pub mod display;
pub mod input;
pub mod page;
pub mod render;
pub mod time;
pub mod window;
