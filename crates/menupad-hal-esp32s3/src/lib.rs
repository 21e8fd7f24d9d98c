#![no_std]

//! ESP32-S3 adapters binding the menu core to real peripherals: the matrix
//! keypad scanner, the I2C character panel, the serial mirror, and the
//! cycle clock.

pub mod input;
pub mod platform;
