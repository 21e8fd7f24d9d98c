use core::convert::Infallible;

use menupad_core::console::ConsoleOut;

/// Serial mirror writing through the USB-Serial-JTAG console.
#[derive(Default, Debug, Clone, Copy)]
pub struct SerialConsole;

impl SerialConsole {
    pub const fn new() -> Self {
        Self
    }
}

impl ConsoleOut for SerialConsole {
    type Error = Infallible;

    fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        esp_println::println!("{}", line);
        Ok(())
    }
}
