//! Serial mirror abstraction.

/// Blank lines pushed out to scroll the previous frame off a terminal.
pub const CLEAR_SCROLL_LINES: usize = 100;
/// Width of the horizontal rule framing each page.
pub const RULE_WIDTH: usize = 40;

/// Line-oriented text sink mirroring the panel over serial.
pub trait ConsoleOut {
    type Error;

    fn write_line(&mut self, line: &str) -> Result<(), Self::Error>;

    fn blank_line(&mut self) -> Result<(), Self::Error> {
        self.write_line("")
    }
}
