//! Character panel abstraction.

/// Columns on the glass.
pub const LCD_COLS: u8 = 20;
/// Rows on the glass.
pub const LCD_ROWS: u8 = 4;
/// Rows available for items below the title row.
pub const LCD_CONTENT_ROWS: u8 = 3;

/// Write-only 20x4 character panel.
///
/// Writes land at the current cursor position and advance it; nothing here
/// reads the glass back.
pub trait CharDisplay {
    type Error;

    fn clear(&mut self) -> Result<(), Self::Error>;

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error>;

    fn write_str(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Writes `value` in decimal at the cursor.
    fn write_number(&mut self, value: u8) -> Result<(), Self::Error>;
}
