use core::fmt::Write;

use embedded_hal::i2c::I2c;
use esp_hal::delay::Delay;
use heapless::String as HeaplessString;
use lcd2004::{Error as DriverError, Lcd2004};

use menupad_core::display::CharDisplay;

/// Board-level adapter putting the I2C character panel behind the core's
/// display capability.
#[derive(Debug)]
pub struct PanelDisplay<I2C> {
    lcd: Lcd2004<I2C>,
    delay: Delay,
}

impl<I2C> PanelDisplay<I2C>
where
    I2C: I2c,
{
    pub fn new(lcd: Lcd2004<I2C>, delay: Delay) -> Self {
        Self { lcd, delay }
    }

    /// Releases the owned driver.
    pub fn release(self) -> Lcd2004<I2C> {
        self.lcd
    }
}

impl<I2C> CharDisplay for PanelDisplay<I2C>
where
    I2C: I2c,
{
    type Error = DriverError<I2C::Error>;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.lcd.clear(&mut self.delay)
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error> {
        self.lcd.set_cursor(col, row)
    }

    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        self.lcd.write_str(text)
    }

    fn write_number(&mut self, value: u8) -> Result<(), Self::Error> {
        let mut text = HeaplessString::<3>::new();
        let _ = write!(text, "{}", value);
        self.lcd.write_str(text.as_str())
    }
}
