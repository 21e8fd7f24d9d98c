#![cfg_attr(not(test), no_std)]

//! HD44780 20x4 character LCD driver, spoken through a PCF8574 I2C backpack.

pub mod protocol;

use embedded_hal::{delay::DelayNs, i2c::I2c};

/// Driver configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// Seven-bit address of the PCF8574 expander.
    pub address: u8,
    /// Backlight state applied from the first frame onwards.
    pub backlight: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: protocol::DEFAULT_ADDRESS,
            backlight: true,
        }
    }
}

/// Driver errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error<I2cErr> {
    /// Bus transaction failed.
    I2c(I2cErr),
    /// Input parameters are outside supported bounds.
    InvalidInput,
}

pub type DriverResult<I2cErr> = Result<(), Error<I2cErr>>;

/// HD44780-over-PCF8574 driver.
///
/// The controller is used write-only; `RW` is tied low in every frame, so
/// busy-flag polling is replaced by the datasheet's worst-case delays.
#[derive(Debug)]
pub struct Lcd2004<I2C> {
    i2c: I2C,
    config: Config,
    backlight: bool,
}

impl<I2C> Lcd2004<I2C>
where
    I2C: I2c,
{
    /// Creates a new driver instance.
    pub fn new(i2c: I2C, config: Config) -> Self {
        Self {
            i2c,
            config,
            backlight: config.backlight,
        }
    }

    /// Returns current configuration.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Releases the owned bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Runs the 4-bit initialization-by-instruction sequence.
    ///
    /// Leaves the panel on, cleared, entry mode left-to-right, cursor and
    /// blink off.
    pub fn initialize<D>(&mut self, delay: &mut D) -> DriverResult<I2C::Error>
    where
        D: DelayNs,
    {
        // Power-on settle before the controller accepts instructions.
        delay.delay_ms(50);

        // Three 8-bit function-set probes, then the switch to 4-bit mode.
        self.write_nibble(0x03)?;
        delay.delay_us(4_500);
        self.write_nibble(0x03)?;
        delay.delay_us(150);
        self.write_nibble(0x03)?;
        delay.delay_us(150);
        self.write_nibble(0x02)?;

        self.command(protocol::CMD_FUNCTION_SET | protocol::FUNCTION_2LINE)?;
        self.command(protocol::CMD_DISPLAY_CONTROL | protocol::DISPLAY_ON)?;
        self.clear(delay)?;
        self.command(protocol::CMD_ENTRY_MODE_SET | protocol::ENTRY_INCREMENT)
    }

    /// Blanks the whole glass and homes the address counter.
    pub fn clear<D>(&mut self, delay: &mut D) -> DriverResult<I2C::Error>
    where
        D: DelayNs,
    {
        self.command(protocol::CMD_CLEAR_DISPLAY)?;
        delay.delay_us(2_000);
        Ok(())
    }

    /// Returns the cursor to (0, 0) without blanking.
    pub fn home<D>(&mut self, delay: &mut D) -> DriverResult<I2C::Error>
    where
        D: DelayNs,
    {
        self.command(protocol::CMD_RETURN_HOME)?;
        delay.delay_us(2_000);
        Ok(())
    }

    /// Moves the cursor to a `(col, row)` position on the 20x4 glass.
    pub fn set_cursor(&mut self, col: u8, row: u8) -> DriverResult<I2C::Error> {
        let command = protocol::ddram_command(col, row).ok_or(Error::InvalidInput)?;
        self.command(command)
    }

    /// Writes one character cell.
    pub fn write_byte(&mut self, byte: u8) -> DriverResult<I2C::Error> {
        self.write_register(byte, true)
    }

    /// Writes a string starting at the current cursor position.
    ///
    /// Bytes index the controller's character ROM directly; the caller keeps
    /// to ASCII for the stock A00 ROM.
    pub fn write_str(&mut self, text: &str) -> DriverResult<I2C::Error> {
        for byte in text.bytes() {
            self.write_byte(byte)?;
        }

        Ok(())
    }

    /// Turns the backlight on.
    pub fn backlight_on(&mut self) -> DriverResult<I2C::Error> {
        self.set_backlight(true)
    }

    /// Turns the backlight off.
    pub fn backlight_off(&mut self) -> DriverResult<I2C::Error> {
        self.set_backlight(false)
    }

    fn set_backlight(&mut self, on: bool) -> DriverResult<I2C::Error> {
        self.backlight = on;
        let frame = protocol::build_backlight_frame(on);
        self.i2c
            .write(self.config.address, &frame)
            .map_err(Error::I2c)
    }

    fn command(&mut self, command: u8) -> DriverResult<I2C::Error> {
        self.write_register(command, false)
    }

    fn write_register(&mut self, value: u8, data_register: bool) -> DriverResult<I2C::Error> {
        let frames = protocol::build_byte_frames(value, data_register, self.backlight);
        self.i2c
            .write(self.config.address, &frames)
            .map_err(Error::I2c)
    }

    fn write_nibble(&mut self, nibble: u8) -> DriverResult<I2C::Error> {
        let frames = protocol::build_nibble_frames(nibble, self.backlight);
        self.i2c
            .write(self.config.address, &frames)
            .map_err(Error::I2c)
    }
}
