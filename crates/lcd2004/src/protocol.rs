//! HD44780 instruction set and PCF8574 frame packing for the 2004 module.

/// Visible columns.
pub const COLS: usize = 20;
/// Visible rows.
pub const ROWS: usize = 4;

/// Factory-default seven-bit address of the PCF8574 backpack.
pub const DEFAULT_ADDRESS: u8 = 0x27;

/// Number of expander frames one register write expands to.
pub const BYTE_FRAMES: usize = 4;
/// Number of expander frames one bare-nibble write expands to.
pub const NIBBLE_FRAMES: usize = 2;

// HD44780 instruction bytes.
pub const CMD_CLEAR_DISPLAY: u8 = 0x01;
pub const CMD_RETURN_HOME: u8 = 0x02;
pub const CMD_ENTRY_MODE_SET: u8 = 0x04;
pub const CMD_DISPLAY_CONTROL: u8 = 0x08;
pub const CMD_FUNCTION_SET: u8 = 0x20;
pub const CMD_SET_DDRAM_ADDR: u8 = 0x80;

/// Entry mode: move the address counter right after each write.
pub const ENTRY_INCREMENT: u8 = 0x02;
/// Display control: panel output enabled.
pub const DISPLAY_ON: u8 = 0x04;
/// Function set: two-row addressing (the 20x4 glass is wired as two rows).
pub const FUNCTION_2LINE: u8 = 0x08;

// PCF8574 port mapping used by the common backpack boards:
// P0=RS, P1=RW, P2=EN, P3=backlight, P4..P7=D4..D7.
const PIN_RS: u8 = 0x01;
const PIN_EN: u8 = 0x04;
const PIN_BACKLIGHT: u8 = 0x08;

/// DDRAM start address of each row.
///
/// Rows 0/2 and 1/3 share the two hardware lines, which is why the offsets
/// interleave instead of increasing monotonically.
pub const ROW_OFFSETS: [u8; ROWS] = [0x00, 0x40, 0x14, 0x54];

#[inline]
const fn expander_bits(nibble_high: u8, data_register: bool, backlight: bool) -> u8 {
    let mut bits = nibble_high & 0xF0;
    if data_register {
        bits |= PIN_RS;
    }
    if backlight {
        bits |= PIN_BACKLIGHT;
    }
    bits
}

/// Builds the set-DDRAM-address command for a `(col, row)` position.
///
/// Returns `None` for positions outside the 20x4 glass.
#[inline]
pub fn ddram_command(col: u8, row: u8) -> Option<u8> {
    if col as usize >= COLS || row as usize >= ROWS {
        return None;
    }

    Some(CMD_SET_DDRAM_ADDR | (ROW_OFFSETS[row as usize] + col))
}

/// Expands one register write into its four expander frames.
///
/// Layout per nibble: the frame with `EN` high, then the same frame with
/// `EN` low. The falling edge latches the nibble; `RW` stays low (write-only
/// bus use).
#[inline]
pub fn build_byte_frames(value: u8, data_register: bool, backlight: bool) -> [u8; BYTE_FRAMES] {
    let high = expander_bits(value, data_register, backlight);
    let low = expander_bits(value << 4, data_register, backlight);

    [high | PIN_EN, high, low | PIN_EN, low]
}

/// Expands a bare high-nibble write (initialization-by-instruction phase,
/// before the controller is in 4-bit mode).
#[inline]
pub fn build_nibble_frames(nibble: u8, backlight: bool) -> [u8; NIBBLE_FRAMES] {
    let bits = expander_bits(nibble << 4, false, backlight);

    [bits | PIN_EN, bits]
}

/// Frame carrying only the backlight state, for toggling it without
/// touching the controller.
#[inline]
pub fn build_backlight_frame(backlight: bool) -> [u8; 1] {
    [if backlight { PIN_BACKLIGHT } else { 0x00 }]
}
