use embedded_hal::digital::{InputPin, OutputPin};
use log::debug;

use menupad_core::input::{Key, Keypad};

/// Rows of the key matrix, driven low one at a time during a scan.
pub const ROW_COUNT: usize = 5;
/// Columns of the key matrix, read back with pull-ups.
pub const COL_COUNT: usize = 4;

// Key legend laid out as printed on the pad, row by row.
const KEYMAP: [[Key; COL_COUNT]; ROW_COUNT] = [
    [Key::A, Key::B, Key::Hash, Key::Star],
    [Key::Digit(1), Key::Digit(2), Key::Digit(3), Key::Up],
    [Key::Digit(4), Key::Digit(5), Key::Digit(6), Key::Down],
    [Key::Digit(7), Key::Digit(8), Key::Digit(9), Key::Cancel],
    [Key::Left, Key::Digit(0), Key::Right, Key::Enter],
];

#[derive(Debug, Clone, Copy)]
pub struct KeypadConfig {
    debounce_polls: u8,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self { debounce_polls: 2 }
    }
}

impl KeypadConfig {
    pub const fn with_debounce_polls(mut self, debounce_polls: u8) -> Self {
        self.debounce_polls = debounce_polls;
        self
    }
}

#[derive(Debug)]
pub enum KeypadError<RowErr, ColErr> {
    Row(RowErr),
    Col(ColErr),
}

type KeypadResult<RowErr, ColErr, T> = Result<T, KeypadError<RowErr, ColErr>>;

/// Polled scanner for a 5x4 key matrix.
///
/// Rows idle high and are pulled low one at a time; a pressed key shows up
/// as a low column during its row's turn. Presses are debounced over
/// consecutive polls and reported once on the settled edge.
#[derive(Debug)]
pub struct MatrixKeypad<R, C> {
    rows: [R; ROW_COUNT],
    cols: [C; COL_COUNT],
    config: KeypadConfig,
    raw: Option<(u8, u8)>,
    stable: Option<(u8, u8)>,
    stable_count: u8,
}

impl<R, C> MatrixKeypad<R, C>
where
    R: OutputPin,
    C: InputPin,
{
    pub fn new(
        mut rows: [R; ROW_COUNT],
        cols: [C; COL_COUNT],
        config: KeypadConfig,
    ) -> KeypadResult<R::Error, C::Error, Self> {
        for row in &mut rows {
            row.set_high().map_err(KeypadError::Row)?;
        }

        Ok(Self {
            rows,
            cols,
            config,
            raw: None,
            stable: None,
            stable_count: 0,
        })
    }

    /// One full matrix pass; returns the first pressed position found.
    fn scan(&mut self) -> KeypadResult<R::Error, C::Error, Option<(u8, u8)>> {
        let mut found = None;

        for row_idx in 0..ROW_COUNT {
            self.rows[row_idx].set_low().map_err(KeypadError::Row)?;

            for col_idx in 0..COL_COUNT {
                let pressed = self.cols[col_idx].is_low().map_err(KeypadError::Col)?;
                if pressed && found.is_none() {
                    found = Some((row_idx as u8, col_idx as u8));
                }
            }

            self.rows[row_idx].set_high().map_err(KeypadError::Row)?;
        }

        Ok(found)
    }
}

impl<R, C> Keypad for MatrixKeypad<R, C>
where
    R: OutputPin,
    C: InputPin,
{
    type Error = KeypadError<R::Error, C::Error>;

    fn poll_key(&mut self) -> Result<Option<Key>, Self::Error> {
        let scanned = self.scan()?;

        if scanned == self.raw {
            self.stable_count = self.stable_count.saturating_add(1);
        } else {
            self.raw = scanned;
            self.stable_count = 0;
        }

        let threshold = self.config.debounce_polls.max(1);
        if self.stable_count >= threshold && self.stable != self.raw {
            self.stable = self.raw;
            if let Some((row, col)) = self.stable {
                let key = KEYMAP[row as usize][col as usize];
                debug!("matrix-keypad: press row={} col={} key={:?}", row, col, key);
                return Ok(Some(key));
            }
        }

        Ok(None)
    }
}

#[cfg(all(test, not(target_arch = "xtensa")))]
mod tests {
    use core::{cell::Cell, convert::Infallible};

    use embedded_hal::digital::ErrorType;

    use super::*;

    /// Electrical state of the fake pad: which row is currently driven low
    /// and which contacts are closed.
    struct PadState {
        driven_low: Cell<Option<usize>>,
        contacts: Cell<[Option<(usize, usize)>; 2]>,
    }

    impl PadState {
        const fn new() -> Self {
            Self {
                driven_low: Cell::new(None),
                contacts: Cell::new([None; 2]),
            }
        }

        fn press(&self, row: usize, col: usize) {
            self.contacts.set([Some((row, col)), None]);
        }

        fn release_all(&self) {
            self.contacts.set([None; 2]);
        }
    }

    struct RowPin<'a> {
        index: usize,
        state: &'a PadState,
    }

    impl ErrorType for RowPin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for RowPin<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.state.driven_low.set(Some(self.index));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            if self.state.driven_low.get() == Some(self.index) {
                self.state.driven_low.set(None);
            }
            Ok(())
        }
    }

    struct ColPin<'a> {
        index: usize,
        state: &'a PadState,
    }

    impl ColPin<'_> {
        fn closed(&self) -> bool {
            let Some(row) = self.state.driven_low.get() else {
                return false;
            };
            self.state
                .contacts
                .get()
                .iter()
                .flatten()
                .any(|&(contact_row, contact_col)| contact_row == row && contact_col == self.index)
        }
    }

    impl ErrorType for ColPin<'_> {
        type Error = Infallible;
    }

    impl InputPin for ColPin<'_> {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.closed())
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(self.closed())
        }
    }

    fn pad(state: &PadState, config: KeypadConfig) -> MatrixKeypad<RowPin<'_>, ColPin<'_>> {
        let rows = core::array::from_fn(|index| RowPin { index, state });
        let cols = core::array::from_fn(|index| ColPin { index, state });
        MatrixKeypad::new(rows, cols, config).unwrap()
    }

    #[test]
    fn a_held_key_reports_exactly_once() {
        let state = PadState::new();
        let mut keypad = pad(&state, KeypadConfig::default());

        state.press(1, 3);
        assert_eq!(keypad.poll_key().unwrap(), None);
        assert_eq!(keypad.poll_key().unwrap(), None);
        assert_eq!(keypad.poll_key().unwrap(), Some(Key::Up));
        assert_eq!(keypad.poll_key().unwrap(), None);
        assert_eq!(keypad.poll_key().unwrap(), None);
    }

    #[test]
    fn chatter_restarts_the_debounce_window() {
        let state = PadState::new();
        let mut keypad = pad(&state, KeypadConfig::default());

        state.press(2, 3);
        assert_eq!(keypad.poll_key().unwrap(), None);
        state.release_all();
        assert_eq!(keypad.poll_key().unwrap(), None);
        state.press(2, 3);
        assert_eq!(keypad.poll_key().unwrap(), None);
        assert_eq!(keypad.poll_key().unwrap(), None);
        assert_eq!(keypad.poll_key().unwrap(), Some(Key::Down));
    }

    #[test]
    fn releasing_then_pressing_reports_the_new_key() {
        let state = PadState::new();
        let mut keypad = pad(&state, KeypadConfig::default());

        state.press(1, 3);
        for _ in 0..2 {
            assert_eq!(keypad.poll_key().unwrap(), None);
        }
        assert_eq!(keypad.poll_key().unwrap(), Some(Key::Up));

        state.release_all();
        for _ in 0..3 {
            assert_eq!(keypad.poll_key().unwrap(), None);
        }

        state.press(4, 3);
        for _ in 0..2 {
            assert_eq!(keypad.poll_key().unwrap(), None);
        }
        assert_eq!(keypad.poll_key().unwrap(), Some(Key::Enter));
    }

    #[test]
    fn the_first_contact_in_scan_order_wins() {
        let state = PadState::new();
        let mut keypad = pad(&state, KeypadConfig::default());

        state.contacts.set([Some((2, 1)), Some((3, 2))]);
        assert_eq!(keypad.poll_key().unwrap(), None);
        assert_eq!(keypad.poll_key().unwrap(), None);
        assert_eq!(keypad.poll_key().unwrap(), Some(Key::Digit(5)));
    }

    #[test]
    fn debounce_threshold_follows_the_configuration() {
        let state = PadState::new();
        let mut keypad = pad(&state, KeypadConfig::default().with_debounce_polls(1));

        state.press(3, 0);
        assert_eq!(keypad.poll_key().unwrap(), None);
        assert_eq!(keypad.poll_key().unwrap(), Some(Key::Digit(7)));
    }

    #[test]
    fn keymap_matches_the_pad_legend() {
        assert_eq!(KEYMAP[0][0], Key::A);
        assert_eq!(KEYMAP[0][3], Key::Star);
        assert_eq!(KEYMAP[1][3], Key::Up);
        assert_eq!(KEYMAP[2][3], Key::Down);
        assert_eq!(KEYMAP[3][3], Key::Cancel);
        assert_eq!(KEYMAP[4][0], Key::Left);
        assert_eq!(KEYMAP[4][1], Key::Digit(0));
        assert_eq!(KEYMAP[4][3], Key::Enter);
    }
}
