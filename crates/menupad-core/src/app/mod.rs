//! Cursor state machine and the cycle supervisor driving it.

use core::convert::Infallible;

use log::debug;

use crate::{
    console::ConsoleOut,
    display::CharDisplay,
    input::{Key, Keypad},
    page::MenuPage,
    render::{RenderError, render_page},
    time::CadenceClock,
};

/// Cycle pacing configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MenuConfig {
    /// Minimum duration of one poll/render cycle.
    pub cycle_ms: u32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self { cycle_ms: 25 }
    }
}

impl MenuConfig {
    pub const fn with_cycle_ms(mut self, cycle_ms: u32) -> Self {
        self.cycle_ms = cycle_ms;
        self
    }
}

/// Cursor state for one visit to a page.
///
/// Owns the selection and the redraw flag; page transitions are reported to
/// the caller rather than taken here.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageController {
    page: MenuPage,
    selected: u8,
    pending_redraw: bool,
}

impl PageController {
    /// Starts a visit with the cursor on `selected`, clamped to the page's
    /// items, and an entry redraw pending.
    pub fn new(page: MenuPage, selected: u8) -> Self {
        let item_count = page.spec().item_count;
        Self {
            page,
            selected: selected.clamp(1, item_count),
            pending_redraw: true,
        }
    }

    pub fn page(&self) -> MenuPage {
        self.page
    }

    /// One-based position of the cursor.
    pub fn selected(&self) -> u8 {
        self.selected
    }

    /// Clears and returns the redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        let pending = self.pending_redraw;
        self.pending_redraw = false;
        pending
    }

    /// Feeds one polled key into the page.
    ///
    /// Returns the page to hand control to when the key ends this visit.
    /// Keys without a role on the current page are ignored.
    pub fn apply_key(&mut self, key: Option<Key>) -> Option<MenuPage> {
        let key = key?;
        let item_count = self.page.spec().item_count;

        match key {
            Key::Down => {
                self.selected = if self.selected == item_count {
                    1
                } else {
                    self.selected + 1
                };
                self.pending_redraw = true;
                debug!(
                    "menu-nav: down page={:?} selected={}/{}",
                    self.page, self.selected, item_count
                );
                None
            }
            Key::Up => {
                self.selected = if self.selected == 1 {
                    item_count
                } else {
                    self.selected - 1
                };
                self.pending_redraw = true;
                debug!(
                    "menu-nav: up page={:?} selected={}/{}",
                    self.page, self.selected, item_count
                );
                None
            }
            Key::Enter if self.page.is_root() => {
                let target = MenuPage::submenu(self.selected);
                debug!(
                    "menu-nav: enter selected={} target={:?}",
                    self.selected, target
                );
                Some(target)
            }
            Key::Cancel if !self.page.is_root() => {
                debug!("menu-nav: cancel page={:?}", self.page);
                Some(MenuPage::Root)
            }
            _ => None,
        }
    }
}

/// Faults escalated out of the supervisor loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuError<KeyErr, DispErr, ConErr> {
    Keypad(KeyErr),
    Display(DispErr),
    Console(ConErr),
}

impl<KeyErr, DispErr, ConErr> From<RenderError<DispErr, ConErr>>
    for MenuError<KeyErr, DispErr, ConErr>
{
    fn from(err: RenderError<DispErr, ConErr>) -> Self {
        match err {
            RenderError::Display(err) => Self::Display(err),
            RenderError::Console(err) => Self::Console(err),
        }
    }
}

/// Supervisor owning the peripherals and the page-to-page control flow.
pub struct MenuApp<K, D, C, T>
where
    K: Keypad,
    D: CharDisplay,
    C: ConsoleOut,
    T: CadenceClock,
{
    keypad: K,
    display: D,
    console: C,
    clock: T,
    config: MenuConfig,
    root_selected: u8,
}

impl<K, D, C, T> MenuApp<K, D, C, T>
where
    K: Keypad,
    D: CharDisplay,
    C: ConsoleOut,
    T: CadenceClock,
{
    pub fn new(keypad: K, display: D, console: C, clock: T, config: MenuConfig) -> Self {
        Self {
            keypad,
            display,
            console,
            clock,
            config,
            root_selected: 1,
        }
    }

    /// Releases the owned peripherals.
    pub fn release(self) -> (K, D, C, T) {
        (self.keypad, self.display, self.console, self.clock)
    }

    /// Runs the menu forever, hopping between pages as visits end.
    pub fn run(&mut self) -> Result<Infallible, MenuError<K::Error, D::Error, C::Error>> {
        let mut page = MenuPage::Root;
        loop {
            page = self.run_page(page)?;
        }
    }

    /// Drives one visit to `page` until a key ends it.
    ///
    /// The root cursor survives across visits; sub pages always start on
    /// their first item. Each cycle polls at most one key, redraws when the
    /// cursor moved, and then holds the configured cadence. The entry redraw
    /// lands before any transition is taken.
    pub fn run_page(
        &mut self,
        page: MenuPage,
    ) -> Result<MenuPage, MenuError<K::Error, D::Error, C::Error>> {
        let initial = if page.is_root() { self.root_selected } else { 1 };
        let mut controller = PageController::new(page, initial);
        debug!("menu-nav: visit page={:?} selected={}", page, initial);

        loop {
            let cycle_start_ms = self.clock.now_ms();

            let key = self.keypad.poll_key().map_err(MenuError::Keypad)?;
            let transition = controller.apply_key(key);

            if controller.take_redraw() {
                render_page(
                    &page.spec(),
                    controller.selected(),
                    &mut self.display,
                    &mut self.console,
                )?;
            }

            if page.is_root() {
                self.root_selected = controller.selected();
            }

            if let Some(next) = transition {
                return Ok(next);
            }

            self.hold_cadence(cycle_start_ms);
        }
    }

    fn hold_cadence(&mut self, cycle_start_ms: u64) {
        let elapsed = self.clock.now_ms().saturating_sub(cycle_start_ms);
        let budget = self.config.cycle_ms as u64;
        if elapsed < budget {
            self.clock.idle_wait_ms((budget - elapsed) as u32);
        }
    }
}
