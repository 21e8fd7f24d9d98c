//! Static description of the menu tree.

/// Identifies one page of the menu tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuPage {
    Root,
    Sub1,
    Sub2,
    Sub3,
}

/// How a page labels its items on the serial mirror.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConsoleLabel {
    /// `SUB MENU {n}` with the item's one-based position.
    SubMenu,
    /// `{n}{suffix} Item`, e.g. `1st Item`.
    Ordinal,
}

/// Render-facing description of one page.
///
/// The panel title is padded to span the full 20-column glass; the serial
/// title is the compact form the mirror prints verbatim.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageSpec {
    pub item_count: u8,
    pub lcd_title: &'static str,
    pub console_title: &'static str,
    pub lcd_item_prefix: &'static str,
    pub console_label: ConsoleLabel,
}

const ROOT_PAGE: PageSpec = PageSpec {
    item_count: 3,
    lcd_title: "[ MAIN MENU        ]",
    console_title: "[ MAIN MENU ]",
    lcd_item_prefix: "   SUB MENU ",
    console_label: ConsoleLabel::SubMenu,
};

const SUB1_PAGE: PageSpec = PageSpec {
    item_count: 4,
    lcd_title: "[ SUB MENU #01     ]",
    console_title: "[ SUB MENU #1 ]",
    lcd_item_prefix: "   SUB MENU ITEM ",
    console_label: ConsoleLabel::Ordinal,
};

const SUB2_PAGE: PageSpec = PageSpec {
    item_count: 5,
    lcd_title: "[ SUB MENU #02     ]",
    console_title: "[ SUB MENU #2 ]",
    lcd_item_prefix: "   SUB MENU ITEM ",
    console_label: ConsoleLabel::Ordinal,
};

const SUB3_PAGE: PageSpec = PageSpec {
    item_count: 6,
    lcd_title: "[ SUB MENU #03     ]",
    console_title: "[ SUB MENU #3 ]",
    lcd_item_prefix: "   SUB MENU ITEM ",
    console_label: ConsoleLabel::Ordinal,
};

impl MenuPage {
    /// Returns the render-facing description of this page.
    pub const fn spec(self) -> PageSpec {
        match self {
            Self::Root => ROOT_PAGE,
            Self::Sub1 => SUB1_PAGE,
            Self::Sub2 => SUB2_PAGE,
            Self::Sub3 => SUB3_PAGE,
        }
    }

    pub const fn is_root(self) -> bool {
        matches!(self, Self::Root)
    }

    /// Maps a root cursor position to the sub page it opens.
    pub const fn submenu(selected: u8) -> Self {
        match selected {
            1 => Self::Sub1,
            2 => Self::Sub2,
            _ => Self::Sub3,
        }
    }
}
