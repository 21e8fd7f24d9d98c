//! Window math for pages taller than the glass.

/// Slice of a page's items that fits on the glass below the title row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DisplayWindow {
    /// One-based position of the first visible item.
    pub first_item: u8,
    /// Number of items shown, `1..=capacity`.
    pub visible_count: u8,
    /// One-based content row carrying the cursor marker, `1..=capacity`.
    pub cursor_row: u8,
}

impl DisplayWindow {
    /// One-based position of the last visible item.
    pub const fn last_item(self) -> u8 {
        self.first_item + self.visible_count - 1
    }
}

/// Computes the visible slice for `selected` on a page of `item_count` items.
///
/// Items are grouped into fixed bands of `capacity`; the window never slides
/// item by item. The final band of a page whose count is not a multiple of
/// `capacity` comes out short.
pub fn compute_window(item_count: u8, capacity: u8, selected: u8) -> DisplayWindow {
    debug_assert!(capacity >= 1);
    debug_assert!(item_count >= 1);
    debug_assert!(selected >= 1 && selected <= item_count);

    let band = (selected - 1) / capacity;
    let first_item = band * capacity + 1;
    let remaining = item_count - first_item + 1;
    let visible_count = if remaining < capacity {
        remaining
    } else {
        capacity
    };
    let cursor_row = (selected - 1) % capacity + 1;

    DisplayWindow {
        first_item,
        visible_count,
        cursor_row,
    }
}
