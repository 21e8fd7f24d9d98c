//! Draws one page onto the panel and its serial mirror.

use core::fmt::Write;

use heapless::String as HeaplessString;

use crate::{
    console::{CLEAR_SCROLL_LINES, ConsoleOut, RULE_WIDTH},
    display::{CharDisplay, LCD_CONTENT_ROWS},
    page::{ConsoleLabel, PageSpec},
    window::compute_window,
};

const LINE_BYTES: usize = 48;
const CURSOR_MARKER: &str = "-> ";
const CONSOLE_MARKER: &str = "--> ";
const CONSOLE_GUTTER: &str = "    ";

/// Failure on either output during a redraw.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RenderError<DispErr, ConErr> {
    Display(DispErr),
    Console(ConErr),
}

/// Redraws the page described by `spec` with the cursor on `selected`.
///
/// The panel shows the windowed slice of items; the serial mirror always
/// lists the full page. The panel is drawn first so a console fault leaves
/// the glass complete.
pub fn render_page<D, C>(
    spec: &PageSpec,
    selected: u8,
    display: &mut D,
    console: &mut C,
) -> Result<(), RenderError<D::Error, C::Error>>
where
    D: CharDisplay,
    C: ConsoleOut,
{
    render_lcd(spec, selected, display).map_err(RenderError::Display)?;
    render_console(spec, selected, console).map_err(RenderError::Console)
}

fn render_lcd<D>(spec: &PageSpec, selected: u8, display: &mut D) -> Result<(), D::Error>
where
    D: CharDisplay,
{
    let window = compute_window(spec.item_count, LCD_CONTENT_ROWS, selected);

    display.clear()?;
    display.set_cursor(0, 0)?;
    display.write_str(spec.lcd_title)?;

    for row in 1..=window.visible_count {
        display.set_cursor(0, row)?;
        display.write_str(spec.lcd_item_prefix)?;
        display.write_number(window.first_item + row - 1)?;
    }

    // The marker overwrites the first columns of the cursor row.
    display.set_cursor(0, window.cursor_row)?;
    display.write_str(CURSOR_MARKER)
}

fn render_console<C>(spec: &PageSpec, selected: u8, console: &mut C) -> Result<(), C::Error>
where
    C: ConsoleOut,
{
    for _ in 0..CLEAR_SCROLL_LINES {
        console.blank_line()?;
    }

    console.write_line(spec.console_title)?;
    write_rule(console)?;

    for position in 1..=spec.item_count {
        let mut line = HeaplessString::<LINE_BYTES>::new();
        let _ = line.push_str(if position == selected {
            CONSOLE_MARKER
        } else {
            CONSOLE_GUTTER
        });
        write_item_label(&mut line, spec.console_label, position);
        console.write_line(line.as_str())?;
    }

    write_rule(console)
}

fn write_rule<C>(console: &mut C) -> Result<(), C::Error>
where
    C: ConsoleOut,
{
    let mut rule = HeaplessString::<RULE_WIDTH>::new();
    for _ in 0..RULE_WIDTH {
        let _ = rule.push('-');
    }
    console.write_line(rule.as_str())
}

fn write_item_label(line: &mut HeaplessString<LINE_BYTES>, label: ConsoleLabel, position: u8) {
    match label {
        ConsoleLabel::SubMenu => {
            let _ = write!(line, "SUB MENU {}", position);
        }
        ConsoleLabel::Ordinal => {
            let _ = write!(line, "{}{} Item", position, ordinal_suffix(position));
        }
    }
}

fn ordinal_suffix(value: u8) -> &'static str {
    match value % 10 {
        1 if value % 100 != 11 => "st",
        2 if value % 100 != 12 => "nd",
        3 if value % 100 != 13 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_suffixes_cover_the_menu_range() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(6), "th");
    }

    #[test]
    fn ordinal_suffixes_handle_the_teens() {
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
    }

    #[test]
    fn item_labels_match_their_kind() {
        let mut line = HeaplessString::<LINE_BYTES>::new();
        write_item_label(&mut line, ConsoleLabel::SubMenu, 2);
        assert_eq!(line.as_str(), "SUB MENU 2");

        line.clear();
        write_item_label(&mut line, ConsoleLabel::Ordinal, 3);
        assert_eq!(line.as_str(), "3rd Item");
    }
}
