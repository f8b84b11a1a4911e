//! Grid rendering
//!
//! Each grid row becomes three text lines: a border, the items, and another
//! border. A stocked slot shows its row letter, an empty one shows a dot:
//!
//! ```text
//! +-+ +-+ +-+
//! +A+ +.+ +A+
//! +-+ +-+ +-+
//! ```
//!
//! Every item cell is followed by a space, so item lines carry one trailing
//! space that border lines do not.

use crate::machine::constants::{COLS, ROWS, ROW_LETTERS};
use crate::machine::Grid;
use crate::ui::theme::DEFAULT_THEME;
use crossterm::style::Stylize;

const BORDER_CELL: &str = "+-+";
const EMPTY_CELL: &str = "+.+";

/// Lines produced per grid row
pub const LINES_PER_ROW: usize = 3;

/// Render the grid as plain text lines
pub fn render_grid(grid: &Grid) -> Vec<String> {
    render(grid, false)
}

/// Render the grid with color sequences around each cell
pub fn render_grid_styled(grid: &Grid) -> Vec<String> {
    render(grid, true)
}

fn render(grid: &Grid, styled: bool) -> Vec<String> {
    let border = border_line(styled);
    let mut lines = Vec::with_capacity(ROWS * LINES_PER_ROW);

    for (row, flags) in grid.rows().enumerate() {
        let letter = ROW_LETTERS[row];
        let items: String = flags
            .iter()
            .map(|&available| format!("{} ", item_cell(letter, available, styled)))
            .collect();

        lines.push(border.clone());
        lines.push(items);
        lines.push(border.clone());
    }

    lines
}

fn border_line(styled: bool) -> String {
    let cell = if styled {
        BORDER_CELL.with(DEFAULT_THEME.border).to_string()
    } else {
        BORDER_CELL.to_string()
    };
    vec![cell; COLS].join(" ")
}

fn item_cell(letter: char, available: bool, styled: bool) -> String {
    match (available, styled) {
        (true, false) => format!("+{}+", letter),
        (true, true) => format!("+{}+", letter).with(DEFAULT_THEME.item).to_string(),
        (false, false) => EMPTY_CELL.to_string(),
        (false, true) => EMPTY_CELL.with(DEFAULT_THEME.empty).to_string(),
    }
}
