// Constants for the vending machine grid

/// Number of slot rows
pub const ROWS: usize = 3;

/// Number of slot columns
pub const COLS: usize = 3;

/// Row labels, indexed by row
pub const ROW_LETTERS: [char; ROWS] = ['A', 'B', 'C'];

/// Column labels, indexed by column
pub const COL_DIGITS: [char; COLS] = ['1', '2', '3'];
