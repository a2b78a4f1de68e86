//! Key legend of the standard 4×4 membrane keypad.

/// Number of row lines (driven outputs).
pub const ROWS: usize = 4;

/// Number of column lines (sampled inputs).
pub const COLS: usize = 4;

/// `KEY_MAP[row][col]` is the character printed on that key.
///
/// ```text
///        C0   C1   C2   C3
///  R0    1    2    3    A
///  R1    4    5    6    B
///  R2    7    8    9    C
///  R3    *    0    #    D
/// ```
pub const KEY_MAP: [[char; COLS]; ROWS] = [
    ['1', '2', '3', 'A'],
    ['4', '5', '6', 'B'],
    ['7', '8', '9', 'C'],
    ['*', '0', '#', 'D'],
];
