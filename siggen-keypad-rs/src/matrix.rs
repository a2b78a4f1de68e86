use embedded_hal::digital::{InputPin, OutputPin};

use crate::error::KeypadError;
use crate::layout::{COLS, KEY_MAP, ROWS};

/// Keys held down during one scan, one bit per key.
///
/// Bit `row * cols + col` is set when the key at (`row`, `col`) reads as
/// pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyScan(u32);

impl KeyScan {
    /// Largest key index a scan can hold, plus one.
    pub const CAPACITY: usize = 32;

    pub const EMPTY: KeyScan = KeyScan(0);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn contains(self, index: usize) -> bool {
        index < Self::CAPACITY && self.0 & (1 << index) != 0
    }

    /// Keys down in `self` that were up in `previous`.
    pub const fn newly_pressed(self, previous: KeyScan) -> KeyScan {
        KeyScan(self.0 & !previous.0)
    }

    /// Indices of the pressed keys, lowest first.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        (0..Self::CAPACITY).filter(move |&i| self.contains(i))
    }

    /// Position lookup on the standard 4×4 layout.
    pub fn is_pressed(self, row: usize, col: usize) -> bool {
        row < ROWS && col < COLS && self.contains(row * COLS + col)
    }

    /// Pressed keys on the standard 4×4 layout, resolved through [`KEY_MAP`].
    pub fn keys(self) -> impl Iterator<Item = char> {
        self.indices()
            .filter(|&i| i < ROWS * COLS)
            .map(|i| KEY_MAP[i / COLS][i % COLS])
    }
}

/// Row-driven matrix keypad.
///
/// Rows are push-pull outputs idling low; columns are inputs with pull-downs.
/// A scan raises one row at a time and reads every column, so a closed switch
/// pulls its column high only while its row is driven.
pub struct MatrixKeypad<R, C, const NR: usize, const NC: usize> {
    rows: [R; NR],
    cols: [C; NC],
    keymap: [[char; NC]; NR],
    previous: KeyScan,
}

impl<R, C> MatrixKeypad<R, C, ROWS, COLS> {
    /// Standard 4×4 keypad with the [`KEY_MAP`] legend.
    pub fn new(rows: [R; ROWS], cols: [C; COLS]) -> Self {
        Self {
            rows,
            cols,
            keymap: KEY_MAP,
            previous: KeyScan::EMPTY,
        }
    }
}

impl<R, C, E, const NR: usize, const NC: usize> MatrixKeypad<R, C, NR, NC>
where
    R: OutputPin<Error = E>,
    C: InputPin<Error = E>,
{
    /// Keypad with a custom legend.
    ///
    /// # Errors
    ///
    /// [`KeypadError::MatrixTooLarge`] if `NR * NC` exceeds
    /// [`KeyScan::CAPACITY`].
    pub fn with_keymap(
        rows: [R; NR],
        cols: [C; NC],
        keymap: [[char; NC]; NR],
    ) -> Result<Self, KeypadError<E>> {
        if NR * NC > KeyScan::CAPACITY {
            return Err(KeypadError::MatrixTooLarge);
        }
        Ok(Self {
            rows,
            cols,
            keymap,
            previous: KeyScan::EMPTY,
        })
    }

    /// Release all pins.
    pub fn release(self) -> ([R; NR], [C; NC]) {
        (self.rows, self.cols)
    }

    // -----------------------------------------------------------------------
    // Scanning
    // -----------------------------------------------------------------------

    /// Read every key once.
    ///
    /// A row is always returned low before its error (if any) is reported.
    pub fn scan(&mut self) -> Result<KeyScan, KeypadError<E>> {
        let mut bits = 0u32;

        for r in 0..NR {
            self.rows[r].set_high()?;
            let read = Self::read_row(&mut self.cols);
            self.rows[r].set_low()?;

            let row_bits = read?;
            bits |= row_bits << (r * NC);
        }

        Ok(KeyScan(bits))
    }

    fn read_row(cols: &mut [C; NC]) -> Result<u32, E> {
        let mut bits = 0u32;
        for (c, col) in cols.iter_mut().enumerate() {
            if col.is_high()? {
                bits |= 1 << c;
            }
        }
        Ok(bits)
    }

    /// Scan and return only keys that went down since the previous poll.
    ///
    /// A key held across polls is reported once.
    pub fn poll(&mut self) -> Result<KeyScan, KeypadError<E>> {
        let current = self.scan()?;
        let fresh = current.newly_pressed(self.previous);
        self.previous = current;
        Ok(fresh)
    }

    // -----------------------------------------------------------------------
    // Legend
    // -----------------------------------------------------------------------

    /// Character at a matrix position.
    pub fn key_at(&self, row: usize, col: usize) -> Result<char, KeypadError<E>> {
        self.keymap
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(KeypadError::InvalidPosition)
    }

    /// Character for a [`KeyScan`] bit index.
    pub fn key_for_index(&self, index: usize) -> Option<char> {
        if index >= NR * NC {
            return None;
        }
        Some(self.keymap[index / NC][index % NC])
    }

    /// Characters of the keys set in `scan`, in row-major order.
    pub fn pressed_keys(&self, scan: KeyScan) -> impl Iterator<Item = char> + '_ {
        scan.indices().filter_map(move |i| self.key_for_index(i))
    }
}

// ---------------------------------------------------------------------------
// Unit Tests
// ---------------------------------------------------------------------------
