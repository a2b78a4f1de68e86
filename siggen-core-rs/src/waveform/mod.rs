//! Waveform families and their lookup tables.
//!
//! A [`WaveformTable`] pairs one immutable period table with the cursor that
//! walks it. Cursors are per family: switching families and back resumes
//! where the earlier family left off.

pub mod tables;

/// The four waveform families, in button-cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaveformFamily {
    #[default]
    Sine,
    Triangle,
    Sawtooth,
    Square,
}

impl WaveformFamily {
    /// Number of families.
    pub const COUNT: usize = 4;

    /// All families in cycling order.
    pub const ALL: [WaveformFamily; Self::COUNT] = [
        WaveformFamily::Sine,
        WaveformFamily::Triangle,
        WaveformFamily::Sawtooth,
        WaveformFamily::Square,
    ];

    /// Position of this family in [`ALL`](Self::ALL).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The family selected by the next button press.
    ///
    /// ```
    /// use siggen::WaveformFamily;
    ///
    /// assert_eq!(WaveformFamily::Sine.next(), WaveformFamily::Triangle);
    /// assert_eq!(WaveformFamily::Square.next(), WaveformFamily::Sine);
    /// ```
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Display name used in status reports.
    pub fn name(&self) -> &'static str {
        match self {
            WaveformFamily::Sine => "Sine",
            WaveformFamily::Triangle => "Triangle",
            WaveformFamily::Sawtooth => "Sawtooth",
            WaveformFamily::Square => "Square",
        }
    }

    /// The period table backing this family.
    pub fn samples(&self) -> &'static [u8] {
        match self {
            WaveformFamily::Sine => &tables::SINE,
            WaveformFamily::Triangle => &tables::TRIANGLE,
            WaveformFamily::Sawtooth => &tables::SAWTOOTH,
            WaveformFamily::Square => &tables::SQUARE,
        }
    }
}

/// One period table plus its sampling cursor.
///
/// **Invariant:** `cursor < samples.len()` whenever the table is non-empty.
#[derive(Debug, Clone, Copy)]
pub struct WaveformTable {
    samples: &'static [u8],
    cursor: usize,
}

impl WaveformTable {
    /// Wrap a static table with the cursor at its first sample.
    pub const fn new(samples: &'static [u8]) -> Self {
        Self { samples, cursor: 0 }
    }

    /// The table of `family`, cursor at zero.
    pub fn for_family(family: WaveformFamily) -> Self {
        Self::new(family.samples())
    }

    /// Number of samples in one period.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Index of the sample returned by the next [`next_raw()`](Self::next_raw).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Read the sample under the cursor and advance the cursor cyclically.
    ///
    /// An empty table reads as `0`.
    pub fn next_raw(&mut self) -> u8 {
        let Some(&raw) = self.samples.get(self.cursor) else {
            return 0;
        };
        self.cursor = (self.cursor + 1) % self.samples.len();
        raw
    }

    /// Move the cursor back to the first sample.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lengths() {
        assert_eq!(WaveformFamily::Sine.samples().len(), 100);
        assert_eq!(WaveformFamily::Triangle.samples().len(), 100);
        assert_eq!(WaveformFamily::Sawtooth.samples().len(), 100);
        assert_eq!(WaveformFamily::Square.samples().len(), 101);
    }

    #[test]
    fn tables_span_full_byte_range() {
        for family in WaveformFamily::ALL {
            let samples = family.samples();
            assert_eq!(samples.iter().min(), Some(&0), "{}", family.name());
            assert_eq!(samples.iter().max(), Some(&255), "{}", family.name());
        }
    }

    #[test]
    fn next_cycles_through_all_families() {
        let mut family = WaveformFamily::default();
        assert_eq!(family, WaveformFamily::Sine);
        for expected in [
            WaveformFamily::Triangle,
            WaveformFamily::Sawtooth,
            WaveformFamily::Square,
            WaveformFamily::Sine,
        ] {
            family = family.next();
            assert_eq!(family, expected);
        }
    }

    #[test]
    fn cursor_returns_to_start_after_one_period() {
        for family in WaveformFamily::ALL {
            let mut table = WaveformTable::for_family(family);
            let n = table.len();

            // Start from a non-zero position.
            table.next_raw();
            table.next_raw();
            let start = table.cursor();

            let mut first = [0u8; 101];
            for slot in first.iter_mut().take(n) {
                *slot = table.next_raw();
            }
            assert_eq!(table.cursor(), start, "{}", family.name());

            for (i, &expected) in first.iter().take(n).enumerate() {
                assert_eq!(table.next_raw(), expected, "{} sample {}", family.name(), i);
            }
        }
    }

    #[test]
    fn next_raw_reads_in_table_order() {
        let mut table = WaveformTable::for_family(WaveformFamily::Sawtooth);
        for &expected in tables::SAWTOOTH.iter() {
            assert_eq!(table.next_raw(), expected);
        }
        assert_eq!(table.cursor(), 0);
    }

    #[test]
    fn rewind_resets_cursor() {
        let mut table = WaveformTable::for_family(WaveformFamily::Square);
        for _ in 0..37 {
            table.next_raw();
        }
        table.rewind();
        assert_eq!(table.cursor(), 0);
    }

    #[test]
    fn empty_table_reads_zero() {
        let mut table = WaveformTable::new(&[]);
        assert!(table.is_empty());
        assert_eq!(table.next_raw(), 0);
        assert_eq!(table.cursor(), 0);
    }
}
