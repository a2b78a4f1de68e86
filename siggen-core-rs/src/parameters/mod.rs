//! Generation parameters with validated ranges.
//!
//! This module provides the [`ParameterStore`] that holds the three
//! user-adjustable quantities of the generator and the sample interval
//! derived from the frequency. It is written only through
//! [`ParameterStore::commit()`], which refuses out-of-range values, so every
//! reader (synthesizer, scheduler, status report) sees legal values.
//!
//! ```text
//! Field       Selector  Unit  Legal range          Default
//! Amplitude   A         mV    [100, 2500]          1000
//! Offset      B         mV    [50, 1250]           100
//! Frequency   C         Hz    [1, 12_000_000]      10
//! ```

mod parameter;
mod store;

pub use parameter::Parameter;
pub use store::{sample_interval_us, ParameterStore};

/// Legal amplitude range in millivolts (inclusive).
pub const AMPLITUDE_RANGE_MV: (u32, u32) = (100, 2500);

/// Legal DC offset range in millivolts (inclusive).
pub const OFFSET_RANGE_MV: (u32, u32) = (50, 1250);

/// Legal frequency range in hertz (inclusive).
pub const FREQUENCY_RANGE_HZ: (u32, u32) = (1, 12_000_000);

/// Amplitude at power-on.
pub const DEFAULT_AMPLITUDE_MV: u32 = 1000;

/// Offset at power-on.
pub const DEFAULT_OFFSET_MV: u32 = 100;

/// Frequency at power-on.
pub const DEFAULT_FREQUENCY_HZ: u32 = 10;

/// One of the three parameters a keypad command can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Amplitude,
    Offset,
    Frequency,
}

impl Field {
    /// All fields in selector order.
    pub const ALL: [Field; 3] = [Field::Amplitude, Field::Offset, Field::Frequency];

    /// Resolve the leading character of a command to its field.
    pub fn from_selector(c: char) -> Option<Field> {
        match c {
            'A' => Some(Field::Amplitude),
            'B' => Some(Field::Offset),
            'C' => Some(Field::Frequency),
            _ => None,
        }
    }

    /// Keypad character that selects this field.
    pub fn selector(&self) -> char {
        match self {
            Field::Amplitude => 'A',
            Field::Offset => 'B',
            Field::Frequency => 'C',
        }
    }

    /// Inclusive `(min, max)` legal range.
    pub fn range(&self) -> (u32, u32) {
        match self {
            Field::Amplitude => AMPLITUDE_RANGE_MV,
            Field::Offset => OFFSET_RANGE_MV,
            Field::Frequency => FREQUENCY_RANGE_HZ,
        }
    }

    /// Power-on value.
    pub fn default_value(&self) -> u32 {
        match self {
            Field::Amplitude => DEFAULT_AMPLITUDE_MV,
            Field::Offset => DEFAULT_OFFSET_MV,
            Field::Frequency => DEFAULT_FREQUENCY_HZ,
        }
    }

    /// Human-readable name used in diagnostic lines.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Amplitude => "Amplitude",
            Field::Offset => "Offset",
            Field::Frequency => "Frequency",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Field::Amplitude | Field::Offset => "mV",
            Field::Frequency => "Hz",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_selector(field.selector()), Some(field));
        }
    }

    #[test]
    fn unknown_selectors_are_rejected() {
        for c in ['D', 'X', '1', '*', '#', 'a'] {
            assert_eq!(Field::from_selector(c), None, "selector {:?}", c);
        }
    }

    #[test]
    fn defaults_lie_inside_ranges() {
        for field in Field::ALL {
            let (min, max) = field.range();
            let v = field.default_value();
            assert!(min <= v && v <= max, "{} default {} outside range", field.name(), v);
        }
    }
}
