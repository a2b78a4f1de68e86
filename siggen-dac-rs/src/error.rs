//! Error types for the output drivers.

use core::fmt;

/// Errors that can occur while writing an output level.
#[derive(Debug, PartialEq, Eq)]
pub enum DacError<E> {
    /// Underlying GPIO or PWM error.
    Hardware(E),

    /// The code does not fit the output's resolution.
    LevelOutOfRange { level: u16, max: u16 },
}

impl<E> From<E> for DacError<E> {
    fn from(error: E) -> Self {
        DacError::Hardware(error)
    }
}

impl<E: fmt::Debug> fmt::Display for DacError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DacError::Hardware(e) => write!(f, "Hardware error: {:?}", e),
            DacError::LevelOutOfRange { level, max } => {
                write!(f, "Level {} exceeds full scale {}", level, max)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for DacError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DacError::Hardware(e) => defmt::write!(f, "Hardware error: {}", e),
            DacError::LevelOutOfRange { level, max } => {
                defmt::write!(f, "Level {} exceeds full scale {}", level, max)
            }
        }
    }
}
