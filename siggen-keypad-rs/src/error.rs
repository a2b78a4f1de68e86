//! Error types for the keypad driver.

use core::fmt;

/// Errors that can occur while reading the keypad or button.
#[derive(Debug, PartialEq, Eq)]
pub enum KeypadError<E> {
    /// Underlying GPIO error.
    Pin(E),

    /// Row or column index outside the matrix.
    InvalidPosition,

    /// The matrix has more keys than a [`KeyScan`](crate::KeyScan) can hold (32).
    MatrixTooLarge,
}

// Allow ergonomic `?` propagation from raw pin errors.
impl<E> From<E> for KeypadError<E> {
    fn from(error: E) -> Self {
        KeypadError::Pin(error)
    }
}

impl<E: fmt::Debug> fmt::Display for KeypadError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KeypadError::Pin(e) => write!(f, "GPIO error: {:?}", e),
            KeypadError::InvalidPosition => write!(f, "Key position outside the matrix"),
            KeypadError::MatrixTooLarge => write!(f, "Matrix exceeds 32 keys"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for KeypadError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            KeypadError::Pin(e) => defmt::write!(f, "GPIO error: {}", e),
            KeypadError::InvalidPosition => defmt::write!(f, "Invalid key position"),
            KeypadError::MatrixTooLarge => defmt::write!(f, "Matrix too large"),
        }
    }
}
