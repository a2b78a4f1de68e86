use embedded_hal::digital::{OutputPin, PinState};
use siggen::OutputDevice;

use crate::error::DacError;

/// Binary-weighted parallel DAC (R-2R ladder) on `BITS` output pins.
///
/// `pins[0]` carries the least significant bit.
pub struct ParallelDac<P, const BITS: usize> {
    pins: [P; BITS],
    code: u16,
}

impl<P, E, const BITS: usize> ParallelDac<P, BITS>
where
    P: OutputPin<Error = E>,
{
    /// Largest code the ladder can represent.
    pub const MAX_CODE: u16 = if BITS >= 16 { u16::MAX } else { (1u16 << BITS) - 1 };

    /// Take ownership of the data pins. The outputs are not touched until the
    /// first write.
    pub fn new(pins: [P; BITS]) -> Self {
        Self { pins, code: 0 }
    }

    /// Release the data pins.
    pub fn release(self) -> [P; BITS] {
        self.pins
    }

    /// Last code written successfully.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Drive the pins to `code`, bit 0 first.
    ///
    /// # Errors
    ///
    /// [`DacError::LevelOutOfRange`] if `code > MAX_CODE`; no pin is changed.
    /// [`DacError::Hardware`] if a pin write fails; lower bits may already
    /// have been updated.
    pub fn write_code(&mut self, code: u16) -> Result<(), DacError<E>> {
        if code > Self::MAX_CODE {
            return Err(DacError::LevelOutOfRange {
                level: code,
                max: Self::MAX_CODE,
            });
        }

        for (bit, pin) in self.pins.iter_mut().enumerate() {
            let state = PinState::from(bit < 16 && code >> bit & 1 == 1);
            pin.set_state(state)?;
        }

        self.code = code;
        Ok(())
    }
}

impl<P, E, const BITS: usize> OutputDevice for ParallelDac<P, BITS>
where
    P: OutputPin<Error = E>,
{
    type Error = DacError<E>;

    fn write_output_level(&mut self, level: u16) -> Result<(), Self::Error> {
        self.write_code(level)
    }
}

// ---------------------------------------------------------------------------
// Unit Tests
// ---------------------------------------------------------------------------
