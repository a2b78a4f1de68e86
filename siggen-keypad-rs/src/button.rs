use embedded_hal::digital::InputPin;

use crate::error::KeypadError;

/// Pin level that means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Button to VCC with a pull-down.
    High,
    /// Button to GND with a pull-up.
    Low,
}

/// Single push button with press-edge detection.
pub struct Button<P> {
    pin: P,
    active: ActiveLevel,
    was_pressed: bool,
}

impl<P, E> Button<P>
where
    P: InputPin<Error = E>,
{
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        Self {
            pin,
            active,
            was_pressed: false,
        }
    }

    /// Release the pin.
    pub fn release(self) -> P {
        self.pin
    }

    /// Current level, interpreted through the active level.
    pub fn is_pressed(&mut self) -> Result<bool, KeypadError<E>> {
        let pressed = match self.active {
            ActiveLevel::High => self.pin.is_high()?,
            ActiveLevel::Low => self.pin.is_low()?,
        };
        Ok(pressed)
    }

    /// `true` once per press, on the released-to-pressed transition.
    pub fn poll_pressed(&mut self) -> Result<bool, KeypadError<E>> {
        let pressed = self.is_pressed()?;
        let edge = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        Ok(edge)
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use embedded_hal::digital::{ErrorKind, ErrorType};

    use super::*;

    struct FakePin<'a> {
        high: &'a Cell<bool>,
        fail: bool,
    }

    impl ErrorType for FakePin<'_> {
        type Error = ErrorKind;
    }

    impl InputPin for FakePin<'_> {
        fn is_high(&mut self) -> Result<bool, ErrorKind> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            Ok(self.high.get())
        }

        fn is_low(&mut self) -> Result<bool, ErrorKind> {
            self.is_high().map(|h| !h)
        }
    }

    #[test]
    fn active_high_edges() {
        let level = Cell::new(false);
        let mut button = Button::new(FakePin { high: &level, fail: false }, ActiveLevel::High);

        assert_eq!(button.poll_pressed(), Ok(false));
        level.set(true);
        assert_eq!(button.poll_pressed(), Ok(true));
        assert_eq!(button.poll_pressed(), Ok(false));
        assert_eq!(button.is_pressed(), Ok(true));
        level.set(false);
        assert_eq!(button.poll_pressed(), Ok(false));
        level.set(true);
        assert_eq!(button.poll_pressed(), Ok(true));
    }

    #[test]
    fn active_low_inverts() {
        let level = Cell::new(true);
        let mut button = Button::new(FakePin { high: &level, fail: false }, ActiveLevel::Low);

        assert_eq!(button.poll_pressed(), Ok(false));
        level.set(false);
        assert_eq!(button.poll_pressed(), Ok(true));
    }

    #[test]
    fn pin_error_propagates() {
        let level = Cell::new(false);
        let mut button = Button::new(FakePin { high: &level, fail: true }, ActiveLevel::High);
        assert_eq!(button.poll_pressed(), Err(KeypadError::Pin(ErrorKind::Other)));
    }
}
