use embedded_hal::pwm::SetDutyCycle;
use siggen::OutputDevice;

use crate::error::DacError;

/// Filtered PWM channel used as a DAC.
///
/// A code `level` in `[0, full_scale]` sets the duty cycle to
/// `level / full_scale` of the channel's own resolution.
pub struct PwmOutput<C> {
    channel: C,
    full_scale: u16,
    level: u16,
}

impl<C, E> PwmOutput<C>
where
    C: SetDutyCycle<Error = E>,
{
    /// Wrap `channel`; codes are interpreted against `full_scale`.
    pub fn new(channel: C, full_scale: u16) -> Self {
        Self {
            channel,
            full_scale,
            level: 0,
        }
    }

    pub fn release(self) -> C {
        self.channel
    }

    pub fn full_scale(&self) -> u16 {
        self.full_scale
    }

    /// Last level written successfully.
    pub fn level(&self) -> u16 {
        self.level
    }

    /// Set the duty cycle for `level`.
    ///
    /// # Errors
    ///
    /// [`DacError::LevelOutOfRange`] if `level > full_scale`.
    pub fn write_level(&mut self, level: u16) -> Result<(), DacError<E>> {
        if level > self.full_scale {
            return Err(DacError::LevelOutOfRange {
                level,
                max: self.full_scale,
            });
        }

        if level == 0 {
            self.channel.set_duty_cycle_fully_off()?;
        } else {
            self.channel.set_duty_cycle_fraction(level, self.full_scale)?;
        }

        self.level = level;
        Ok(())
    }
}

impl<C, E> OutputDevice for PwmOutput<C>
where
    C: SetDutyCycle<Error = E>,
{
    type Error = DacError<E>;

    fn write_output_level(&mut self, level: u16) -> Result<(), Self::Error> {
        self.write_level(level)
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal::pwm::{ErrorKind, ErrorType};

    use super::*;

    /// Channel with a 16-bit counter wrap of `max`.
    struct FakeChannel {
        max: u16,
        duty: u16,
        fail: bool,
    }

    impl ErrorType for FakeChannel {
        type Error = ErrorKind;
    }

    impl SetDutyCycle for FakeChannel {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), ErrorKind> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            self.duty = duty;
            Ok(())
        }
    }

    fn channel(max: u16) -> FakeChannel {
        FakeChannel { max, duty: 0, fail: false }
    }

    #[test]
    fn same_resolution_is_identity() {
        let mut out = PwmOutput::new(channel(1023), 1023);
        for level in [0, 1, 512, 1023] {
            out.write_output_level(level).unwrap();
            assert_eq!(out.channel.duty, level);
        }
    }

    #[test]
    fn eight_bit_codes_scale_to_counter() {
        let mut out = PwmOutput::new(channel(1000), 255);
        out.write_level(255).unwrap();
        assert_eq!(out.channel.duty, 1000);
        out.write_level(51).unwrap();
        assert_eq!(out.channel.duty, 200);
        out.write_level(0).unwrap();
        assert_eq!(out.channel.duty, 0);
        assert_eq!(out.level(), 0);
    }

    #[test]
    fn level_above_full_scale_rejected() {
        let mut out = PwmOutput::new(channel(1023), 255);
        out.write_level(100).unwrap();
        assert_eq!(
            out.write_level(256),
            Err(DacError::LevelOutOfRange { level: 256, max: 255 })
        );
        assert_eq!(out.level(), 100);
    }

    #[test]
    fn zero_full_scale_only_accepts_zero() {
        let mut out = PwmOutput::new(channel(1023), 0);
        assert_eq!(out.write_level(0), Ok(()));
        assert!(out.write_level(1).is_err());
    }

    #[test]
    fn channel_error_propagates() {
        let mut out = PwmOutput::new(FakeChannel { max: 100, duty: 0, fail: true }, 255);
        assert_eq!(out.write_level(10), Err(DacError::Hardware(ErrorKind::Other)));
    }
}
