use core::fmt;

use crate::parameters::Field;

/// Reasons a keypad command is rejected.
///
/// Every variant is recoverable: the offending command buffer is discarded
/// and the previously committed parameter value stays in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// The first character of the command is not `A`, `B` or `C`.
    InvalidFieldSelector(char),
    /// The parsed value lies outside the legal range of `field`.
    OutOfRangeValue {
        /// Field the command targeted.
        field: Field,
        /// Value that was parsed and refused.
        value: u32,
    },
    /// The buffer reached [`COMMAND_CAPACITY`](crate::COMMAND_CAPACITY)
    /// characters before the commit key arrived.
    BufferOverflow,
    /// The characters after the selector are empty, non-numeric, or do not
    /// fit in a `u32`.
    MalformedNumber,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CommandError::InvalidFieldSelector(c) => {
                write!(f, "invalid field selector '{}' (expected A, B or C)", c)
            }
            CommandError::OutOfRangeValue { field, value } => {
                let (min, max) = field.range();
                write!(
                    f,
                    "{} {} {} out of range [{}, {}]",
                    field.name(),
                    value,
                    field.unit(),
                    min,
                    max
                )
            }
            CommandError::BufferOverflow => write!(f, "command too long, input discarded"),
            CommandError::MalformedNumber => write!(f, "value is not a number"),
        }
    }
}
