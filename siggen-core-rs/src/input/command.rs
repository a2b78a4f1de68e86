use heapless::String;

use crate::error::CommandError;
use crate::parameters::Field;
use crate::COMMAND_CAPACITY;

/// Characters typed since the last commit.
///
/// **Invariant:** `len() < COMMAND_CAPACITY` after every operation. The push
/// that reaches the capacity discards the whole command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandBuffer {
    text: String<COMMAND_CAPACITY>,
}

impl CommandBuffer {
    pub const fn new() -> Self {
        Self { text: String::new() }
    }

    /// Append one key.
    ///
    /// Returns [`CommandError::BufferOverflow`] (and leaves the buffer empty)
    /// when the command reaches [`COMMAND_CAPACITY`] characters.
    pub fn push(&mut self, key: char) -> Result<(), CommandError> {
        if self.text.push(key).is_err() || self.text.len() >= COMMAND_CAPACITY {
            self.text.clear();
            return Err(CommandError::BufferOverflow);
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// Split a command into its target field and numeric value.
///
/// The first character selects the field; everything after it must be a
/// non-empty run of ASCII digits that fits in a `u32`. Nothing is accepted
/// partially: `"A12#"` is rejected, not read as 12. Range checks are left to
/// [`ParameterStore::commit()`](crate::ParameterStore::commit).
///
/// # Examples
///
/// ```
/// use siggen::input::parse_command;
/// use siggen::{CommandError, Field};
///
/// assert_eq!(parse_command("C440"), Ok((Field::Frequency, 440)));
/// assert_eq!(parse_command("X5"), Err(CommandError::InvalidFieldSelector('X')));
/// assert_eq!(parse_command("B"), Err(CommandError::MalformedNumber));
/// ```
pub fn parse_command(text: &str) -> Result<(Field, u32), CommandError> {
    let mut chars = text.chars();
    let selector = chars.next().ok_or(CommandError::MalformedNumber)?;
    let field = Field::from_selector(selector).ok_or(CommandError::InvalidFieldSelector(selector))?;

    let digits = chars.as_str();
    if digits.is_empty() {
        return Err(CommandError::MalformedNumber);
    }

    let value = digits
        .bytes()
        .try_fold(0u32, |acc, b| {
            if !b.is_ascii_digit() {
                return None;
            }
            acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
        })
        .ok_or(CommandError::MalformedNumber)?;

    Ok((field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_with(keys: &str) -> CommandBuffer {
        let mut buffer = CommandBuffer::new();
        for key in keys.chars() {
            buffer.push(key).unwrap();
        }
        buffer
    }

    // ── CommandBuffer ────────────────────────────────────────────────

    #[test]
    fn push_accumulates_in_order() {
        let buffer = buffer_with("A150");
        assert_eq!(buffer.as_str(), "A150");
        assert_eq!(buffer.len(), 4);
    }

    #[test]
    fn nine_characters_fit() {
        let buffer = buffer_with("C12345678");
        assert_eq!(buffer.len(), 9);
    }

    #[test]
    fn tenth_character_overflows_and_clears() {
        let mut buffer = buffer_with("C12345678");
        assert_eq!(buffer.push('9'), Err(CommandError::BufferOverflow));
        assert!(buffer.is_empty());

        // Usable again afterwards.
        buffer.push('A').unwrap();
        assert_eq!(buffer.as_str(), "A");
    }

    #[test]
    fn clear_empties_buffer() {
        let mut buffer = buffer_with("B60");
        buffer.clear();
        assert!(buffer.is_empty());
    }

    // ── parse_command ────────────────────────────────────────────────

    #[test]
    fn parses_each_field() {
        assert_eq!(parse_command("A1000"), Ok((Field::Amplitude, 1000)));
        assert_eq!(parse_command("B50"), Ok((Field::Offset, 50)));
        assert_eq!(parse_command("C12000000"), Ok((Field::Frequency, 12_000_000)));
    }

    #[test]
    fn leading_zeros_are_allowed() {
        assert_eq!(parse_command("A0150"), Ok((Field::Amplitude, 150)));
    }

    #[test]
    fn value_range_is_not_checked_here() {
        assert_eq!(parse_command("A5"), Ok((Field::Amplitude, 5)));
    }

    #[test]
    fn invalid_selector() {
        assert_eq!(parse_command("X5"), Err(CommandError::InvalidFieldSelector('X')));
        assert_eq!(parse_command("15"), Err(CommandError::InvalidFieldSelector('1')));
        assert_eq!(parse_command("*"), Err(CommandError::InvalidFieldSelector('*')));
    }

    #[test]
    fn non_numeric_tail_is_rejected() {
        for text in ["A", "A12#", "A*5", "AB", "C1A", "B+5"] {
            assert_eq!(parse_command(text), Err(CommandError::MalformedNumber), "{:?}", text);
        }
    }

    #[test]
    fn empty_command_is_malformed() {
        assert_eq!(parse_command(""), Err(CommandError::MalformedNumber));
    }

    #[test]
    fn overflowing_value_is_rejected() {
        assert_eq!(parse_command("C4294967296"), Err(CommandError::MalformedNumber));
        assert_eq!(parse_command("C4294967295"), Ok((Field::Frequency, u32::MAX)));
    }
}
