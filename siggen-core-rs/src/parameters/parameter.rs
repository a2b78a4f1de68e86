use super::Field;

/// A single generation parameter with its legal range.
///
/// Unlike a knob-driven value, a keypad value is never clamped into range:
/// an out-of-range request is refused and the old value kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Parameter {
    /// Current value, always within `[min_value, max_value]`.
    value: u32,
    /// Minimum allowed value (inclusive).
    min_value: u32,
    /// Maximum allowed value (inclusive).
    max_value: u32,
}

impl Parameter {
    /// Build the power-on parameter for `field`.
    pub fn for_field(field: Field) -> Self {
        let (min_value, max_value) = field.range();
        Self {
            value: field.default_value(),
            min_value,
            max_value,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns `true` if `v` lies in `[min_value, max_value]`.
    pub fn accepts(&self, v: u32) -> bool {
        (self.min_value..=self.max_value).contains(&v)
    }

    /// Store `v` if it is in range.
    ///
    /// Returns `false` and leaves the value untouched otherwise.
    pub fn try_set(&mut self, v: u32) -> bool {
        if !self.accepts(v) {
            return false;
        }
        self.value = v;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_bounds() {
        let p = Parameter::for_field(Field::Offset);
        assert!(p.accepts(50));
        assert!(p.accepts(1250));
        assert!(!p.accepts(49));
        assert!(!p.accepts(1251));
    }

    #[test]
    fn try_set_refuses_out_of_range() {
        let mut p = Parameter::for_field(Field::Amplitude);
        assert!(!p.try_set(99));
        assert_eq!(p.value(), 1000);
        assert!(p.try_set(2500));
        assert_eq!(p.value(), 2500);
    }
}
