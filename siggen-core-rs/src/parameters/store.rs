use super::parameter::Parameter;
use super::Field;
use crate::error::CommandError;

/// Sample interval for `frequency_hz` at `samples_per_period` samples per
/// period, in microseconds.
///
/// Truncating integer division: `1_000_000 / (samples_per_period * frequency_hz)`.
/// Any frequency above `10_000 Hz` (at 100 samples per period) yields `0`,
/// meaning "emit on every loop iteration". A zero product also yields `0`.
///
/// # Examples
///
/// ```
/// use siggen::parameters::sample_interval_us;
///
/// assert_eq!(sample_interval_us(10, 100), 1000);
/// assert_eq!(sample_interval_us(3, 100), 3333);
/// assert_eq!(sample_interval_us(5_000_000, 100), 0);
/// ```
pub fn sample_interval_us(frequency_hz: u32, samples_per_period: u32) -> u64 {
    let samples_per_second = u64::from(samples_per_period) * u64::from(frequency_hz);
    1_000_000u64.checked_div(samples_per_second).unwrap_or(0)
}

/// Amplitude, offset and frequency plus the derived sample interval.
///
/// # Initialization
///
/// [`ParameterStore::new()`] starts from the power-on defaults
/// (1000 mV, 100 mV, 10 Hz). The sample interval is derived immediately and
/// recomputed inside the same `commit()` call that changes the frequency, so
/// the two can never be observed out of step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParameterStore {
    amplitude: Parameter,
    offset: Parameter,
    frequency: Parameter,
    samples_per_period: u32,
    sample_interval_us: u64,
}

impl ParameterStore {
    /// Create a store holding the power-on defaults.
    pub fn new(samples_per_period: u32) -> Self {
        let frequency = Parameter::for_field(Field::Frequency);
        Self {
            amplitude: Parameter::for_field(Field::Amplitude),
            offset: Parameter::for_field(Field::Offset),
            sample_interval_us: sample_interval_us(frequency.value(), samples_per_period),
            frequency,
            samples_per_period,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn amplitude_mv(&self) -> u32 {
        self.amplitude.value()
    }

    pub fn offset_mv(&self) -> u32 {
        self.offset.value()
    }

    pub fn frequency_hz(&self) -> u32 {
        self.frequency.value()
    }

    /// Time between two samples at the current frequency.
    pub fn sample_interval_us(&self) -> u64 {
        self.sample_interval_us
    }

    pub fn samples_per_period(&self) -> u32 {
        self.samples_per_period
    }

    /// Current value of `field`.
    pub fn get(&self, field: Field) -> u32 {
        self.param(field).value()
    }

    // ── Commit ───────────────────────────────────────────────────────

    /// Validate `value` against the legal range of `field` and store it.
    ///
    /// A frequency commit also recomputes the sample interval.
    ///
    /// Returns [`CommandError::OutOfRangeValue`] and leaves the store
    /// untouched if `value` is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use siggen::{CommandError, Field, ParameterStore};
    ///
    /// let mut params = ParameterStore::new(100);
    /// params.commit(Field::Frequency, 1000).unwrap();
    /// assert_eq!(params.sample_interval_us(), 10);
    ///
    /// assert_eq!(
    ///     params.commit(Field::Amplitude, 50),
    ///     Err(CommandError::OutOfRangeValue { field: Field::Amplitude, value: 50 })
    /// );
    /// assert_eq!(params.amplitude_mv(), 1000);
    /// ```
    pub fn commit(&mut self, field: Field, value: u32) -> Result<(), CommandError> {
        if !self.param_mut(field).try_set(value) {
            return Err(CommandError::OutOfRangeValue { field, value });
        }
        if field == Field::Frequency {
            self.sample_interval_us = sample_interval_us(value, self.samples_per_period);
        }
        Ok(())
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn param(&self, field: Field) -> &Parameter {
        match field {
            Field::Amplitude => &self.amplitude,
            Field::Offset => &self.offset,
            Field::Frequency => &self.frequency,
        }
    }

    fn param_mut(&mut self, field: Field) -> &mut Parameter {
        match field {
            Field::Amplitude => &mut self.amplitude,
            Field::Offset => &mut self.offset,
            Field::Frequency => &mut self.frequency,
        }
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new(crate::SAMPLES_PER_PERIOD)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Default state ────────────────────────────────────────────────

    #[test]
    fn default_state() {
        let params = ParameterStore::default();
        assert_eq!(params.amplitude_mv(), 1000);
        assert_eq!(params.offset_mv(), 100);
        assert_eq!(params.frequency_hz(), 10);
        assert_eq!(params.samples_per_period(), 100);
        assert_eq!(params.sample_interval_us(), 1_000_000 / (100 * 10));
    }

    #[test]
    fn get_matches_accessors() {
        let params = ParameterStore::default();
        assert_eq!(params.get(Field::Amplitude), params.amplitude_mv());
        assert_eq!(params.get(Field::Offset), params.offset_mv());
        assert_eq!(params.get(Field::Frequency), params.frequency_hz());
    }

    // ── Commit ───────────────────────────────────────────────────────

    #[test]
    fn commit_in_range_updates_only_target() {
        let mut params = ParameterStore::default();
        params.commit(Field::Offset, 1250).unwrap();

        assert_eq!(params.offset_mv(), 1250);
        assert_eq!(params.amplitude_mv(), 1000);
        assert_eq!(params.frequency_hz(), 10);
        assert_eq!(params.sample_interval_us(), 1000);
    }

    #[test]
    fn commit_out_of_range_is_refused() {
        let mut params = ParameterStore::default();
        let before = params;

        for (field, value) in [
            (Field::Amplitude, 99),
            (Field::Amplitude, 2501),
            (Field::Offset, 49),
            (Field::Offset, 1251),
            (Field::Frequency, 0),
            (Field::Frequency, 12_000_001),
        ] {
            assert_eq!(
                params.commit(field, value),
                Err(CommandError::OutOfRangeValue { field, value })
            );
        }

        assert_eq!(params, before);
    }

    #[test]
    fn commit_range_bounds_are_inclusive() {
        let mut params = ParameterStore::default();
        for field in Field::ALL {
            let (min, max) = field.range();
            assert!(params.commit(field, min).is_ok());
            assert_eq!(params.get(field), min);
            assert!(params.commit(field, max).is_ok());
            assert_eq!(params.get(field), max);
        }
    }

    // ── Sample interval ──────────────────────────────────────────────

    #[test]
    fn frequency_commit_recomputes_interval() {
        let mut params = ParameterStore::default();
        for f in [1u32, 3, 7, 10, 333, 10_000, 10_001, 5_000_000, 12_000_000] {
            params.commit(Field::Frequency, f).unwrap();
            assert_eq!(
                params.sample_interval_us(),
                1_000_000 / (100 * u64::from(f)),
                "frequency {}",
                f
            );
        }
    }

    #[test]
    fn refused_frequency_keeps_interval() {
        let mut params = ParameterStore::default();
        params.commit(Field::Frequency, 50).unwrap();
        assert!(params.commit(Field::Frequency, 0).is_err());
        assert_eq!(params.frequency_hz(), 50);
        assert_eq!(params.sample_interval_us(), 200);
    }

    #[test]
    fn non_frequency_commit_keeps_interval() {
        let mut params = ParameterStore::default();
        params.commit(Field::Amplitude, 2000).unwrap();
        assert_eq!(params.sample_interval_us(), 1000);
    }

    #[test]
    fn interval_truncates() {
        assert_eq!(sample_interval_us(1, 100), 10_000);
        assert_eq!(sample_interval_us(3, 100), 3333);
        assert_eq!(sample_interval_us(6, 100), 1666);
        assert_eq!(sample_interval_us(10_000, 100), 1);
        assert_eq!(sample_interval_us(10_001, 100), 0);
    }

    #[test]
    fn interval_with_zero_samples_per_period() {
        assert_eq!(sample_interval_us(10, 0), 0);
        let params = ParameterStore::new(0);
        assert_eq!(params.sample_interval_us(), 0);
    }
}
