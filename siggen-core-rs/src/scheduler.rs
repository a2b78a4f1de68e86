//! Software sampling clock.

/// Timing gate that decides when the next sample is due.
///
/// The gate compares the time elapsed since the last emission against an
/// interval supplied on every call, so a new interval takes effect on the
/// very next comparison. After an emission the reference point is reset to
/// the emission time itself; a stalled loop emits one late sample and then
/// resumes the normal cadence rather than bursting to catch up.
///
/// # Examples
///
/// ```
/// use siggen::SampleScheduler;
///
/// let mut clock = SampleScheduler::new();
/// assert!(clock.should_emit(0, 1000)); // never emitted: due immediately
/// clock.mark_emitted(0);
///
/// assert!(!clock.should_emit(999, 1000));
/// assert!(clock.should_emit(1000, 1000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleScheduler {
    /// Timestamp (µs) of the last emission, `None` before the first one.
    last_emission_us: Option<u64>,
}

impl SampleScheduler {
    pub const fn new() -> Self {
        Self {
            last_emission_us: None,
        }
    }

    /// Returns `true` once at least `interval_us` has elapsed since the last
    /// emission, or if nothing has been emitted yet.
    ///
    /// A clock reading earlier than the last emission counts as no time
    /// elapsed.
    pub fn should_emit(&self, now_us: u64, interval_us: u64) -> bool {
        match self.last_emission_us {
            Some(last) => now_us.saturating_sub(last) >= interval_us,
            None => true,
        }
    }

    /// Record that a sample was emitted at `now_us`.
    pub fn mark_emitted(&mut self, now_us: u64) {
        self.last_emission_us = Some(now_us);
    }

    pub fn last_emission_us(&self) -> Option<u64> {
        self.last_emission_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_emits() {
        let clock = SampleScheduler::new();
        assert!(clock.should_emit(0, 1_000_000));
        assert_eq!(clock.last_emission_us(), None);
    }

    #[test]
    fn boundary_is_inclusive() {
        let mut clock = SampleScheduler::new();
        clock.mark_emitted(5_000);
        assert!(!clock.should_emit(5_999, 1000));
        assert!(clock.should_emit(6_000, 1000));
    }

    #[test]
    fn zero_interval_always_emits() {
        let mut clock = SampleScheduler::new();
        clock.mark_emitted(42);
        assert!(clock.should_emit(42, 0));
        assert!(clock.should_emit(43, 0));
    }

    #[test]
    fn emission_resets_reference_without_catch_up() {
        let mut clock = SampleScheduler::new();
        clock.mark_emitted(0);

        // Loop stalled for ten intervals.
        assert!(clock.should_emit(10_000, 1000));
        clock.mark_emitted(10_000);

        // Only one sample is due; the next one waits a full interval.
        assert!(!clock.should_emit(10_001, 1000));
        assert!(!clock.should_emit(10_999, 1000));
        assert!(clock.should_emit(11_000, 1000));
    }

    #[test]
    fn interval_change_applies_to_next_comparison() {
        let mut clock = SampleScheduler::new();
        clock.mark_emitted(0);
        assert!(!clock.should_emit(500, 1000));
        assert!(clock.should_emit(500, 200));
        assert!(!clock.should_emit(500, 10_000));
    }

    #[test]
    fn clock_going_backwards_counts_as_no_elapsed_time() {
        let mut clock = SampleScheduler::new();
        clock.mark_emitted(1000);
        assert!(!clock.should_emit(10, 1));
        assert!(clock.should_emit(10, 0));
    }
}
