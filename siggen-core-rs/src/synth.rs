//! Sample synthesis: table lookup followed by amplitude/offset normalization.

use crate::waveform::{WaveformFamily, WaveformTable};
use crate::{AMPLITUDE_FULL_SCALE, MAX_LEVEL, OFFSET_FULL_SCALE};

/// Map one raw table sample onto the output range for the given amplitude
/// and offset.
///
/// `raw` is already in the output domain `[0, max_level]`. The arithmetic is
/// truncating integer math:
///
/// ```text
/// half_amplitude = amplitude / 2
/// offset_norm    = max_level - offset * max_level / 1250
/// amplitude_norm = 2500 / half_amplitude
/// level          = raw / amplitude_norm - offset_norm
/// ```
///
/// The result is clamped to `[0, max_level]`. A zero divisor (only reachable
/// with amplitudes outside the legal range) produces `0` instead of a panic.
///
/// # Examples
///
/// ```
/// use siggen::synth::normalize;
///
/// // Full amplitude, full offset: the table is halved and not shifted.
/// assert_eq!(normalize(255, 2500, 1250, 255), 127);
/// // Power-on parameters push every sample below zero.
/// assert_eq!(normalize(255, 1000, 100, 255), 0);
/// ```
pub fn normalize(raw: u16, amplitude_mv: u32, offset_mv: u32, max_level: u16) -> u16 {
    let max = i64::from(max_level);
    let half_amplitude = amplitude_mv / 2;
    let offset_norm = max - i64::from(offset_mv) * max / i64::from(OFFSET_FULL_SCALE);

    let scaled = match AMPLITUDE_FULL_SCALE
        .checked_div(half_amplitude)
        .and_then(|amplitude_norm| u32::from(raw).checked_div(amplitude_norm))
    {
        Some(scaled) => i64::from(scaled),
        None => {
            #[cfg(feature = "defmt")]
            defmt::warn!("normalize: zero divisor at amplitude {} mV", amplitude_mv);
            return 0;
        }
    };

    // Clamped into [0, max_level], so the narrowing cast cannot alias.
    (scaled - offset_norm).clamp(0, max) as u16
}

/// Produces output levels from the four waveform tables.
///
/// Holds one [`WaveformTable`] (and so one cursor) per family. Only the
/// cursor of the family being sampled advances.
#[derive(Debug, Clone)]
pub struct SignalSynthesizer {
    tables: [WaveformTable; WaveformFamily::COUNT],
    max_level: u16,
}

impl SignalSynthesizer {
    /// Create a synthesizer for an output device whose full-scale code is
    /// `max_level` (255 for the 8-bit DAC, the wrap value for PWM).
    pub fn new(max_level: u16) -> Self {
        Self {
            tables: WaveformFamily::ALL.map(WaveformTable::for_family),
            max_level,
        }
    }

    pub fn max_level(&self) -> u16 {
        self.max_level
    }

    /// The table (and cursor) of `family`.
    pub fn table(&self, family: WaveformFamily) -> &WaveformTable {
        &self.tables[family.index()]
    }

    /// Read the next sample of `family`, advance its cursor, and normalize
    /// it for `amplitude_mv` and `offset_mv`.
    ///
    /// The returned level is always within `[0, max_level]`.
    pub fn next_sample(&mut self, family: WaveformFamily, amplitude_mv: u32, offset_mv: u32) -> u16 {
        let raw = self.tables[family.index()].next_raw();
        normalize(self.scale_raw(raw), amplitude_mv, offset_mv, self.max_level)
    }

    /// Rescale an 8-bit table sample to `[0, max_level]`.
    fn scale_raw(&self, raw: u8) -> u16 {
        if self.max_level == MAX_LEVEL {
            return u16::from(raw);
        }
        (u32::from(raw) * u32::from(self.max_level) / u32::from(MAX_LEVEL)) as u16
    }
}

impl Default for SignalSynthesizer {
    fn default() -> Self {
        Self::new(MAX_LEVEL)
    }
}
