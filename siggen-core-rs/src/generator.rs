//! The generator context object and one iteration of its cooperative loop.
//!
//! [`SignalGenerator`] owns every piece of mutable state (parameters, table
//! cursors, command buffer, debounce windows, clocks). The firmware keeps one
//! instance in its main task and calls [`SignalGenerator::tick()`] as fast as
//! it can; nothing inside a tick blocks or waits.

use crate::input::{InputEvent, InputStateMachine};
use crate::parameters::ParameterStore;
use crate::report::{Diagnostic, DiagnosticSink, StatusReport};
use crate::scheduler::SampleScheduler;
use crate::synth::SignalSynthesizer;
use crate::waveform::WaveformFamily;
use crate::{BUTTON_REFRACTORY_MS, KEY_REFRACTORY_MS, MAX_LEVEL, SAMPLES_PER_PERIOD, STATUS_PERIOD_MS};

/// Analog output collaborator (parallel DAC, PWM channel, ...).
///
/// Receives codes in `[0, max_level]` only; the synthesizer clamps before
/// calling it.
pub trait OutputDevice {
    type Error;

    fn write_output_level(&mut self, level: u16) -> Result<(), Self::Error>;
}

/// Tunables for a [`SignalGenerator`].
///
/// [`GeneratorConfig::default()`] matches the reference hardware: 8-bit DAC,
/// 100 samples per period, 300 ms button and 500 ms keypad refractory
/// windows, a status line every second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GeneratorConfig {
    /// Full-scale output code. Default: 255.
    pub max_level: u16,
    /// Samples per waveform period used to derive the sample interval. Default: 100.
    pub samples_per_period: u32,
    /// Button refractory window in milliseconds. Default: 300.
    pub button_refractory_ms: u32,
    /// Keypad refractory window in milliseconds. Default: 500.
    pub key_refractory_ms: u32,
    /// Period of the status line in milliseconds. Default: 1000.
    pub status_period_ms: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_level: MAX_LEVEL,
            samples_per_period: SAMPLES_PER_PERIOD,
            button_refractory_ms: BUTTON_REFRACTORY_MS,
            key_refractory_ms: KEY_REFRACTORY_MS,
            status_period_ms: STATUS_PERIOD_MS,
        }
    }
}

impl GeneratorConfig {
    /// Status period converted to microseconds.
    pub fn status_period_us(&self) -> u64 {
        u64::from(self.status_period_ms) * 1000
    }
}

/// Everything the sampling-and-configuration loop mutates.
pub struct SignalGenerator {
    params: ParameterStore,
    synth: SignalSynthesizer,
    input: InputStateMachine,
    sample_clock: SampleScheduler,
    status_clock: SampleScheduler,
    status_period_us: u64,
}

impl SignalGenerator {
    /// Create a generator at the power-on defaults.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            params: ParameterStore::new(config.samples_per_period),
            synth: SignalSynthesizer::new(config.max_level),
            input: InputStateMachine::new(config.button_refractory_ms, config.key_refractory_ms),
            sample_clock: SampleScheduler::new(),
            status_clock: SampleScheduler::new(),
            status_period_us: config.status_period_us(),
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn params(&self) -> &ParameterStore {
        &self.params
    }

    pub fn active_family(&self) -> WaveformFamily {
        self.input.active_family()
    }

    pub fn input(&self) -> &InputStateMachine {
        &self.input
    }

    pub fn synth(&self) -> &SignalSynthesizer {
        &self.synth
    }

    /// Current settings as they would appear in the status line.
    pub fn status(&self) -> StatusReport {
        StatusReport::capture(self.active_family(), &self.params)
    }

    // ── Loop steps ───────────────────────────────────────────────────

    /// Feed one input edge to the state machine, forwarding its diagnostic.
    pub fn handle_event<S>(&mut self, event: InputEvent, now_us: u64, sink: &mut S)
    where
        S: DiagnosticSink,
    {
        if let Some(diagnostic) = self.input.handle(event, now_us, &mut self.params) {
            sink.report(diagnostic);
        }
    }

    /// Emit one sample if the sampling clock says it is due.
    ///
    /// Returns the level written, or `None` if no sample was due. The clock
    /// and the table cursor advance even if the device write fails, so a
    /// faulty output never stalls the schedule.
    pub fn poll_output<O>(&mut self, now_us: u64, output: &mut O) -> Result<Option<u16>, O::Error>
    where
        O: OutputDevice,
    {
        if !self.sample_clock.should_emit(now_us, self.params.sample_interval_us()) {
            return Ok(None);
        }

        let level = self.synth.next_sample(
            self.input.active_family(),
            self.params.amplitude_mv(),
            self.params.offset_mv(),
        );
        self.sample_clock.mark_emitted(now_us);
        output.write_output_level(level)?;
        Ok(Some(level))
    }

    /// Send the status line if its period has elapsed.
    pub fn poll_status<S>(&mut self, now_us: u64, sink: &mut S)
    where
        S: DiagnosticSink,
    {
        if !self.status_clock.should_emit(now_us, self.status_period_us) {
            return;
        }
        self.status_clock.mark_emitted(now_us);
        sink.report(Diagnostic::Status(self.status()));
    }

    /// One full loop iteration: apply `events`, emit a sample if due, then
    /// report status if due.
    ///
    /// Returns the level written this iteration, if any. An output error is
    /// returned after the status step has run.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::convert::Infallible;
    /// use siggen::{Diagnostic, GeneratorConfig, InputEvent, OutputDevice, SignalGenerator};
    ///
    /// struct Probe(u16);
    ///
    /// impl OutputDevice for Probe {
    ///     type Error = Infallible;
    ///     fn write_output_level(&mut self, level: u16) -> Result<(), Infallible> {
    ///         self.0 = level;
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let mut generator = SignalGenerator::new(GeneratorConfig::default());
    /// let mut dac = Probe(0);
    /// let mut log: heapless::Vec<Diagnostic, 8> = heapless::Vec::new();
    ///
    /// let written = generator
    ///     .tick(0, [InputEvent::ButtonPressed], &mut dac, &mut log)
    ///     .unwrap();
    ///
    /// assert!(written.is_some());
    /// assert_eq!(log.len(), 2); // waveform change + first status line
    /// ```
    pub fn tick<I, O, S>(
        &mut self,
        now_us: u64,
        events: I,
        output: &mut O,
        sink: &mut S,
    ) -> Result<Option<u16>, O::Error>
    where
        I: IntoIterator<Item = InputEvent>,
        O: OutputDevice,
        S: DiagnosticSink,
    {
        for event in events {
            self.handle_event(event, now_us, sink);
        }
        let written = self.poll_output(now_us, output);
        self.poll_status(now_us, sink);
        written
    }
}

impl Default for SignalGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
