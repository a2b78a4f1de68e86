//! Button and keypad input handling.
//!
//! [`InputStateMachine`] turns raw, undebounced input edges into waveform
//! changes and parameter commits. It is fed explicit [`InputEvent`] values
//! from one poll point; it never touches hardware.
//!
//! # Transitions
//!
//! ```text
//!              key (≠ D)                       key (≠ D)
//!   ┌──────┐ ───────────► ┌──────────────┐ ◄──────────┐
//!   │ Idle │              │ Accumulating │ ───────────┘
//!   └──────┘ ◄─────────── └──────────────┘
//!       ▲     D (commit) / overflow
//!       │
//!  button: active family → next family (either state)
//! ```
//!
//! The two states accept exactly the same events; the state only reports
//! whether a command is in progress. Each source has its own refractory
//! window (button 300 ms, keypad 500 ms shared by all keys).

mod command;
mod debounce;

pub use command::{parse_command, CommandBuffer};
pub use debounce::DebounceGate;

use crate::parameters::ParameterStore;
use crate::report::Diagnostic;
use crate::waveform::WaveformFamily;
use crate::{BUTTON_REFRACTORY_MS, COMMIT_KEY, KEY_REFRACTORY_MS};

/// A single raw input edge observed by the poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// The waveform button went from released to pressed.
    ButtonPressed,
    /// A keypad key went from released to pressed.
    KeyPressed(char),
}

/// Whether a command is being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputState {
    /// Command buffer empty.
    Idle,
    /// At least one key of a command has been accepted.
    Accumulating,
}

/// Debounces both input sources and applies their effects.
#[derive(Debug, Clone)]
pub struct InputStateMachine {
    active_family: WaveformFamily,
    buffer: CommandBuffer,
    button_gate: DebounceGate,
    key_gate: DebounceGate,
}

impl Default for InputStateMachine {
    fn default() -> Self {
        Self::new(BUTTON_REFRACTORY_MS, KEY_REFRACTORY_MS)
    }
}

impl InputStateMachine {
    /// Create a machine in the `Idle` state with `Sine` selected.
    pub fn new(button_refractory_ms: u32, key_refractory_ms: u32) -> Self {
        Self {
            active_family: WaveformFamily::default(),
            buffer: CommandBuffer::new(),
            button_gate: DebounceGate::from_millis(button_refractory_ms),
            key_gate: DebounceGate::from_millis(key_refractory_ms),
        }
    }

    pub fn active_family(&self) -> WaveformFamily {
        self.active_family
    }

    pub fn state(&self) -> InputState {
        if self.buffer.is_empty() {
            InputState::Idle
        } else {
            InputState::Accumulating
        }
    }

    /// The command typed so far.
    pub fn pending_command(&self) -> &str {
        self.buffer.as_str()
    }

    /// Apply one input edge observed at `now_us`.
    ///
    /// Returns the diagnostic the edge produced, if any. Debounced edges,
    /// plain keystrokes, and a commit of an empty buffer produce nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use siggen::{Diagnostic, Field, InputEvent, InputStateMachine, ParameterStore};
    ///
    /// let mut input = InputStateMachine::default();
    /// let mut params = ParameterStore::default();
    ///
    /// let mut now_us = 0;
    /// let mut last = None;
    /// for key in "A1500D".chars() {
    ///     last = input.handle(InputEvent::KeyPressed(key), now_us, &mut params);
    ///     now_us += 500_000;
    /// }
    ///
    /// assert_eq!(last, Some(Diagnostic::Committed { field: Field::Amplitude, value: 1500 }));
    /// assert_eq!(params.amplitude_mv(), 1500);
    /// ```
    pub fn handle(
        &mut self,
        event: InputEvent,
        now_us: u64,
        params: &mut ParameterStore,
    ) -> Option<Diagnostic> {
        match event {
            InputEvent::ButtonPressed => self.on_button(now_us),
            InputEvent::KeyPressed(key) => self.on_key(key, now_us, params),
        }
    }

    // ── Button ───────────────────────────────────────────────────────

    fn on_button(&mut self, now_us: u64) -> Option<Diagnostic> {
        if !self.button_gate.try_accept(now_us) {
            #[cfg(feature = "defmt")]
            defmt::trace!("button edge debounced at {} us", now_us);
            return None;
        }
        self.active_family = self.active_family.next();
        Some(Diagnostic::WaveformSelected(self.active_family))
    }

    // ── Keypad ───────────────────────────────────────────────────────

    fn on_key(&mut self, key: char, now_us: u64, params: &mut ParameterStore) -> Option<Diagnostic> {
        if !self.key_gate.try_accept(now_us) {
            #[cfg(feature = "defmt")]
            defmt::trace!("key {} debounced at {} us", key, now_us);
            return None;
        }

        if key == COMMIT_KEY {
            return self.commit(params);
        }

        match self.buffer.push(key) {
            Ok(()) => None,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("command discarded: {}", e);
                Some(Diagnostic::Rejected(e))
            }
        }
    }

    /// Parse, validate and apply the buffered command, then clear the buffer.
    fn commit(&mut self, params: &mut ParameterStore) -> Option<Diagnostic> {
        if self.buffer.is_empty() {
            return None;
        }

        let result = parse_command(self.buffer.as_str())
            .and_then(|(field, value)| params.commit(field, value).map(|()| (field, value)));
        self.buffer.clear();

        match result {
            Ok((field, value)) => Some(Diagnostic::Committed { field, value }),
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("command rejected: {}", e);
                Some(Diagnostic::Rejected(e))
            }
        }
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
