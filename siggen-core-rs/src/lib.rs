//! Core of a single-channel, table-driven signal generator.
//!
//! The crate owns everything with real state and timing contracts: the
//! waveform lookup tables, the validated generation parameters, the software
//! sampling clock, and the keypad/button input state machine. Hardware access
//! is reached only through the [`OutputDevice`] and [`DiagnosticSink`] traits,
//! so the whole loop runs (and is tested) on the host.
//!
//! # Architecture
//!
//! ```text
//!  button / keypad edges ──► InputStateMachine ──► ParameterStore
//!                                    │                   │
//!                                    ▼                   ▼
//!                             active family       sample_interval_us
//!                                    │                   │
//!                                    ▼                   ▼
//!                           SignalSynthesizer ◄── SampleScheduler
//!                                    │
//!                                    ▼
//!                             OutputDevice (DAC / PWM)
//! ```
//!
//! [`SignalGenerator`] bundles all of it into one context object that the
//! firmware's cooperative loop owns; there are no globals.
//!
//! # `no_std` Compatibility
//!
//! No heap allocation. The command buffer is a fixed-capacity
//! [`heapless::String`]. The optional `defmt` feature derives
//! `defmt::Format` on public types and logs dropped or rejected input.

#![no_std]

mod error;
pub mod generator;
pub mod input;
pub mod parameters;
pub mod report;
pub mod scheduler;
pub mod synth;
pub mod waveform;

pub use error::CommandError;
pub use generator::{GeneratorConfig, OutputDevice, SignalGenerator};
pub use input::{InputEvent, InputState, InputStateMachine};
pub use parameters::{Field, ParameterStore};
pub use report::{Diagnostic, DiagnosticSink, StatusReport};
pub use scheduler::SampleScheduler;
pub use synth::SignalSynthesizer;
pub use waveform::{WaveformFamily, WaveformTable};

/// Full-scale code of the 8-bit parallel DAC, and the range of every table.
pub const MAX_LEVEL: u16 = 255;

/// Offset (mV) that maps to the top of the output range.
pub const OFFSET_FULL_SCALE: u32 = 1250;

/// Peak-to-peak amplitude (mV) that maps to the full table swing.
pub const AMPLITUDE_FULL_SCALE: u32 = 2500;

/// Number of samples emitted per waveform period when deriving the sample
/// interval from the frequency. Fixed for every family, independent of the
/// individual table lengths.
pub const SAMPLES_PER_PERIOD: u32 = 100;

/// Capacity of the keypad command buffer. Reaching it discards the command.
pub const COMMAND_CAPACITY: usize = 10;

/// Key that terminates and commits a command.
pub const COMMIT_KEY: char = 'D';

/// Minimum time between two accepted button presses.
pub const BUTTON_REFRACTORY_MS: u32 = 300;

/// Minimum time between two accepted key presses (shared by all keys).
pub const KEY_REFRACTORY_MS: u32 = 500;

/// Interval between periodic status reports.
pub const STATUS_PERIOD_MS: u32 = 1000;
