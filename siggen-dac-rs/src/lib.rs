//! Analog output drivers for the `siggen` core.
//!
//! Both drivers implement [`siggen::OutputDevice`], so the generator can push
//! samples to either without knowing which one is fitted.
//!
//! - **[`ParallelDac`]**: an R-2R resistor ladder on `BITS` GPIO lines. The
//!   reference board uses eight lines (codes `0..=255`).
//! - **[`PwmOutput`]**: a PWM channel followed by an RC filter. The code is
//!   turned into a duty fraction of `full_scale` (1023 on the PWM variant of
//!   the board).
//!
//! # Features
//!
//! - **`defmt`**: Enable [`defmt::Format`] implementations on public types
//!   for embedded logging.

#![no_std]

pub use error::DacError;
pub use parallel::ParallelDac;
pub use pwm::PwmOutput;

mod error;
mod parallel;
mod pwm;
