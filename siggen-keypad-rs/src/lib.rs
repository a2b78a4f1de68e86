//! Polled driver for a 4×4 matrix keypad and a push button.
//!
//! This crate reads raw pin state only. It reports which keys are down and
//! which went down since the previous scan; it does **not** debounce, since
//! the refractory windows belong to the input state machine of the `siggen`
//! core.
//!
//! # Architecture
//!
//! - **[`MatrixKeypad`]**: drives each row high in turn and samples every
//!   column (pull-down inputs), returning a [`KeyScan`] bitfield.
//! - **[`Button`]**: a single digital input with rising-edge detection.
//! - **`layout`**: the key legend of the standard 4×4 membrane keypad.
//!
//! # Quick start
//!
//! ```ignore
//! use keypad_driver::MatrixKeypad;
//!
//! // `rows` are embedded-hal output pins, `cols` input pins with pull-downs.
//! let mut keypad = MatrixKeypad::new(rows, cols);
//!
//! let fresh = keypad.poll()?;
//! for key in keypad.pressed_keys(fresh) {
//!     // '0'..='9', 'A'..='D', '*', '#'
//! }
//! ```
//!
//! # Features
//!
//! - **`defmt`**: Enable [`defmt::Format`] implementations on public types
//!   for embedded logging.

#![no_std]

pub use button::{ActiveLevel, Button};
pub use error::KeypadError;
pub use layout::{COLS, KEY_MAP, ROWS};
pub use matrix::{KeyScan, MatrixKeypad};

mod button;
mod error;
mod layout;
mod matrix;
