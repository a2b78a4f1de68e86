//! siggen-firmware
//!
//! Table-driven signal generator for the Raspberry Pi Pico 2. Wires the three
//! library crates into one cooperative loop:
//!
//! 1. The push button and the 4×4 keypad are polled for new presses.
//! 2. Each press becomes an `InputEvent` for the generator's input state
//!    machine (waveform cycling, `A`/`B`/`C` + digits + `D` commands).
//! 3. When the sample interval has elapsed, the next table sample is
//!    normalised and written to the 8-bit R-2R ladder.
//! 4. Once per second the current settings are logged over RTT.
//!
//! Everything runs in the main task; nothing in the loop awaits.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Instant;
use {defmt_rtt as _, panic_probe as _};

use dac_driver::ParallelDac;
use keypad_driver::{ActiveLevel, Button, KeyScan, MatrixKeypad};
use siggen::{Diagnostic, DiagnosticSink, GeneratorConfig, InputEvent, SignalGenerator};

// ---------------------------------------------------------------------------
// Boot block
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// Writes each diagnostic as one RTT log line.
struct DefmtSink;

impl DiagnosticSink for DefmtSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        let line = diagnostic.render();
        match diagnostic {
            Diagnostic::Rejected(_) => warn!("{}", line.as_str()),
            _ => info!("{}", line.as_str()),
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("siggen-firmware starting");

    // -- Pin assignments ------------------------------------------------------
    // DAC D0..D7 → GP16, GP17, GP18, GP19, GP20, GP21, GP22, GP26
    // KEY_ROW0..3 → GP2..GP5   outputs, idle low
    // KEY_COL0..3 → GP6..GP9   inputs, pull-down
    // BUTTON      → GP1        input, pull-down, active-high
    // -------------------------------------------------------------------------

    let mut dac = ParallelDac::new([
        Output::new(p.PIN_16, Level::Low),
        Output::new(p.PIN_17, Level::Low),
        Output::new(p.PIN_18, Level::Low),
        Output::new(p.PIN_19, Level::Low),
        Output::new(p.PIN_20, Level::Low),
        Output::new(p.PIN_21, Level::Low),
        Output::new(p.PIN_22, Level::Low),
        Output::new(p.PIN_26, Level::Low),
    ]);

    let mut keypad = MatrixKeypad::new(
        [
            Output::new(p.PIN_2, Level::Low),
            Output::new(p.PIN_3, Level::Low),
            Output::new(p.PIN_4, Level::Low),
            Output::new(p.PIN_5, Level::Low),
        ],
        [
            Input::new(p.PIN_6, Pull::Down),
            Input::new(p.PIN_7, Pull::Down),
            Input::new(p.PIN_8, Pull::Down),
            Input::new(p.PIN_9, Pull::Down),
        ],
    );

    let mut button = Button::new(Input::new(p.PIN_1, Pull::Down), ActiveLevel::High);

    let mut generator = SignalGenerator::new(GeneratorConfig::default());
    let mut sink = DefmtSink;

    info!("Initial settings: {}", generator.status());

    // -- Sampling and configuration loop --------------------------------------

    loop {
        let now_us = Instant::now().as_micros();

        let button_pressed = match button.poll_pressed() {
            Ok(pressed) => pressed,
            Err(e) => {
                warn!("Button read failed: {}", e);
                false
            }
        };

        let fresh_keys = match keypad.poll() {
            Ok(scan) => scan,
            Err(e) => {
                warn!("Keypad scan failed: {}", e);
                KeyScan::EMPTY
            }
        };

        let events = button_pressed
            .then_some(InputEvent::ButtonPressed)
            .into_iter()
            .chain(fresh_keys.keys().map(InputEvent::KeyPressed));

        if let Err(e) = generator.tick(now_us, events, &mut dac, &mut sink) {
            error!("DAC write failed: {}", e);
        }
    }
}
