//! Diagnostic lines for the text sink.
//!
//! Every user-visible event the core produces is a [`Diagnostic`]. Its
//! [`Display`](core::fmt::Display) impl is the line written to the sink;
//! rendering is left to the sink so the core never formats text on the
//! sampling path unless someone is listening.

use core::fmt::{self, Write};

use heapless::String;

use crate::error::CommandError;
use crate::parameters::{Field, ParameterStore};
use crate::waveform::WaveformFamily;

/// Capacity of a rendered diagnostic line; longer lines are cut short.
pub const LINE_CAPACITY: usize = 96;

/// Snapshot of the generator settings for the periodic status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusReport {
    pub family: WaveformFamily,
    pub amplitude_mv: u32,
    pub offset_mv: u32,
    pub frequency_hz: u32,
}

impl StatusReport {
    pub fn capture(family: WaveformFamily, params: &ParameterStore) -> Self {
        Self {
            family,
            amplitude_mv: params.amplitude_mv(),
            offset_mv: params.offset_mv(),
            frequency_hz: params.frequency_hz(),
        }
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Signal: Type -> {}, Amplitude -> {}, Offset -> {}, Frequency -> {}",
            self.family.name(),
            self.amplitude_mv,
            self.offset_mv,
            self.frequency_hz
        )
    }
}

/// One line's worth of news for the diagnostic sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic {
    /// The button selected a new waveform family.
    WaveformSelected(WaveformFamily),
    /// A keypad command was validated and applied.
    Committed { field: Field, value: u32 },
    /// A keypad command was discarded.
    Rejected(CommandError),
    /// Periodic status report.
    Status(StatusReport),
}

impl Diagnostic {
    /// Render into a fixed-capacity line without allocating.
    ///
    /// Text past [`LINE_CAPACITY`] is dropped.
    pub fn render(&self) -> String<LINE_CAPACITY> {
        let mut line = String::new();
        // Overflow only truncates; the sink is best-effort.
        let _ = write!(line, "{}", self);
        line
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::WaveformSelected(family) => write!(f, "Waveform -> {}", family.name()),
            Diagnostic::Committed { field, value } => {
                write!(f, "{} set -> {} {}", field.name(), value, field.unit())
            }
            Diagnostic::Rejected(e) => write!(f, "Command rejected: {}", e),
            Diagnostic::Status(status) => write!(f, "{}", status),
        }
    }
}

/// Line-oriented destination for diagnostics (serial console, RTT, ...).
///
/// Implementations must not block the caller for long: the generator calls
/// [`report()`](Self::report) from the sampling loop.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Buffer diagnostics for later draining. When full, new lines are dropped.
impl<const N: usize> DiagnosticSink for heapless::Vec<Diagnostic, N> {
    fn report(&mut self, diagnostic: Diagnostic) {
        let _ = self.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_format() {
        let status = StatusReport::capture(WaveformFamily::Sine, &ParameterStore::default());
        assert_eq!(
            Diagnostic::Status(status).render().as_str(),
            "Signal: Type -> Sine, Amplitude -> 1000, Offset -> 100, Frequency -> 10"
        );
    }

    #[test]
    fn widest_status_line_fits() {
        let status = StatusReport {
            family: WaveformFamily::Sawtooth,
            amplitude_mv: 2500,
            offset_mv: 1250,
            frequency_hz: 12_000_000,
        };
        assert_eq!(
            Diagnostic::Status(status).render().as_str(),
            "Signal: Type -> Sawtooth, Amplitude -> 2500, Offset -> 1250, Frequency -> 12000000"
        );
    }

    #[test]
    fn committed_line() {
        let diag = Diagnostic::Committed { field: Field::Frequency, value: 440 };
        assert_eq!(diag.render().as_str(), "Frequency set -> 440 Hz");
    }

    #[test]
    fn rejected_lines() {
        let out_of_range = Diagnostic::Rejected(CommandError::OutOfRangeValue {
            field: Field::Amplitude,
            value: 50,
        });
        assert_eq!(
            out_of_range.render().as_str(),
            "Command rejected: Amplitude 50 mV out of range [100, 2500]"
        );
        assert_eq!(
            Diagnostic::Rejected(CommandError::InvalidFieldSelector('#')).render().as_str(),
            "Command rejected: invalid field selector '#' (expected A, B or C)"
        );
        assert_eq!(
            Diagnostic::Rejected(CommandError::BufferOverflow).render().as_str(),
            "Command rejected: command too long, input discarded"
        );
    }

    #[test]
    fn waveform_line() {
        let diag = Diagnostic::WaveformSelected(WaveformFamily::Square);
        assert_eq!(diag.render().as_str(), "Waveform -> Square");
    }

    #[test]
    fn vec_sink_drops_when_full() {
        let mut sink: heapless::Vec<Diagnostic, 2> = heapless::Vec::new();
        for _ in 0..3 {
            sink.report(Diagnostic::WaveformSelected(WaveformFamily::Sine));
        }
        assert_eq!(sink.len(), 2);
    }
}
