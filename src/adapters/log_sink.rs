//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing ramp events to the ESP-IDF logger
//! (which goes to UART / USB-CDC in production).  A serial-capture harness
//! can verify sequence correctness from the per-tick duty line alone.

use log::info;

use crate::events::RampEvent;
use crate::ports::EventSink;

/// Adapter that logs every [`RampEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &RampEvent) {
        match event {
            RampEvent::DutyApplied {
                counter,
                red,
                green,
                blue,
            } => {
                info!("{}", duty_line(*counter, *red, *green, *blue));
            }
            RampEvent::Started { step } => {
                info!("RAMP | started, step={}", step);
            }
            RampEvent::Stopped => {
                info!("RAMP | stopped");
            }
        }
    }
}

/// One line per tick, in the shape the capture harness expects.
fn duty_line(counter: u8, red: u8, green: u8, blue: u8) -> String {
    format!(
        "Increment: {}, Duty Cycle (R, G, B): {}, {}, {}",
        counter, red, green, blue
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duty_line_shape() {
        assert_eq!(
            duty_line(5, 10, 5, 15),
            "Increment: 5, Duty Cycle (R, G, B): 10, 5, 15"
        );
    }

    #[test]
    fn duty_line_at_origin() {
        assert_eq!(
            duty_line(0, 0, 0, 0),
            "Increment: 0, Duty Cycle (R, G, B): 0, 0, 0"
        );
    }
}
