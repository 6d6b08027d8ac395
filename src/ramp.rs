//! Ramp generator — the domain core.
//!
//! [`RampGenerator`] owns the wrapping counter and, each tick, derives a
//! [`DutyTriple`], stages and latches it through the [`PwmOutput`] port, and
//! reports it through the [`EventSink`] port.  All I/O flows through ports
//! injected at call sites, making the core testable with mock adapters.
//!
//! ```text
//!                 ┌────────────────────┐ ──▶ PwmOutput (set_duty + commit)
//!   DelayNs ────▶ │   RampGenerator    │
//!                 └────────────────────┘ ──▶ EventSink
//! ```

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;
use log::info;

use crate::config::RampConfig;
use crate::error::Result;
use crate::events::RampEvent;
use crate::ports::{EventSink, LedChannel, PwmOutput};

// ───────────────────────────────────────────────────────────────
// Duty derivation
// ───────────────────────────────────────────────────────────────

/// One set of 8-bit duty values, derived from the counter every tick and
/// immediately consumed — never stored across ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyTriple {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl DutyTriple {
    /// Derive the duty triple for a counter value.
    ///
    /// `wrapping_mul` on `u8` is multiplication mod 256, so every output is
    /// in 0–255 by construction.
    pub fn for_counter(counter: u8) -> Self {
        Self {
            red: counter.wrapping_mul(2),
            green: counter,
            blue: counter.wrapping_mul(3),
        }
    }

    fn duty(self, channel: LedChannel) -> u8 {
        match channel {
            LedChannel::Red => self.red,
            LedChannel::Green => self.green,
            LedChannel::Blue => self.blue,
        }
    }
}

/// Ticks in one full wrap cycle for a given step (`step` must be >= 1).
///
/// The counter runs 0, step, 2·step, … and wraps only once the next value
/// would exceed 255, so the cycle covers `floor(255/step) + 1` values —
/// 52 for the default step of 5.
pub fn cycle_len(step: u8) -> u32 {
    255 / u32::from(step) + 1
}

// ───────────────────────────────────────────────────────────────
// RampGenerator
// ───────────────────────────────────────────────────────────────

/// Produces the repeating duty-cycle sequence and drives the PWM port at a
/// fixed cadence.
pub struct RampGenerator {
    counter: u8,
    step: u8,
    tick_interval_ms: u32,
}

impl RampGenerator {
    /// Construct the generator with the counter at the start of the sequence.
    pub fn new(config: &RampConfig) -> Self {
        Self {
            counter: 0,
            step: config.step,
            tick_interval_ms: config.tick_interval_ms,
        }
    }

    /// Reset the counter to the start of the sequence.
    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// Current counter value (always in 0–255).
    pub fn counter(&self) -> u8 {
        self.counter
    }

    /// Configured counter increment.
    pub fn step(&self) -> u8 {
        self.step
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one duty-update cycle: derive → stage + latch per channel →
    /// report → advance.
    ///
    /// A [`PwmError`](crate::ports::PwmError) from any stage aborts the tick
    /// before the event is emitted and leaves the counter unadvanced; the
    /// caller decides whether the task terminates.
    pub fn tick(&mut self, pwm: &mut impl PwmOutput, sink: &mut impl EventSink) -> Result<()> {
        let duty = DutyTriple::for_counter(self.counter);

        for channel in LedChannel::ALL {
            pwm.set_duty(channel, duty.duty(channel))?;
            pwm.commit(channel)?;
        }

        sink.emit(&RampEvent::DutyApplied {
            counter: self.counter,
            red: duty.red,
            green: duty.green,
            blue: duty.blue,
        });

        self.advance();
        Ok(())
    }

    /// Advance the counter by one step, resetting to 0 once the next value
    /// strictly exceeds 255.  255 itself is still emitted (250 + 5 = 255),
    /// which is what makes the step-5 cycle 52 ticks long.
    fn advance(&mut self) {
        let next = u16::from(self.counter) + u16::from(self.step);
        self.counter = if next > 255 { 0 } else { next as u8 };
    }

    // ── Task loop ─────────────────────────────────────────────

    /// Drive the ramp until `stop` is raised or the PWM port faults.
    ///
    /// The end-of-tick delay is the loop's only suspension point; `stop` is
    /// checked after each tick, before the delay, so shutdown never waits
    /// out a full period.
    pub fn run(
        &mut self,
        pwm: &mut impl PwmOutput,
        sink: &mut impl EventSink,
        delay: &mut impl DelayNs,
        stop: &AtomicBool,
    ) -> Result<()> {
        info!(
            "Ramp task started (step={}, period={}ms)",
            self.step, self.tick_interval_ms
        );
        sink.emit(&RampEvent::Started { step: self.step });

        loop {
            self.tick(pwm, sink)?;
            if stop.load(Ordering::Relaxed) {
                break;
            }
            delay.delay_ms(self.tick_interval_ms);
        }

        sink.emit(&RampEvent::Stopped);
        info!("Ramp task stopped");
        Ok(())
    }
}
