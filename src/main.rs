//! Ledramp Firmware — Main Entry Point
//!
//! Bootstraps ESP-IDF, configures the LEDC timer and the three RGB
//! channels, then hands control to the ramp task for the lifetime of the
//! device.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 Adapters (outer ring)                │
//! │                                                      │
//! │     LedcPwm                  LogEventSink            │
//! │     (PwmOutput)              (EventSink)             │
//! │                                                      │
//! │  ─────────────── Port Trait Boundary ──────────────  │
//! │                                                      │
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │          RampGenerator (pure logic)            │  │
//! │  └────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
mod adapters;
mod config;
mod drivers;
mod error;
mod events;
mod pins;
mod ports;
mod ramp;

// ── Imports ───────────────────────────────────────────────────
use core::sync::atomic::AtomicBool;

use anyhow::{Result, anyhow};
use esp_idf_hal::delay::FreeRtos;
use log::info;

use adapters::ledc::LedcPwm;
use adapters::log_sink::LogEventSink;
use config::RampConfig;
use ramp::RampGenerator;

/// Clean-shutdown flag, checked by the ramp loop after every tick.
/// Nothing raises it in normal operation — the ramp runs forever.
static STOP: AtomicBool = AtomicBool::new(false);

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("ledramp v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = RampConfig::default();
    config.validate().map_err(|e| anyhow!("config: {e}"))?;

    // ── 3. Initialise hardware peripherals ────────────────────
    // LEDC init failure is critical — without the timer and channels
    // there is nothing to drive.
    drivers::hw_init::init_peripherals().map_err(|e| anyhow!("hw_init: {e}"))?;

    // ── 4. Construct adapters + ramp core ─────────────────────
    let mut pwm = LedcPwm::new();
    let mut sink = LogEventSink::new();
    let mut generator = RampGenerator::new(&config);

    info!("System ready. Entering ramp loop.");

    // ── 5. Ramp loop ──────────────────────────────────────────
    // Runs forever; a PWM fault propagates out and terminates the task,
    // surfacing the esp_err code on the console.
    generator
        .run(&mut pwm, &mut sink, &mut FreeRtos, &STOP)
        .map_err(|e| anyhow!("ramp task: {e}"))
}
