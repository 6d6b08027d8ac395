//! Ramp timing configuration
//!
//! All tunable parameters for the colour ramp.  The PWM carrier settings
//! (frequency, resolution, pins) are hardware-fixed and live in
//! [`pins`](crate::pins).

use serde::{Deserialize, Serialize};

/// Core ramp configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RampConfig {
    /// Counter increment applied after every tick.
    pub step: u8,
    /// Control loop period (milliseconds).
    pub tick_interval_ms: u32,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            step: 5,
            tick_interval_ms: 100, // 10 Hz
        }
    }
}

impl RampConfig {
    /// Reject values that would stall the ramp or spin the loop.
    /// Invalid values are refused, not silently clamped.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.step == 0 {
            return Err("step must be >= 1");
        }
        if self.tick_interval_ms == 0 {
            return Err("tick interval must be >= 1 ms");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = RampConfig::default();
        assert_eq!(c.step, 5);
        assert_eq!(c.tick_interval_ms, 100);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_step_rejected() {
        let c = RampConfig {
            step: 0,
            ..RampConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_interval_rejected() {
        let c = RampConfig {
            tick_interval_ms: 0,
            ..RampConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let c = RampConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: RampConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c.step, c2.step);
        assert_eq!(c.tick_interval_ms, c2.tick_interval_ms);
    }
}
