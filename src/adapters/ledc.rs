//! LEDC PWM adapter — bridges the [`PwmOutput`] port to the ESP-IDF LEDC
//! peripheral.  This is the only module in the system that drives actual
//! PWM hardware.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: stages and latches duty values via hw_init helpers.
//! On host/test: tracks staged/committed state in-memory only.

use crate::drivers::hw_init;
use crate::ports::{LedChannel, PwmError, PwmOutput};

/// Concrete adapter driving the three LEDC channels.
pub struct LedcPwm {
    staged: [u8; 3],
    committed: [u8; 3],
}

impl LedcPwm {
    /// The LEDC timer and channels must already be configured via
    /// [`hw_init::init_peripherals`].
    pub fn new() -> Self {
        Self {
            staged: [0; 3],
            committed: [0; 3],
        }
    }

    /// Last duty latched on a channel.
    pub fn committed_duty(&self, channel: LedChannel) -> u8 {
        self.committed[Self::index(channel)]
    }

    fn index(channel: LedChannel) -> usize {
        match channel {
            LedChannel::Red => 0,
            LedChannel::Green => 1,
            LedChannel::Blue => 2,
        }
    }

    fn hw_channel(channel: LedChannel) -> u32 {
        match channel {
            LedChannel::Red => hw_init::LEDC_CH_LED_R,
            LedChannel::Green => hw_init::LEDC_CH_LED_G,
            LedChannel::Blue => hw_init::LEDC_CH_LED_B,
        }
    }
}

impl Default for LedcPwm {
    fn default() -> Self {
        Self::new()
    }
}

impl PwmOutput for LedcPwm {
    fn set_duty(&mut self, channel: LedChannel, duty: u8) -> Result<(), PwmError> {
        hw_init::ledc_stage_duty(Self::hw_channel(channel), duty)
            .map_err(PwmError::HardwareFault)?;
        self.staged[Self::index(channel)] = duty;
        Ok(())
    }

    fn commit(&mut self, channel: LedChannel) -> Result<(), PwmError> {
        hw_init::ledc_latch_duty(Self::hw_channel(channel)).map_err(PwmError::HardwareFault)?;
        self.committed[Self::index(channel)] = self.staged[Self::index(channel)];
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_latches_staged_value() {
        let mut pwm = LedcPwm::new();
        pwm.set_duty(LedChannel::Green, 42).unwrap();
        assert_eq!(pwm.committed_duty(LedChannel::Green), 0);
        pwm.commit(LedChannel::Green).unwrap();
        assert_eq!(pwm.committed_duty(LedChannel::Green), 42);
    }

    #[test]
    fn channels_latch_independently() {
        let mut pwm = LedcPwm::new();
        pwm.set_duty(LedChannel::Red, 10).unwrap();
        pwm.set_duty(LedChannel::Blue, 15).unwrap();
        pwm.commit(LedChannel::Red).unwrap();
        assert_eq!(pwm.committed_duty(LedChannel::Red), 10);
        assert_eq!(pwm.committed_duty(LedChannel::Blue), 0);
    }
}
