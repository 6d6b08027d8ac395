//! One-shot hardware peripheral initialization.
//!
//! Configures the LEDC timer and the three RGB channels using raw ESP-IDF
//! sys calls.  Called once from `main()` before the ramp loop starts.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    LedcTimerFailed(i32),
    LedcChannelFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LedcTimerFailed(rc) => write!(f, "LEDC timer config failed (rc={})", rc),
            Self::LedcChannelFailed(rc) => write!(f, "LEDC channel config failed (rc={})", rc),
        }
    }
}

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

// ── LEDC channel assignments ─────────────────────────────────

pub const LEDC_CH_LED_R: u32 = 0;
pub const LEDC_CH_LED_G: u32 = 1;
pub const LEDC_CH_LED_B: u32 = 2;

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the ramp task starts;
    // single-threaded.
    unsafe {
        init_ledc()?;
    }
    info!("hw_init: LEDC configured (R=CH0, G=CH1, B=CH2)");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── LEDC PWM ─────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_ledc() -> Result<(), HwInitError> {
    // Timer 0: RGB LED (5 kHz, 8-bit)
    // SAFETY: Called from single main-task context via init_peripherals().
    let timer0 = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: ledc_timer_t_LEDC_TIMER_0,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_8_BIT,
        freq_hz: pins::LED_PWM_FREQ_HZ,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    let ret = unsafe { ledc_timer_config(&timer0) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::LedcTimerFailed(ret));
    }

    // Channels 0-2: R, G, B — all on timer 0, starting dark.
    let led_channels = [
        (LEDC_CH_LED_R, pins::LED_R_GPIO),
        (LEDC_CH_LED_G, pins::LED_G_GPIO),
        (LEDC_CH_LED_B, pins::LED_B_GPIO),
    ];
    for (channel, gpio) in led_channels {
        let ret = unsafe {
            ledc_channel_config(&ledc_channel_config_t {
                speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
                channel,
                timer_sel: ledc_timer_t_LEDC_TIMER_0,
                gpio_num: gpio,
                duty: 0,
                hpoint: 0,
                ..Default::default()
            })
        };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::LedcChannelFailed(ret));
        }
    }

    Ok(())
}

// ── LEDC duty staging / latching ─────────────────────────────
//
// The LEDC driver requires an explicit update call after writing the duty
// register for the change to take effect at the next PWM period boundary,
// so staging and latching are exposed as separate operations.

/// Stage a duty value into the channel's duty register.
#[cfg(target_os = "espidf")]
pub fn ledc_stage_duty(channel: u32, duty: u8) -> Result<(), i32> {
    // SAFETY: LEDC channels were configured in init_ledc(); duty register
    // writes are race-free since only the ramp task calls this function.
    let ret = unsafe {
        esp_idf_svc::sys::ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, duty as u32)
    };
    if ret != ESP_OK as i32 {
        return Err(ret);
    }
    Ok(())
}

/// Latch the staged value at the next PWM period boundary.
#[cfg(target_os = "espidf")]
pub fn ledc_latch_duty(channel: u32) -> Result<(), i32> {
    // SAFETY: see ledc_stage_duty.
    let ret =
        unsafe { esp_idf_svc::sys::ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel) };
    if ret != ESP_OK as i32 {
        return Err(ret);
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_stage_duty(_channel: u32, _duty: u8) -> Result<(), i32> {
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_latch_duty(_channel: u32) -> Result<(), i32> {
    Ok(())
}
