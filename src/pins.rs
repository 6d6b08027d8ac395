//! GPIO / peripheral pin assignments for the RGB LED board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// RGB LED (common-cathode, one LEDC channel per colour)
// ---------------------------------------------------------------------------

/// Red LED anode — LEDC channel 0.
pub const LED_R_GPIO: i32 = 25;
/// Green LED anode — LEDC channel 1.
pub const LED_G_GPIO: i32 = 26;
/// Blue LED anode — LEDC channel 2.
pub const LED_B_GPIO: i32 = 27;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC carrier frequency for the RGB LED (5 kHz).
pub const LED_PWM_FREQ_HZ: u32 = 5_000;
