//! PWM outputs
//!
//! Each RP2040 PWM slice has a shared counter (`top` = wrap) and two
//! compare channels, A and B. The LED pair shares one slice, so it is
//! configured once with [`led_pwm_config`] and then split into two
//! [`PwmPin`]s.

use axial_hal::PwmChannel;
use embassy_rp::pwm::{Config as PwmConfig, PwmOutput};
use embedded_hal::pwm::SetDutyCycle;
use fixed::types::U12F4;

/// Slice configuration for LED dimming
///
/// `divider_sixteenths` is the clock divider as raw 8.4 fixed-point
/// bits (30.52 ≈ 30 + 8/16 = 488). Both channels start at zero duty.
pub fn led_pwm_config(wrap: u16, divider_sixteenths: u16) -> PwmConfig {
    let mut config = PwmConfig::default();
    config.top = wrap;
    config.divider = U12F4::from_bits(divider_sixteenths);
    config.compare_a = 0;
    config.compare_b = 0;
    config
}

/// One compare channel of a PWM slice
pub struct PwmPin {
    output: PwmOutput<'static>,
    duty: u16,
}

impl PwmPin {
    pub fn new(output: PwmOutput<'static>) -> Self {
        Self { output, duty: 0 }
    }
}

impl PwmChannel for PwmPin {
    fn max_duty(&self) -> u16 {
        self.output.max_duty_cycle()
    }

    fn set_duty(&mut self, duty: u16) {
        let duty = duty.min(self.max_duty());
        // Only fails for duty > max, which was clamped above
        if self.output.set_duty_cycle(duty).is_ok() {
            self.duty = duty;
        }
    }

    fn duty(&self) -> u16 {
        self.duty
    }
}
