//! The board's LED set as seen by the control logic

use axial_core::traits::{IndicatorOutputs, LedChannel};
use axial_hal::{OutputPin, PwmChannel};

use super::{GpioLed, PwmLed};

/// Blue and red PWM LEDs plus the green status LED
pub struct Indicators<B, R, G> {
    pub blue: PwmLed<B>,
    pub red: PwmLed<R>,
    pub status: GpioLed<G>,
}

impl<B, R, G> Indicators<B, R, G>
where
    B: PwmChannel,
    R: PwmChannel,
    G: OutputPin,
{
    pub fn new(blue: PwmLed<B>, red: PwmLed<R>, status: GpioLed<G>) -> Self {
        Self { blue, red, status }
    }

    /// Current (blue, red) duty values
    pub fn duties(&self) -> (u16, u16) {
        (self.blue.brightness(), self.red.brightness())
    }
}

impl<B, R, G> IndicatorOutputs for Indicators<B, R, G>
where
    B: PwmChannel,
    R: PwmChannel,
    G: OutputPin,
{
    fn set_duty(&mut self, channel: LedChannel, duty: u16) {
        match channel {
            LedChannel::Blue => self.blue.set_brightness(duty),
            LedChannel::Red => self.red.set_brightness(duty),
        }
    }

    fn set_status_led(&mut self, on: bool) {
        self.status.set_on(on);
    }
}
