//! GPIO outputs

use axial_hal::OutputPin;
use embassy_rp::gpio::Output;

/// Push-pull output driving an LED
pub struct LedPin(Output<'static>);

impl LedPin {
    pub fn new(output: Output<'static>) -> Self {
        Self(output)
    }
}

impl OutputPin for LedPin {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn toggle(&mut self) {
        self.0.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}
