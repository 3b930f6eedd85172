//! GPIO status LED
//!
//! Simple on/off LED on a GPIO pin, driven directly or through a
//! transistor.

use axial_hal::OutputPin;

/// GPIO LED output
///
/// Controls an LED via a GPIO pin. The pin can be configured as
/// active-high (default) or active-low.
pub struct GpioLed<P> {
    pin: P,
    /// If true, LED ON = pin LOW
    inverted: bool,
    /// Current logical state (true = lit)
    on: bool,
}

impl<P: OutputPin> GpioLed<P> {
    /// Create a new GPIO LED
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the LED is lit when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut led = Self {
            pin,
            inverted,
            on: false,
        };
        // Ensure LED starts off
        led.set_on(false);
        led
    }

    pub fn set_on(&mut self, on: bool) {
        self.on = on;
        // Normal: on=true, inverted=false → high
        // Inverted: on=true, inverted=true → low
        self.pin.set_state(on != self.inverted);
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
