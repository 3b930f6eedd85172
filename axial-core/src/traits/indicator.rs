//! LED outputs driven by the control logic

/// PWM-driven LED channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedChannel {
    /// Follows the Y axis
    Blue,
    /// Follows the X axis
    Red,
}

/// The board's LED outputs
///
/// Two PWM channels plus one on/off status LED.
pub trait IndicatorOutputs {
    /// Set a PWM channel's duty cycle in counter ticks
    fn set_duty(&mut self, channel: LedChannel, duty: u16);

    /// Switch the status LED
    fn set_status_led(&mut self, on: bool);

    /// Force both PWM channels off
    fn pwm_off(&mut self) {
        self.set_duty(LedChannel::Blue, 0);
        self.set_duty(LedChannel::Red, 0);
    }
}
