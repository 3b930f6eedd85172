//! PWM channel abstraction

/// A single PWM compare output
///
/// Duty cycle is expressed in counter ticks, `0..=max_duty()`. The counter
/// top (wrap) value is fixed when the slice is configured.
pub trait PwmChannel {
    /// Counter top value; a duty of this value is fully on
    fn max_duty(&self) -> u16;

    /// Set the duty cycle in ticks
    ///
    /// Values above [`max_duty`](Self::max_duty) are clamped.
    fn set_duty(&mut self, duty: u16);

    /// Last duty cycle written
    fn duty(&self) -> u16;

    /// Turn the output fully off
    fn off(&mut self) {
        self.set_duty(0);
    }
}
