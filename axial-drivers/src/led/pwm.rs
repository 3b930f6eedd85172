//! PWM-dimmed LED

use axial_hal::PwmChannel;

/// LED on one PWM channel
///
/// Brightness is in counter ticks. Requests above the channel's wrap are
/// clamped so a full-deflection joystick reading (2048 on a 4095 wrap, or
/// anything on a lower wrap) can never overflow the compare register.
pub struct PwmLed<C> {
    channel: C,
}

impl<C: PwmChannel> PwmLed<C> {
    /// Wrap a channel and switch it off
    pub fn new(mut channel: C) -> Self {
        channel.off();
        Self { channel }
    }

    pub fn set_brightness(&mut self, duty: u16) {
        let duty = duty.min(self.channel.max_duty());
        self.channel.set_duty(duty);
    }

    pub fn brightness(&self) -> u16 {
        self.channel.duty()
    }

    pub fn off(&mut self) {
        self.channel.off();
    }

    pub fn is_on(&self) -> bool {
        self.channel.duty() > 0
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Mock PWM channel that stores the raw compare value
    pub struct MockPwm {
        pub max: u16,
        pub duty: u16,
    }

    impl MockPwm {
        pub fn new(max: u16) -> Self {
            // Start lit to check that construction turns it off
            Self { max, duty: max }
        }
    }

    impl PwmChannel for MockPwm {
        fn max_duty(&self) -> u16 {
            self.max
        }

        fn set_duty(&mut self, duty: u16) {
            assert!(duty <= self.max, "duty {} above wrap {}", duty, self.max);
            self.duty = duty;
        }

        fn duty(&self) -> u16 {
            self.duty
        }
    }

    #[test]
    fn test_starts_off() {
        let led = PwmLed::new(MockPwm::new(4095));
        assert_eq!(led.brightness(), 0);
        assert!(!led.is_on());
    }

    #[test]
    fn test_set_brightness() {
        let mut led = PwmLed::new(MockPwm::new(4095));
        led.set_brightness(2048);
        assert_eq!(led.brightness(), 2048);
        assert!(led.is_on());
        led.off();
        assert!(!led.is_on());
    }

    proptest! {
        #[test]
        fn prop_brightness_clamped_to_wrap(max in 1u16..=u16::MAX, duty: u16) {
            let mut led = PwmLed::new(MockPwm::new(max));
            led.set_brightness(duty);
            prop_assert_eq!(led.brightness(), duty.min(max));
        }
    }
}
