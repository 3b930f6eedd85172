//! Two-axis analog joystick
//!
//! Each axis is a potentiometer on its own ADC input. Y is converted
//! first, then X.

use axial_core::axis::JoystickSample;
use axial_core::traits::JoystickSource;
use axial_hal::{AdcError, AnalogSampler};

/// ADC input wiring for the two axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickChannels {
    pub y: u8,
    pub x: u8,
}

impl Default for JoystickChannels {
    /// Y on ADC0 (GPIO26), X on ADC1 (GPIO27)
    fn default() -> Self {
        Self { y: 0, x: 1 }
    }
}

/// Joystick read through a multiplexed ADC
///
/// A failed conversion keeps that axis at its last good value and is
/// counted; the control loop never sees an error.
pub struct AnalogJoystick<A> {
    adc: A,
    channels: JoystickChannels,
    last: JoystickSample,
    errors: u32,
    last_error: Option<AdcError>,
}

impl<A: AnalogSampler> AnalogJoystick<A> {
    pub fn new(adc: A, channels: JoystickChannels) -> Self {
        Self {
            adc,
            channels,
            last: JoystickSample::CENTERED,
            errors: 0,
            last_error: None,
        }
    }

    /// Number of failed conversions so far
    pub fn error_count(&self) -> u32 {
        self.errors
    }

    /// Most recent conversion error, cleared by [`take_error`](Self::take_error)
    pub fn take_error(&mut self) -> Option<AdcError> {
        self.last_error.take()
    }

    fn read_axis(&mut self, channel: u8, fallback: u16) -> u16 {
        match self.adc.read(channel) {
            Ok(raw) => raw.min(A::MAX_SAMPLE),
            Err(e) => {
                self.errors = self.errors.wrapping_add(1);
                self.last_error = Some(e);
                fallback
            }
        }
    }
}

impl<A: AnalogSampler> JoystickSource for AnalogJoystick<A> {
    fn sample(&mut self) -> JoystickSample {
        let y = self.read_axis(self.channels.y, self.last.y);
        let x = self.read_axis(self.channels.x, self.last.x);
        self.last = JoystickSample::new(y, x);
        self.last
    }
}
