//! ADC sampling
//!
//! RP2040 has a single 12-bit ADC multiplexed over five inputs:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor
//!
//! [`RpAdc`] owns the converter plus the pin channels it was given; the
//! channel number passed to [`AnalogSampler::select_channel`] indexes
//! that list.

use axial_hal::{AdcError, AnalogSampler};
use embassy_rp::adc::{Adc, Blocking, Channel};

/// Blocking ADC with a fixed set of input channels
pub struct RpAdc<const N: usize> {
    adc: Adc<'static, Blocking>,
    channels: [Channel<'static>; N],
    selected: Option<usize>,
}

impl<const N: usize> RpAdc<N> {
    /// Take the converter and its channels
    ///
    /// Channel `i` in `channels` is selected with `select_channel(i)`.
    pub fn new(adc: Adc<'static, Blocking>, channels: [Channel<'static>; N]) -> Self {
        Self {
            adc,
            channels,
            selected: None,
        }
    }
}

impl<const N: usize> AnalogSampler for RpAdc<N> {
    const MAX_SAMPLE: u16 = 4095;

    fn select_channel(&mut self, channel: u8) -> Result<(), AdcError> {
        let idx = channel as usize;
        if idx >= N {
            return Err(AdcError::InvalidChannel);
        }
        self.selected = Some(idx);
        Ok(())
    }

    fn read_sample(&mut self) -> Result<u16, AdcError> {
        let idx = self.selected.ok_or(AdcError::InvalidChannel)?;
        self.adc
            .blocking_read(&mut self.channels[idx])
            .map_err(|_| AdcError::Conversion)
    }
}
