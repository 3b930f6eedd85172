//! Analog-to-digital converter abstraction
//!
//! Models a single converter multiplexed over several input channels,
//! which is how the RP2040 (and most small MCUs) expose their ADC.

/// ADC read errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Channel number not wired to an input
    InvalidChannel,
    /// Conversion failed or timed out
    Conversion,
}

/// Multiplexed analog sampler
pub trait AnalogSampler {
    /// Full-scale reading (4095 for a 12-bit converter)
    const MAX_SAMPLE: u16;

    /// Route the converter to input channel `channel`
    fn select_channel(&mut self, channel: u8) -> Result<(), AdcError>;

    /// Run one conversion on the selected channel
    fn read_sample(&mut self) -> Result<u16, AdcError>;

    /// Select `channel` and read one sample from it
    fn read(&mut self, channel: u8) -> Result<u16, AdcError> {
        self.select_channel(channel)?;
        self.read_sample()
    }
}
