//! RP2040-specific HAL for the joystick firmware
//!
//! This crate provides RP2040 implementations of the shared `axial-hal`
//! traits:
//!
//! - Multiplexed ADC over the joystick inputs ([`adc::RpAdc`])
//! - PWM compare outputs for the RGB LED ([`pwm::PwmPin`])
//! - GPIO outputs ([`gpio::LedPin`])

#![no_std]

pub mod adc;
pub mod gpio;
pub mod pwm;

// Re-export shared traits from axial-hal for convenience
pub use axial_hal::{AnalogSampler, OutputPin, PwmChannel};
