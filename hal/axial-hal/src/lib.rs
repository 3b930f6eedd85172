//! Axial Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs. Drivers in `axial-drivers` are written against
//! these traits so they can be unit tested on the host with mock pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (axial-firmware)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  axial-drivers (LEDs, joystick)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  axial-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ axial-hal-    │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output
//! - [`pwm::PwmChannel`] - One PWM compare channel
//! - [`adc::AnalogSampler`] - Multiplexed ADC

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod pwm;

// Re-export key traits at crate root for convenience
pub use adc::{AdcError, AnalogSampler};
pub use gpio::OutputPin;
pub use pwm::PwmChannel;
