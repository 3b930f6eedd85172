//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in axial-core, written against the axial-hal pin traits:
//!
//! - LED drivers (GPIO on/off, PWM brightness) and the [`led::Indicators`]
//!   bundle the control logic drives
//! - Analog joystick over a multiplexed ADC

#![no_std]
#![deny(unsafe_code)]

pub mod joystick;
pub mod led;
