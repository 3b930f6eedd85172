//! Board-agnostic core logic for the joystick firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Axis mapping and the rest zone ([`axis`])
//! - Cursor and border geometry ([`geometry`])
//! - Shared UI state and button events ([`state`])
//! - Edge debouncing ([`debounce`])
//! - Button handling and per-frame rendering ([`control`])
//! - Hardware abstraction traits ([`traits`])
//! - Configuration types and the `board.toml` parser ([`config`])

#![no_std]
#![deny(unsafe_code)]

pub mod axis;
pub mod config;
pub mod control;
pub mod debounce;
pub mod geometry;
pub mod state;
pub mod traits;
