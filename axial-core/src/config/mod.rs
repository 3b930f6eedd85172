//! Board configuration
//!
//! Tuning constants for the joystick, buttons, LEDs, display and loop
//! timing. The firmware embeds a `board.toml` and parses it at boot with
//! [`parse_config`]; any failure falls back to [`BoardConfig::default`].

pub mod parse;
pub mod types;

pub use parse::parse_config;
pub use types::*;
