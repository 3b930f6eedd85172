//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and the board-specific joystick and LED drivers.

pub mod indicator;
pub mod joystick;

pub use indicator::{IndicatorOutputs, LedChannel};
pub use joystick::JoystickSource;
