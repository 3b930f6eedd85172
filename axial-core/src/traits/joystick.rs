//! Analog joystick input

use crate::axis::JoystickSample;

/// Source of two-axis joystick readings
///
/// Implementations read the Y axis first, then X. Reads are best effort:
/// a driver that fails to convert should return its last good sample
/// rather than an error, so the control loop never stalls on the ADC.
pub trait JoystickSource {
    /// Take a fresh reading of both axes
    fn sample(&mut self) -> JoystickSample;
}
