//! Button events delivered by the platform

/// Physical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Joystick push switch; toggles the status LED and border style
    JoystickClick,
    /// Button A; toggles whether the stick drives the RGB LED
    ButtonA,
}

/// A falling edge seen on a button input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEdge {
    pub button: Button,
    /// Monotonic timestamp of the edge in microseconds
    pub at_us: u64,
}

impl ButtonEdge {
    pub const fn new(button: Button, at_us: u64) -> Self {
        Self { button, at_us }
    }
}
