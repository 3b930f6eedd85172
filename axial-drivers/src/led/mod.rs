//! LED drivers

pub mod gpio;
pub mod indicators;
pub mod pwm;

pub use gpio::GpioLed;
pub use indicators::Indicators;
pub use pwm::PwmLed;
