//! Configuration type definitions

use crate::axis::{AxisMapper, RestZone, ADC_MAX, AXIS_CENTER, REST_CENTER, REST_RADIUS};
use crate::debounce::Debouncer;
use crate::geometry::{Geometry, CURSOR_SIZE, DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Configuration errors
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Line is neither a section header, a key/value pair nor a comment
    Syntax { line: usize },
    /// Section header names an unknown section
    InvalidSection { line: usize },
    /// Same section appears twice
    DuplicateSection { line: usize },
    /// Key/value pair before any section header
    KeyOutsideSection { line: usize },
    /// Key not known in the current section
    UnknownKey { line: usize },
    /// Value has the wrong type or does not fit the field
    InvalidValue { line: usize },
    /// A field failed validation
    OutOfRange(&'static str),
}

/// `[joystick]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickConfig {
    /// Center for magnitude mapping
    pub center: u16,
    /// Center of the rest zone
    pub rest_center: u16,
    /// Half-width of the rest zone
    pub rest_radius: u16,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            center: AXIS_CENTER,
            rest_center: REST_CENTER,
            rest_radius: REST_RADIUS,
        }
    }
}

/// `[buttons]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    pub debounce_ms: u32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self { debounce_ms: 250 }
    }
}

/// `[leds]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedConfig {
    /// PWM counter top
    pub pwm_wrap: u16,
    /// PWM clock divider × 100 (3052 = 30.52)
    pub clock_divider_x100: u16,
    /// Status LED lights when its pin is low
    pub status_active_low: bool,
}

impl Default for LedConfig {
    fn default() -> Self {
        Self {
            pwm_wrap: 4095,
            clock_divider_x100: 3052,
            status_active_low: false,
        }
    }
}

impl LedConfig {
    /// Clock divider in 1/16 steps, rounded to nearest
    ///
    /// This is the raw bit pattern of an 8.4 fixed-point divider.
    pub fn divider_sixteenths(&self) -> u16 {
        ((self.clock_divider_x100 as u32 * 16 + 50) / 100) as u16
    }
}

/// `[display]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
    /// 7-bit I2C address
    pub address: u8,
    pub cursor_size: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            address: 0x3C,
            cursor_size: CURSOR_SIZE,
        }
    }
}

/// `[timing]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Delay between render loop iterations
    pub frame_interval_ms: u32,
    /// Delay before touching peripherals at boot
    pub startup_delay_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 100,
            startup_delay_ms: 1000,
        }
    }
}

/// Complete board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    pub joystick: JoystickConfig,
    pub buttons: ButtonConfig,
    pub leds: LedConfig,
    pub display: DisplayConfig,
    pub timing: TimingConfig,
}

impl BoardConfig {
    /// Check every field against what the hardware and drivers support
    pub fn validate(&self) -> Result<(), ConfigError> {
        let j = &self.joystick;
        if j.center > ADC_MAX {
            return Err(ConfigError::OutOfRange("joystick.center"));
        }
        if j.rest_center > ADC_MAX {
            return Err(ConfigError::OutOfRange("joystick.rest_center"));
        }
        if j.rest_radius > j.rest_center
            || j.rest_center as u32 + j.rest_radius as u32 > ADC_MAX as u32
        {
            return Err(ConfigError::OutOfRange("joystick.rest_radius"));
        }

        if self.buttons.debounce_ms == 0 {
            return Err(ConfigError::OutOfRange("buttons.debounce_ms"));
        }

        let l = &self.leds;
        if l.pwm_wrap == 0 {
            return Err(ConfigError::OutOfRange("leds.pwm_wrap"));
        }
        if !(100..=25500).contains(&l.clock_divider_x100) {
            return Err(ConfigError::OutOfRange("leds.clock_divider_x100"));
        }

        let d = &self.display;
        if d.width != DISPLAY_WIDTH {
            return Err(ConfigError::OutOfRange("display.width"));
        }
        if d.height != DISPLAY_HEIGHT {
            return Err(ConfigError::OutOfRange("display.height"));
        }
        if d.address > 0x7F {
            return Err(ConfigError::OutOfRange("display.address"));
        }
        if d.cursor_size == 0 || d.cursor_size > d.width.min(d.height) {
            return Err(ConfigError::OutOfRange("display.cursor_size"));
        }

        if self.timing.frame_interval_ms == 0 {
            return Err(ConfigError::OutOfRange("timing.frame_interval_ms"));
        }

        Ok(())
    }

    pub fn mapper(&self) -> AxisMapper {
        AxisMapper::new(self.joystick.center)
    }

    pub fn rest_zone(&self) -> RestZone {
        RestZone::new(self.joystick.rest_center, self.joystick.rest_radius)
    }

    pub fn geometry(&self) -> Geometry {
        Geometry {
            width: self.display.width,
            height: self.display.height,
            cursor_size: self.display.cursor_size,
        }
    }

    pub fn debouncer(&self) -> Debouncer {
        Debouncer::from_millis(self.buttons.debounce_ms)
    }
}
