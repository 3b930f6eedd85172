//! Joystick axis mapping
//!
//! Converts raw 12-bit ADC samples into deviation-from-center magnitudes
//! and decides whether the stick is at rest.

/// Raw ADC reading, `0..=ADC_MAX`
pub type RawSample = u16;

/// Absolute deviation of a sample from the mapping center
///
/// Signed so it can flow straight into cursor arithmetic, but never
/// negative.
pub type AxisMagnitude = i32;

/// Full-scale 12-bit reading
pub const ADC_MAX: RawSample = 4095;

/// Center used for magnitude mapping
pub const AXIS_CENTER: RawSample = 2047;

/// Center of the rest (dead) zone
///
/// Intentionally not equal to [`AXIS_CENTER`]; it matches where the
/// stick physically settles on the reference board.
pub const REST_CENTER: RawSample = 2060;

/// Half-width of the rest zone
pub const REST_RADIUS: RawSample = 100;

/// Joystick axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Horizontal, drives the red LED
    X,
    /// Vertical, drives the blue LED
    Y,
}

/// One reading of both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickSample {
    pub y: RawSample,
    pub x: RawSample,
}

impl JoystickSample {
    /// Stick at the mapping center
    pub const CENTERED: Self = Self {
        y: AXIS_CENTER,
        x: AXIS_CENTER,
    };

    pub const fn new(y: RawSample, x: RawSample) -> Self {
        Self { y, x }
    }

    /// Raw value for one axis
    pub const fn axis(&self, axis: Axis) -> RawSample {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Maps raw samples to magnitudes around a fixed center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisMapper {
    center: RawSample,
}

impl Default for AxisMapper {
    fn default() -> Self {
        Self::new(AXIS_CENTER)
    }
}

impl AxisMapper {
    pub const fn new(center: RawSample) -> Self {
        Self { center }
    }

    pub const fn center(&self) -> RawSample {
        self.center
    }

    /// Absolute deviation of `raw` from the center
    ///
    /// With the default center the result spans `0..=2048`: the low end
    /// reaches 2047 at `raw == 0` and the high end 2048 at `raw == 4095`.
    pub fn magnitude(&self, raw: RawSample) -> AxisMagnitude {
        let raw = raw as AxisMagnitude;
        let center = self.center as AxisMagnitude;
        if raw < center {
            center - raw
        } else {
            raw - center
        }
    }

    /// Magnitude of one axis of a sample
    pub fn axis_magnitude(&self, sample: JoystickSample, axis: Axis) -> AxisMagnitude {
        self.magnitude(sample.axis(axis))
    }

    /// Magnitude as a PWM duty value
    pub fn duty(&self, raw: RawSample) -> u16 {
        // Magnitude of a u16 around a u16 center always fits in u16
        self.magnitude(raw) as u16
    }
}

/// Magnitude with the default center
pub fn magnitude(raw: RawSample) -> AxisMagnitude {
    AxisMapper::default().magnitude(raw)
}

/// Square zone in which the stick is considered at rest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RestZone {
    center: RawSample,
    radius: RawSample,
}

impl Default for RestZone {
    fn default() -> Self {
        Self::new(REST_CENTER, REST_RADIUS)
    }
}

impl RestZone {
    pub const fn new(center: RawSample, radius: RawSample) -> Self {
        Self { center, radius }
    }

    /// Inclusive lower bound
    pub const fn low(&self) -> RawSample {
        self.center.saturating_sub(self.radius)
    }

    /// Inclusive upper bound
    pub const fn high(&self) -> RawSample {
        self.center.saturating_add(self.radius)
    }

    fn contains_raw(&self, raw: RawSample) -> bool {
        raw >= self.low() && raw <= self.high()
    }

    /// True when both axes sit inside the zone
    pub fn contains(&self, sample: JoystickSample) -> bool {
        self.contains_raw(sample.x) && self.contains_raw(sample.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_magnitude_at_center_is_zero() {
        assert_eq!(magnitude(2047), 0);
    }

    #[test]
    fn test_magnitude_extremes() {
        assert_eq!(magnitude(0), 2047);
        assert_eq!(magnitude(ADC_MAX), 2048);
        assert_eq!(magnitude(2046), 1);
        assert_eq!(magnitude(2048), 1);
    }

    #[test]
    fn test_axis_selection() {
        let mapper = AxisMapper::default();
        let sample = JoystickSample::new(4000, 100);
        assert_eq!(mapper.axis_magnitude(sample, Axis::Y), 1953);
        assert_eq!(mapper.axis_magnitude(sample, Axis::X), 1947);
    }

    #[test]
    fn test_rest_zone_bounds() {
        let zone = RestZone::default();
        assert_eq!(zone.low(), 1960);
        assert_eq!(zone.high(), 2160);

        assert!(zone.contains(JoystickSample::new(1960, 2160)));
        assert!(zone.contains(JoystickSample::CENTERED));
        assert!(!zone.contains(JoystickSample::new(1959, 2060)));
        assert!(!zone.contains(JoystickSample::new(2060, 2161)));
    }

    #[test]
    fn test_rest_zone_needs_both_axes() {
        let zone = RestZone::default();
        assert!(!zone.contains(JoystickSample::new(2060, 0)));
        assert!(!zone.contains(JoystickSample::new(4095, 2060)));
    }

    #[test]
    fn test_rest_zone_saturates() {
        let zone = RestZone::new(50, 100);
        assert_eq!(zone.low(), 0);
        assert!(zone.contains(JoystickSample::new(0, 150)));
    }

    proptest! {
        #[test]
        fn prop_magnitude_is_abs_deviation(raw in 0u16..=ADC_MAX) {
            let expected = (raw as i32 - 2047).abs();
            prop_assert_eq!(magnitude(raw), expected);
            prop_assert!(magnitude(raw) >= 0);
        }

        #[test]
        fn prop_duty_never_exceeds_wrap(raw in 0u16..=ADC_MAX) {
            prop_assert!(AxisMapper::default().duty(raw) <= ADC_MAX);
        }
    }
}
