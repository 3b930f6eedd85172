//! UI state toggled by the buttons

/// Border drawn around the play field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BorderStyle {
    #[default]
    Single,
    Double,
}

impl BorderStyle {
    /// The other style
    pub fn toggled(self) -> Self {
        match self {
            BorderStyle::Single => BorderStyle::Double,
            BorderStyle::Double => BorderStyle::Single,
        }
    }
}

/// Flags shared between the button handler and the render loop
///
/// `Copy` so the render loop works from a snapshot taken under the lock;
/// mutation is only possible from inside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UiState {
    led_on: bool,
    rgb_enabled: bool,
    border: BorderStyle,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            led_on: false,
            rgb_enabled: true,
            border: BorderStyle::Single,
        }
    }
}

impl UiState {
    /// Standalone status LED state
    pub fn led_on(&self) -> bool {
        self.led_on
    }

    /// Whether stick motion drives the PWM LEDs
    pub fn rgb_enabled(&self) -> bool {
        self.rgb_enabled
    }

    pub fn border(&self) -> BorderStyle {
        self.border
    }

    /// Flip the status LED and the border together
    pub(crate) fn toggle_led(&mut self) {
        self.led_on = !self.led_on;
        self.border = self.border.toggled();
    }

    pub(crate) fn toggle_rgb(&mut self) {
        self.rgb_enabled = !self.rgb_enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let ui = UiState::default();
        assert!(!ui.led_on());
        assert!(ui.rgb_enabled());
        assert_eq!(ui.border(), BorderStyle::Single);
    }

    #[test]
    fn test_led_and_border_move_together() {
        let mut ui = UiState::default();
        ui.toggle_led();
        assert!(ui.led_on());
        assert_eq!(ui.border(), BorderStyle::Double);

        ui.toggle_led();
        assert!(!ui.led_on());
        assert_eq!(ui.border(), BorderStyle::Single);
    }

    #[test]
    fn test_rgb_toggle_leaves_led_alone() {
        let mut ui = UiState::default();
        ui.toggle_rgb();
        assert!(!ui.rgb_enabled());
        assert!(!ui.led_on());
        assert_eq!(ui.border(), BorderStyle::Single);
    }
}
