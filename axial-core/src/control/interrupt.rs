//! Debounced button handling
//!
//! Every falling edge from either button funnels through
//! [`Controller::handle_edge`]. The handler only flips flags and writes
//! LED outputs; it never blocks.

use crate::axis::{Axis, AxisMapper};
use crate::debounce::Debouncer;
use crate::state::{Button, ButtonEdge, UiState};
use crate::traits::{IndicatorOutputs, JoystickSource, LedChannel};

/// Result of handling one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Edge fell inside the debounce window and was dropped
    Debounced,
    /// Edge was accepted; `ui` is the state after the toggle
    Accepted { button: Button, ui: UiState },
}

impl EdgeOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, EdgeOutcome::Accepted { .. })
    }
}

/// Owner of the shared UI state and the debounce clock
///
/// The firmware keeps one of these behind a critical-section mutex; the
/// render loop only ever sees [`UiState`] snapshots via [`Controller::ui`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Controller {
    ui: UiState,
    debounce: Debouncer,
    mapper: AxisMapper,
}

impl Controller {
    pub fn new(debounce: Debouncer, mapper: AxisMapper) -> Self {
        Self {
            ui: UiState::default(),
            debounce,
            mapper,
        }
    }

    /// Snapshot of the current UI flags
    pub fn ui(&self) -> UiState {
        self.ui
    }

    /// Handle one falling edge
    ///
    /// Joystick click flips the status LED and border style. Button A
    /// flips RGB tracking; when it turns on, both LEDs are set right away
    /// from a fresh joystick reading, and when it turns off both go dark.
    pub fn handle_edge<J, O>(
        &mut self,
        edge: ButtonEdge,
        joystick: &mut J,
        outputs: &mut O,
    ) -> EdgeOutcome
    where
        J: JoystickSource,
        O: IndicatorOutputs,
    {
        if !self.debounce.accept(edge.at_us) {
            return EdgeOutcome::Debounced;
        }

        match edge.button {
            Button::JoystickClick => {
                self.ui.toggle_led();
                outputs.set_status_led(self.ui.led_on());
            }
            Button::ButtonA => {
                self.ui.toggle_rgb();
                if self.ui.rgb_enabled() {
                    let sample = joystick.sample();
                    let blue = self.mapper.duty(sample.axis(Axis::Y));
                    let red = self.mapper.duty(sample.axis(Axis::X));
                    outputs.set_duty(LedChannel::Blue, blue);
                    outputs.set_duty(LedChannel::Red, red);
                } else {
                    outputs.pwm_off();
                }
            }
        }

        EdgeOutcome::Accepted {
            button: edge.button,
            ui: self.ui,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::JoystickSample;
    use crate::control::mock::{MockJoystick, MockOutputs};
    use crate::state::BorderStyle;

    fn click(at_us: u64) -> ButtonEdge {
        ButtonEdge::new(Button::JoystickClick, at_us)
    }

    fn button_a(at_us: u64) -> ButtonEdge {
        ButtonEdge::new(Button::ButtonA, at_us)
    }

    fn setup() -> (Controller, MockJoystick, MockOutputs) {
        (
            Controller::default(),
            MockJoystick::new(JoystickSample::new(3000, 1000)),
            MockOutputs::default(),
        )
    }

    #[test]
    fn test_click_toggles_led_and_border() {
        let (mut c, mut j, mut o) = setup();

        let outcome = c.handle_edge(click(0), &mut j, &mut o);
        assert_eq!(
            outcome,
            EdgeOutcome::Accepted {
                button: Button::JoystickClick,
                ui: c.ui()
            }
        );
        assert!(c.ui().led_on());
        assert_eq!(c.ui().border(), BorderStyle::Double);
        assert!(o.status);
        // Click never touches the joystick or PWM
        assert_eq!(j.reads, 0);
        assert_eq!(o.duty_writes, 0);
    }

    #[test]
    fn test_double_click_restores_state() {
        let (mut c, mut j, mut o) = setup();
        let before = c.ui();

        c.handle_edge(click(0), &mut j, &mut o);
        c.handle_edge(click(300_000), &mut j, &mut o);

        assert_eq!(c.ui(), before);
        assert!(!o.status);
    }

    #[test]
    fn test_edges_inside_window_toggle_once() {
        let (mut c, mut j, mut o) = setup();

        assert!(c.handle_edge(click(0), &mut j, &mut o).is_accepted());
        assert_eq!(
            c.handle_edge(click(249_999), &mut j, &mut o),
            EdgeOutcome::Debounced
        );
        assert!(c.ui().led_on());
        assert_eq!(c.ui().border(), BorderStyle::Double);
    }

    #[test]
    fn test_edges_outside_window_both_toggle() {
        let (mut c, mut j, mut o) = setup();

        assert!(c.handle_edge(click(0), &mut j, &mut o).is_accepted());
        assert!(c.handle_edge(click(250_000), &mut j, &mut o).is_accepted());
        assert!(!c.ui().led_on());
    }

    #[test]
    fn test_buttons_share_debounce_clock() {
        let (mut c, mut j, mut o) = setup();

        assert!(c.handle_edge(click(0), &mut j, &mut o).is_accepted());
        assert_eq!(
            c.handle_edge(button_a(10_000), &mut j, &mut o),
            EdgeOutcome::Debounced
        );
        assert!(c.ui().rgb_enabled());
    }

    #[test]
    fn test_button_a_disable_forces_leds_off() {
        let (mut c, mut j, mut o) = setup();
        o.blue = 1234;
        o.red = 4321;

        c.handle_edge(button_a(0), &mut j, &mut o);

        assert!(!c.ui().rgb_enabled());
        assert_eq!((o.blue, o.red), (0, 0));
        assert_eq!(j.reads, 0);
    }

    #[test]
    fn test_button_a_enable_drives_from_fresh_sample() {
        let (mut c, mut j, mut o) = setup();

        c.handle_edge(button_a(0), &mut j, &mut o);
        j.next = JoystickSample::new(4095, 0);
        c.handle_edge(button_a(500_000), &mut j, &mut o);

        assert!(c.ui().rgb_enabled());
        assert_eq!(j.reads, 1);
        assert_eq!(o.blue, 2048);
        assert_eq!(o.red, 2047);
        // Status LED untouched
        assert!(!o.status);
    }
}
