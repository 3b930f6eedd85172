//! State shared between Embassy tasks
//!
//! The button tasks and the render task share one [`Board`] behind a
//! critical-section mutex. Every button edge and every LED update runs
//! inside a single `lock`, so the render task never sees a half-applied
//! toggle. The I2C flush happens outside the lock.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use portable_atomic::{AtomicU32, Ordering};

use axial_core::control::{Controller, EdgeOutcome};
use axial_core::state::ButtonEdge;
use axial_drivers::joystick::AnalogJoystick;
use axial_drivers::led::Indicators;
use axial_hal_rp2040::adc::RpAdc;
use axial_hal_rp2040::gpio::LedPin;
use axial_hal_rp2040::pwm::PwmPin;

/// Joystick on ADC0 (Y) and ADC1 (X)
pub type Joystick = AnalogJoystick<RpAdc<2>>;

/// Blue and red on PWM slice 6, green status LED on a plain GPIO
pub type Leds = Indicators<PwmPin, PwmPin, LedPin>;

/// Everything the button handler and render loop both touch
pub struct Board {
    pub controller: Controller,
    pub joystick: Joystick,
    pub leds: Leds,
}

impl Board {
    /// Run the debounced button handler against this board
    pub fn handle_edge(&mut self, edge: ButtonEdge) -> EdgeOutcome {
        let outcome = self
            .controller
            .handle_edge(edge, &mut self.joystick, &mut self.leds);
        match outcome {
            EdgeOutcome::Accepted { .. } => EDGES_ACCEPTED.fetch_add(1, Ordering::Relaxed),
            EdgeOutcome::Debounced => EDGES_DEBOUNCED.fetch_add(1, Ordering::Relaxed),
        };
        outcome
    }
}

/// Shared board handle passed to every task
pub type SharedBoard = Mutex<CriticalSectionRawMutex, RefCell<Board>>;

/// Button edges that toggled state
pub static EDGES_ACCEPTED: AtomicU32 = AtomicU32::new(0);

/// Button edges dropped by the debounce window
pub static EDGES_DEBOUNCED: AtomicU32 = AtomicU32::new(0);
