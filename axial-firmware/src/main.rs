//! Axial - Joystick / RGB LED / OLED firmware
//!
//! Main firmware binary for RP2040 boards with a two-axis analog
//! joystick, two buttons, an RGB LED and a 128x64 SSD1306 display.
//!
//! - The joystick's Y axis dims the blue LED and X the red LED
//! - An 8x8 square follows the stick on the display inside a border
//! - The joystick click toggles the green LED and the border style
//! - Button A toggles whether the stick drives the RGB LED

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::Pwm;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Duration, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use axial_core::control::{Controller, Renderer};
use axial_core::state::Button;
use axial_display::Ssd1306;
use axial_drivers::joystick::{AnalogJoystick, JoystickChannels};
use axial_drivers::led::{GpioLed, Indicators, PwmLed};
use axial_hal_rp2040::adc::RpAdc;
use axial_hal_rp2040::gpio::LedPin;
use axial_hal_rp2040::pwm::{led_pwm_config, PwmPin};

use crate::channels::{Board, SharedBoard};

mod channels;
mod config;
mod tasks;

/// Display bus speed
const I2C_FREQUENCY_HZ: u32 = 400_000;

bind_interrupts!(struct Irqs {
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

// Shared board state (must live forever for task references)
static BOARD: StaticCell<SharedBoard> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Axial firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // Give the display and debug probe time to come up
    Timer::after_millis(config.timing.startup_delay_ms as u64).await;

    // Buttons: pulled up, pressed = low
    // Pin assignment is board-specific (joystick click: GPIO22, button A: GPIO5)
    let click = Input::new(p.PIN_22, Pull::Up);
    let button_a = Input::new(p.PIN_5, Pull::Up);

    // RGB LED: blue GPIO12 (slice 6 A), red GPIO13 (slice 6 B), green GPIO11
    let pwm_config = led_pwm_config(config.leds.pwm_wrap, config.leds.divider_sixteenths());
    let pwm = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, pwm_config);
    let (blue, red) = pwm.split();
    let blue = PwmLed::new(PwmPin::new(unwrap!(blue)));
    let red = PwmLed::new(PwmPin::new(unwrap!(red)));
    let green = GpioLed::new(
        LedPin::new(Output::new(p.PIN_11, Level::Low)),
        config.leds.status_active_low,
    );
    info!(
        "PWM initialized: wrap={}, divider={}/16",
        config.leds.pwm_wrap,
        config.leds.divider_sixteenths()
    );

    // Joystick: Y on GPIO26 (ADC0), X on GPIO27 (ADC1)
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let y_axis = Channel::new_pin(p.PIN_26, Pull::None);
    let x_axis = Channel::new_pin(p.PIN_27, Pull::None);
    let joystick = AnalogJoystick::new(
        RpAdc::new(adc, [y_axis, x_axis]),
        JoystickChannels::default(),
    );
    info!("ADC initialized");

    // Display: I2C1 on SDA GPIO14, SCL GPIO15
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c_config);
    let mut display = Ssd1306::new(i2c, config.display.address);
    match display.init().await {
        Ok(()) => {
            display.clear();
            if let Err(e) = display.flush().await {
                warn!("Initial display clear failed: {:?}", e);
            }
            info!("Display initialized at {:#x}", config.display.address);
        }
        Err(e) => {
            // Keep the LEDs running without the display
            error!("Display init failed: {:?}", e);
        }
    }

    let board = BOARD.init(Mutex::new(RefCell::new(Board {
        controller: Controller::new(config.debouncer(), config.mapper()),
        joystick,
        leds: Indicators::new(blue, red, green),
    })));

    let renderer = Renderer::new(config.mapper(), config.rest_zone(), config.geometry());
    let interval = Duration::from_millis(config.timing.frame_interval_ms as u64);

    // Spawn tasks
    spawner
        .spawn(tasks::button_task(click, Button::JoystickClick, board))
        .unwrap();
    spawner
        .spawn(tasks::button_task(button_a, Button::ButtonA, board))
        .unwrap();
    spawner
        .spawn(tasks::render_task(board, display, renderer, interval))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
