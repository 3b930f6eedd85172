//! Render loop task
//!
//! Every frame: sample the joystick, update the PWM LEDs and draw the
//! border and cursor into the frame buffer under the board lock, then
//! flush to the OLED and clear the buffer for the next frame.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::{Duration, Timer};
use portable_atomic::Ordering;

use axial_core::control::Renderer;
use axial_core::traits::JoystickSource;
use axial_display::Ssd1306;

use crate::channels::{SharedBoard, EDGES_ACCEPTED, EDGES_DEBOUNCED};

/// OLED on I2C1
pub type Display = Ssd1306<I2c<'static, I2C1, Async>>;

/// Frames between status log lines
const STATUS_EVERY: u32 = 50;

#[embassy_executor::task]
pub async fn render_task(
    board: &'static SharedBoard,
    mut display: Display,
    renderer: Renderer,
    interval: Duration,
) {
    info!("Render task started");

    let mut frames: u32 = 0;

    loop {
        let (sample, ui, adc_error, adc_errors, duties) = board.lock(|b| {
            let mut b = b.borrow_mut();
            let b = &mut *b;
            let sample = b.joystick.sample();
            let ui = b.controller.ui();
            renderer
                .step(sample, ui, &mut b.leds, display.buffer_mut())
                .unwrap_or_else(|never| match never {});
            (
                sample,
                ui,
                b.joystick.take_error(),
                b.joystick.error_count(),
                b.leds.duties(),
            )
        });

        if let Some(e) = adc_error {
            warn!("Joystick ADC read failed: {:?}", e);
        }
        debug!("VRX: {}, VRY: {}", sample.x, sample.y);

        if display.is_initialized() {
            if let Err(e) = display.flush().await {
                warn!("Display flush failed: {:?}", e);
            }
        }
        display.clear();

        frames = frames.wrapping_add(1);
        if frames % STATUS_EVERY == 0 {
            info!(
                "frame {}: blue={} red={} led={} rgb={} edges accepted={} debounced={} adc errors={}",
                frames,
                duties.0,
                duties.1,
                ui.led_on(),
                ui.rgb_enabled(),
                EDGES_ACCEPTED.load(Ordering::Relaxed),
                EDGES_DEBOUNCED.load(Ordering::Relaxed),
                adc_errors
            );
        }

        Timer::after(interval).await;
    }
}
