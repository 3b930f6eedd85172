//! Button edge task
//!
//! One instance per button. Each waits for a falling edge (the inputs are
//! pulled up and switch to ground), timestamps it and hands it to the
//! shared handler.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use axial_core::control::EdgeOutcome;
use axial_core::state::{Button, ButtonEdge};

use crate::channels::SharedBoard;

#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut input: Input<'static>, button: Button, board: &'static SharedBoard) {
    info!("Button task started: {:?}", button);

    loop {
        input.wait_for_falling_edge().await;
        let edge = ButtonEdge::new(button, Instant::now().as_micros());

        let outcome = board.lock(|b| b.borrow_mut().handle_edge(edge));

        match outcome {
            EdgeOutcome::Accepted { button, ui } => debug!(
                "{:?}: led={} rgb={} border={:?}",
                button,
                ui.led_on(),
                ui.rgb_enabled(),
                ui.border()
            ),
            EdgeOutcome::Debounced => trace!("{:?}: debounced", button),
        }
    }
}
