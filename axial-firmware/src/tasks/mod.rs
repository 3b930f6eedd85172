//! Embassy async tasks
//!
//! Each task runs independently and shares the board through
//! [`crate::channels::SharedBoard`].

pub mod buttons;
pub mod render;

pub use buttons::button_task;
pub use render::{render_task, Display};
