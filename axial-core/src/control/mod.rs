//! Control logic
//!
//! - [`Controller`]: debounced button handling over the shared UI state
//! - [`Renderer`]: per-frame LED and drawing decisions
//!
//! Neither touches hardware directly; both work through the traits in
//! [`crate::traits`] so the firmware can run them under a lock and the
//! tests can run them against mocks.

pub mod interrupt;
pub mod render;

pub use interrupt::{Controller, EdgeOutcome};
pub use render::{Frame, LedUpdate, Renderer};
