//! Shared UI state and input events
//!
//! The UI state is the only mutable state shared between the button
//! handler and the render loop. It is written only by the handler.

pub mod events;
pub mod ui;

pub use events::{Button, ButtonEdge};
pub use ui::{BorderStyle, UiState};
