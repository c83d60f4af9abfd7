//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into UI actions and turns swap
//! gestures (drag-and-drop or click-select) into
//! [`GameCommand::Swap`](crate::types::GameCommand::Swap). Duplicate commands
//! arriving in quick succession are filtered by a [`Debouncer`] before they
//! reach the controller.

pub mod gesture;
pub mod map;

pub use cup_match_types as types;

pub use gesture::{Debouncer, GestureTracker, DEFAULT_DEBOUNCE_MS};
pub use map::{handle_key_event, handle_mouse_event, should_quit, PointerAction, UiAction};
