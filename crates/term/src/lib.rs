//! Terminal presentation layer.
//!
//! Renders into a simple framebuffer that is flushed to the terminal with
//! per-run diffing, rather than going through a widget toolkit.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: pure mapping from a round snapshot and UI state to a frame,
//!   plus the slot layout used for mouse hit-testing
//! - [`renderer`]: terminal setup/teardown and frame flushing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use cup_match_core as core;
pub use cup_match_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, Screen, UiView, Viewport};
pub use renderer::TerminalRenderer;
