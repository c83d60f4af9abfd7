//! Engine - command dispatch between presentation layers and the core
//!
//! The engine owns the one [`GameState`](crate::core::GameState) of a session
//! inside a [`Controller`]. Presentation layers (the terminal UI, the headless
//! line presenter) implement [`Presenter`] to receive [`RoundEvent`]s and send
//! [`GameCommand`](crate::types::GameCommand)s back.

pub mod controller;
pub mod presenter;

pub use cup_match_core as core;
pub use cup_match_types as types;

pub use controller::Controller;
pub use presenter::{Presenter, RoundEvent};
