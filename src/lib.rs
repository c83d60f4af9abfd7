//! Cup Match (workspace facade crate).
//!
//! Re-exports the member crates under `cup_match::{core,engine,input,term,types}` and
//! hosts the application layer: configuration, the terminal app and the headless
//! line presenter.

pub use cup_match_core as core;
pub use cup_match_engine as engine;
pub use cup_match_input as input;
pub use cup_match_term as term;
pub use cup_match_types as types;

pub mod app;
pub mod config;
pub mod headless;
