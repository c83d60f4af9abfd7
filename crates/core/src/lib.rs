//! Core round logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the matching puzzle: picking colors, dealing
//! a shuffled row, the round state machine, and scoring. It has no
//! dependencies on terminal I/O or input handling, making it:
//!
//! - **Deterministic**: the same seed deals the same rounds
//! - **Testable**: every rule is covered by unit tests
//! - **Allocation-free**: rows are fixed-capacity arrays sized to the palette
//!
//! # Module Structure
//!
//! - [`palette`]: selects N distinct colors for a round
//! - [`shuffle`]: permutes the selection so the player never starts solved
//! - [`game_state`]: the Playing / Won / GaveUp state machine
//! - [`scoring`]: points for a finished round
//! - [`rng`]: seeded generator behind every random choice
//! - [`snapshot`]: read-only round view for presenters
//!
//! # Example
//!
//! ```
//! use cup_match_core::GameState;
//! use cup_match_core::types::{Color, Phase};
//!
//! let mut game = GameState::from_arrangements(
//!     &[Color::RED, Color::GREEN, Color::BLUE],
//!     &[Color::GREEN, Color::RED, Color::BLUE],
//! )
//! .unwrap();
//!
//! game.swap(0, 1).unwrap();
//! let result = game.check().unwrap();
//!
//! assert_eq!(result.correct_count, 3);
//! assert_eq!(game.phase(), Phase::Won);
//! assert_eq!(game.score(), Some(110));
//! ```

pub mod arrangement;
pub mod error;
pub mod game_state;
pub mod palette;
pub mod rng;
pub mod scoring;
pub mod shuffle;
pub mod snapshot;

pub use cup_match_types as types;

// Re-export commonly used types for convenience
pub use arrangement::{correct_count, same_multiset, Arrangement};
pub use error::GameError;
pub use game_state::{CheckResult, GameState, RoundResult};
pub use palette::select_colors;
pub use rng::SimpleRng;
pub use scoring::{score, PenaltyBasis, ScoreBreakdown, ScoringRules};
pub use shuffle::shuffle_permutation;
pub use snapshot::RoundSnapshot;
