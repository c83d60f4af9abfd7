//! Protocol module - JSON line messages of the headless presenter.
//!
//! One message per line. Every message carries a `type` tag; colors are
//! written as their `#rrggbb` hex strings.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, RoundSnapshot};
use crate::engine::RoundEvent;
use crate::types::{Color, GameCommand};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutboundMessage {
    RoundStarted {
        round_id: u32,
        item_count: usize,
        player: Vec<String>,
    },
    ArrangementChanged {
        player: Vec<String>,
        swapped: [usize; 2],
    },
    CheckResult {
        correct_count: usize,
        check_count: u32,
        item_count: usize,
        won: bool,
    },
    RoundEnded {
        outcome: String,
        target: Vec<String>,
        score: u32,
        correct_count: usize,
        check_count: u32,
        item_count: usize,
    },
    CommandRejected {
        command: String,
        code: String,
        message: String,
    },
    State(StateMessage),
    /// A line that is not a command.
    Error {
        message: String,
    },
}

/// Reply to the `state` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateMessage {
    pub round_id: u32,
    pub seed: u32,
    pub phase: String,
    pub item_count: usize,
    pub check_count: u32,
    pub player: Vec<String>,
    /// Present only once the round has ended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<String>>,
    pub last_correct: Option<usize>,
    pub score: Option<u32>,
}

fn hexes(colors: &[Color]) -> Vec<String> {
    colors.iter().map(|c| c.hex().to_string()).collect()
}

pub fn rejection_message(command: GameCommand, error: &GameError) -> OutboundMessage {
    OutboundMessage::CommandRejected {
        command: command.as_str().to_string(),
        code: error.code().to_string(),
        message: error.to_string(),
    }
}

impl From<&RoundEvent> for OutboundMessage {
    fn from(event: &RoundEvent) -> Self {
        match event {
            RoundEvent::RoundStarted {
                round_id,
                item_count,
                player,
            } => OutboundMessage::RoundStarted {
                round_id: *round_id,
                item_count: *item_count,
                player: hexes(player),
            },
            RoundEvent::ArrangementChanged { player, swapped } => {
                OutboundMessage::ArrangementChanged {
                    player: hexes(player),
                    swapped: [swapped.0, swapped.1],
                }
            }
            RoundEvent::CheckResult(r) => OutboundMessage::CheckResult {
                correct_count: r.correct_count,
                check_count: r.check_count,
                item_count: r.item_count,
                won: r.won,
            },
            RoundEvent::RoundEnded(r) => OutboundMessage::RoundEnded {
                outcome: r.outcome.as_str().to_string(),
                target: hexes(&r.target),
                score: r.score,
                correct_count: r.correct_count,
                check_count: r.check_count,
                item_count: r.item_count,
            },
            RoundEvent::CommandRejected { command, error } => rejection_message(*command, error),
        }
    }
}

impl From<&RoundSnapshot> for StateMessage {
    fn from(snap: &RoundSnapshot) -> Self {
        Self {
            round_id: snap.round_id,
            seed: snap.seed,
            phase: snap.phase.as_str().to_string(),
            item_count: snap.item_count,
            check_count: snap.check_count,
            player: hexes(&snap.player),
            target: snap.target.as_ref().map(|t| hexes(t)),
            last_correct: snap.last_correct,
            score: snap.score,
        }
    }
}
