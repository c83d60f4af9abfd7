//! Notifications the controller sends to a presentation layer.

use crate::core::{Arrangement, CheckResult, GameError, RoundResult};
use crate::types::GameCommand;

/// A state change the presentation layer should reflect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// A new round was dealt. The target stays hidden.
    RoundStarted {
        round_id: u32,
        item_count: usize,
        player: Arrangement,
    },
    /// The player row changed after a swap.
    ArrangementChanged {
        player: Arrangement,
        swapped: (usize, usize),
    },
    /// A check completed (won or not).
    CheckResult(CheckResult),
    /// The round reached a terminal phase; the target is revealed.
    RoundEnded(RoundResult),
    /// The controller refused a command; state is unchanged.
    CommandRejected {
        command: GameCommand,
        error: GameError,
    },
}

impl RoundEvent {
    /// camelCase event name.
    pub fn kind(&self) -> &'static str {
        match self {
            RoundEvent::RoundStarted { .. } => "roundStarted",
            RoundEvent::ArrangementChanged { .. } => "arrangementChanged",
            RoundEvent::CheckResult(_) => "checkResult",
            RoundEvent::RoundEnded(_) => "roundEnded",
            RoundEvent::CommandRejected { .. } => "commandRejected",
        }
    }
}

/// Receives round notifications. Presenters never mutate game state directly;
/// they send commands back through the controller.
pub trait Presenter {
    fn present(&mut self, event: &RoundEvent);
}

/// Discards every notification.
impl Presenter for () {
    fn present(&mut self, _event: &RoundEvent) {}
}

/// Records notifications in order.
impl Presenter for Vec<RoundEvent> {
    fn present(&mut self, event: &RoundEvent) {
        self.push(event.clone());
    }
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn present(&mut self, event: &RoundEvent) {
        (**self).present(event);
    }
}
