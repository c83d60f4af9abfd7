//! Controller - the single owner of the round state
//!
//! Presentation layers turn gestures into [`GameCommand`]s and hand them to
//! [`Controller::dispatch`]. The controller applies each command to the
//! [`GameState`] synchronously and reports the outcome to its [`Presenter`].

use tracing::debug;

use crate::core::{GameError, GameState, RoundSnapshot, ScoringRules};
use crate::presenter::{Presenter, RoundEvent};
use crate::types::GameCommand;

pub struct Controller<P: Presenter> {
    state: GameState,
    presenter: P,
}

impl<P: Presenter> Controller<P> {
    /// Deal the first round and announce it to the presenter.
    pub fn start(
        seed: u32,
        item_count: usize,
        rules: ScoringRules,
        presenter: P,
    ) -> Result<Self, GameError> {
        let state = GameState::with_rules(seed, item_count, rules)?;
        Ok(Self::with_state(state, presenter))
    }

    /// Take over an existing round and announce it to the presenter.
    pub fn with_state(state: GameState, presenter: P) -> Self {
        let mut controller = Self { state, presenter };
        controller.announce_round();
        controller
    }

    /// Apply one command. Rejections are reported to the presenter and returned.
    pub fn dispatch(&mut self, command: GameCommand) -> Result<(), GameError> {
        let applied = self.apply(command);
        match applied {
            Ok(()) => debug!(command = command.as_str(), "command applied"),
            Err(error) => {
                debug!(command = command.as_str(), %error, "command rejected");
                self.presenter
                    .present(&RoundEvent::CommandRejected { command, error });
            }
        }
        applied
    }

    fn apply(&mut self, command: GameCommand) -> Result<(), GameError> {
        match command {
            GameCommand::StartRound(n) => {
                self.state.start_round(n)?;
                self.announce_round();
            }
            GameCommand::Swap(i, j) => {
                self.state.swap(i, j)?;
                self.presenter.present(&RoundEvent::ArrangementChanged {
                    player: self.state.player().iter().copied().collect(),
                    swapped: (i, j),
                });
            }
            GameCommand::Check => {
                let result = self.state.check()?;
                self.presenter.present(&RoundEvent::CheckResult(result));
                if result.won {
                    self.announce_end();
                }
            }
            GameCommand::GiveUp => {
                let result = self.state.give_up()?;
                self.presenter.present(&RoundEvent::RoundEnded(result));
            }
        }
        Ok(())
    }

    fn announce_round(&mut self) {
        self.presenter.present(&RoundEvent::RoundStarted {
            round_id: self.state.round_id(),
            item_count: self.state.item_count(),
            player: self.state.player().iter().copied().collect(),
        });
    }

    fn announce_end(&mut self) {
        if let Some(result) = self.state.round_result() {
            self.presenter.present(&RoundEvent::RoundEnded(result));
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        self.state.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        self.state.snapshot_into(out);
    }

    pub fn set_rules(&mut self, rules: ScoringRules) {
        self.state.set_rules(rules);
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
