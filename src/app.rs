//! Terminal front end: screens, UI toggles and the crossterm event loop.
//!
//! [`App`] holds everything except the terminal itself, so key and pointer
//! handling can be driven from tests.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::debug;

use crate::config::AppConfig;
use crate::core::{RoundSnapshot, ScoringRules};
use crate::engine::{Controller, Presenter, RoundEvent};
use crate::input::{
    handle_key_event, handle_mouse_event, should_quit, Debouncer, GestureTracker, PointerAction,
    UiAction,
};
use crate::term::{BoardLayout, FrameBuffer, GameView, Screen, TerminalRenderer, UiView, Viewport};
use crate::types::{GameCommand, GestureMode, MAX_ITEM_COUNT, MIN_CHOOSER_ITEMS};

const POLL_MS: u64 = 250;

/// Turns round notifications into a status line and screen changes.
#[derive(Debug, Default)]
pub struct TerminalPresenter {
    status: String,
    /// Item count of a round dealt since the last [`App`] update.
    started: Option<usize>,
    ended: bool,
}

impl TerminalPresenter {
    pub fn status(&self) -> &str {
        &self.status
    }
}

impl Presenter for TerminalPresenter {
    fn present(&mut self, event: &RoundEvent) {
        self.status.clear();
        match event {
            RoundEvent::RoundStarted {
                round_id,
                item_count,
                ..
            } => {
                self.status = format!("Round {}: {} items", round_id, item_count);
                self.started = Some(*item_count);
                self.ended = false;
            }
            RoundEvent::ArrangementChanged { swapped, .. } => {
                self.status = format!("Swapped {} and {}", swapped.0 + 1, swapped.1 + 1);
            }
            RoundEvent::CheckResult(r) if r.won => {
                self.status = String::from("All in place!");
            }
            RoundEvent::CheckResult(r) => {
                self.status = format!("{} of {} in place", r.correct_count, r.item_count);
            }
            RoundEvent::RoundEnded(r) => {
                self.status = format!("Round over: {} points", r.score);
                self.ended = true;
            }
            RoundEvent::CommandRejected { error, .. } => {
                self.status = error.to_string();
            }
        }
    }
}

pub struct App {
    controller: Controller<TerminalPresenter>,
    gesture: GestureTracker,
    debouncer: Debouncer,
    screen: Screen,
    outlines: bool,
    chosen_items: usize,
    snapshot: RoundSnapshot,
}

impl App {
    pub fn new(seed: u32, items: usize, rules: ScoringRules, gesture: GestureMode) -> Result<Self> {
        let controller = Controller::start(seed, items, rules, TerminalPresenter::default())
            .context("cannot deal the first round")?;
        let snapshot = controller.snapshot();
        let mut app = Self {
            controller,
            gesture: GestureTracker::new(gesture, items),
            debouncer: Debouncer::default(),
            screen: Screen::Home,
            outlines: true,
            chosen_items: items.clamp(MIN_CHOOSER_ITEMS, MAX_ITEM_COUNT),
            snapshot,
        };
        app.sync();
        // The first round waits behind the home screen, without a status line.
        app.screen = Screen::Home;
        app.controller.presenter_mut().status.clear();
        Ok(app)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn snapshot(&self) -> &RoundSnapshot {
        &self.snapshot
    }

    pub fn chosen_items(&self) -> usize {
        self.chosen_items
    }

    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    pub fn outlines(&self) -> bool {
        self.outlines
    }

    pub fn status(&self) -> &str {
        self.controller.presenter().status()
    }

    pub fn ui_view(&self) -> UiView<'_> {
        let status = self.status();
        UiView {
            screen: self.screen,
            cursor: self.gesture.cursor(),
            held: self.gesture.held(),
            hover: self.gesture.hover(),
            gesture: self.gesture.mode(),
            outlines: self.outlines,
            chosen_items: self.chosen_items,
            message: if status.is_empty() { None } else { Some(status) },
        }
    }

    pub fn handle_action(&mut self, action: UiAction, now_ms: u64) {
        let playing = self.screen == Screen::Board && self.snapshot.playable();
        match action {
            UiAction::IncreaseItems => {
                self.chosen_items = (self.chosen_items + 1).min(MAX_ITEM_COUNT);
            }
            UiAction::DecreaseItems => {
                self.chosen_items = self.chosen_items.saturating_sub(1).max(MIN_CHOOSER_ITEMS);
            }
            UiAction::ToggleOutlines => self.outlines = !self.outlines,
            UiAction::ToggleGestureMode => {
                let mode = self.gesture.mode().toggled();
                self.gesture.set_mode(mode);
            }

            UiAction::CursorLeft if playing => self.gesture.move_cursor(-1),
            UiAction::CursorRight if playing => self.gesture.move_cursor(1),
            UiAction::CursorTo(slot) if playing => self.gesture.set_cursor(slot),
            UiAction::Cancel if playing => self.gesture.cancel(),
            UiAction::Activate if playing => {
                if let Some(cmd) = self.gesture.activate() {
                    self.send(cmd, now_ms);
                }
            }
            UiAction::Check if playing => self.send(GameCommand::Check, now_ms),
            UiAction::GiveUp if playing => self.send(GameCommand::GiveUp, now_ms),

            UiAction::Activate | UiAction::PlayAgain if self.screen == Screen::Home => {
                self.send(GameCommand::StartRound(self.chosen_items), now_ms);
            }
            UiAction::PlayAgain if !self.snapshot.playable() => {
                self.send(GameCommand::StartRound(self.chosen_items), now_ms);
            }
            UiAction::Activate if self.screen == Screen::Result => {
                self.send(GameCommand::StartRound(self.chosen_items), now_ms);
            }
            UiAction::Spectate if self.screen == Screen::Result => self.screen = Screen::Board,
            // Reopen the result box while spectating.
            UiAction::Activate if self.screen == Screen::Board => self.screen = Screen::Result,

            _ => {}
        }
    }

    /// Mouse gestures only act on the player row of a round in progress.
    pub fn handle_pointer(&mut self, action: PointerAction, layout: &BoardLayout, now_ms: u64) {
        if self.screen != Screen::Board || !self.snapshot.playable() {
            return;
        }
        let command = match action {
            PointerAction::Down { column, row } => {
                self.gesture.pointer_down(layout.slot_at(column, row))
            }
            PointerAction::Drag { column, row } => {
                self.gesture.pointer_drag(layout.slot_at(column, row));
                None
            }
            PointerAction::Up { column, row } => self.gesture.pointer_up(layout.slot_at(column, row)),
        };
        if let Some(cmd) = command {
            self.send(cmd, now_ms);
        }
    }

    fn send(&mut self, command: GameCommand, now_ms: u64) {
        if !self.debouncer.accept(command, now_ms) {
            debug!(command = command.as_str(), "duplicate command dropped");
            return;
        }
        // Rejections land in the presenter's status line.
        let _ = self.controller.dispatch(command);
        self.sync();
    }

    fn sync(&mut self) {
        self.controller.snapshot_into(&mut self.snapshot);
        let presenter = self.controller.presenter_mut();
        if let Some(items) = presenter.started.take() {
            self.gesture.reset(items);
            self.debouncer.clear();
            self.screen = Screen::Board;
        }
        if std::mem::take(&mut presenter.ended) {
            self.gesture.cancel();
            self.screen = Screen::Result;
        }
    }
}

/// Run the terminal UI until the player quits.
pub fn run(config: &AppConfig, seed: u32) -> Result<()> {
    let mut app = App::new(seed, config.items, config.rules(), config.gesture)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = event_loop(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn event_loop(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let started = Instant::now();
    let poll = Duration::from_millis(POLL_MS);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(app.snapshot(), &app.ui_view(), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        if !event::poll(poll)? {
            continue;
        }
        let now_ms = started.elapsed().as_millis() as u64;
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    app.handle_action(action, now_ms);
                }
            }
            Event::Mouse(mouse) => {
                if let Some(action) = handle_mouse_event(mouse) {
                    let layout = view.layout(viewport, app.snapshot().item_count);
                    app.handle_pointer(action, &layout, now_ms);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Phase;

    fn app(items: usize) -> App {
        App::new(7, items, ScoringRules::canonical(), GestureMode::Drag).unwrap()
    }

    /// Swap the player row into target order with keyboard gestures.
    fn solve(app: &mut App, mut now: u64) -> u64 {
        let target = app.controller.state().target().to_vec();
        for slot in 0..target.len() {
            let player = app.snapshot().player.clone();
            if player[slot] == target[slot] {
                continue;
            }
            let from = player.iter().position(|c| *c == target[slot]).unwrap();
            app.handle_action(UiAction::CursorTo(slot), now);
            app.handle_action(UiAction::Activate, now);
            app.handle_action(UiAction::CursorTo(from), now);
            app.handle_action(UiAction::Activate, now);
            now += 1_000;
        }
        now
    }

    #[test]
    fn test_home_chooser_clamps_and_starts_round() {
        let mut app = app(3);
        assert_eq!(app.screen(), Screen::Home);
        app.handle_action(UiAction::DecreaseItems, 0);
        assert_eq!(app.chosen_items(), 3);
        for _ in 0..20 {
            app.handle_action(UiAction::IncreaseItems, 0);
        }
        assert_eq!(app.chosen_items(), 10);

        app.handle_action(UiAction::Activate, 0);
        assert_eq!(app.screen(), Screen::Board);
        assert_eq!(app.snapshot().item_count, 10);
        assert_eq!(app.snapshot().round_id, 2);
    }

    #[test]
    fn test_board_keys_are_ignored_on_home() {
        let mut app = app(4);
        let before = app.snapshot().clone();
        app.handle_action(UiAction::Check, 0);
        app.handle_action(UiAction::GiveUp, 0);
        assert_eq!(app.snapshot(), &before);
    }

    #[test]
    fn test_solving_opens_result_overlay() {
        let mut app = app(5);
        app.handle_action(UiAction::PlayAgain, 0);
        let now = solve(&mut app, 10);
        app.handle_action(UiAction::Check, now);

        assert_eq!(app.snapshot().phase, Phase::Won);
        assert_eq!(app.screen(), Screen::Result);
        assert!(app.snapshot().target.is_some());

        app.handle_action(UiAction::Spectate, now);
        assert_eq!(app.screen(), Screen::Board);
        // Board is frozen while spectating.
        app.handle_action(UiAction::Check, now + 1_000);
        assert_eq!(app.snapshot().check_count, 1);

        app.handle_action(UiAction::PlayAgain, now + 2_000);
        assert_eq!(app.snapshot().phase, Phase::Playing);
        assert_eq!(app.snapshot().check_count, 0);
    }

    #[test]
    fn test_give_up_reports_zero_points() {
        let mut app = app(3);
        app.handle_action(UiAction::Activate, 0);
        app.handle_action(UiAction::GiveUp, 10);
        assert_eq!(app.screen(), Screen::Result);
        assert_eq!(app.snapshot().score, Some(0));
        assert_eq!(app.status(), "Round over: 0 points");
    }

    #[test]
    fn test_duplicate_checks_are_debounced() {
        let mut app = app(4);
        app.handle_action(UiAction::Activate, 0);
        app.handle_action(UiAction::Check, 1_000);
        app.handle_action(UiAction::Check, 1_010);
        assert_eq!(app.snapshot().check_count, 1);
        app.handle_action(UiAction::Check, 2_000);
        assert_eq!(app.snapshot().check_count, 2);
    }

    #[test]
    fn test_mouse_drag_swaps_slots() {
        let mut app = app(3);
        app.handle_action(UiAction::Activate, 0);
        let layout = GameView::default().layout(Viewport::new(80, 30), 3);
        let before = app.snapshot().player.clone();

        let y = layout.player_y + 1;
        app.handle_pointer(PointerAction::Down { column: layout.slot_x(0) + 1, row: y }, &layout, 10);
        app.handle_pointer(PointerAction::Drag { column: layout.slot_x(2) + 1, row: y }, &layout, 20);
        assert_eq!(app.gesture().hover(), Some(2));
        app.handle_pointer(PointerAction::Up { column: layout.slot_x(2) + 1, row: y }, &layout, 30);

        let after = &app.snapshot().player;
        assert_eq!(after[0], before[2]);
        assert_eq!(after[2], before[0]);
        assert_eq!(app.status(), "Swapped 1 and 3");
    }

    #[test]
    fn test_toggles() {
        let mut app = app(3);
        assert!(app.outlines());
        app.handle_action(UiAction::ToggleOutlines, 0);
        assert!(!app.outlines());
        app.handle_action(UiAction::ToggleGestureMode, 0);
        assert_eq!(app.gesture().mode(), GestureMode::ClickSelect);
        assert_eq!(app.ui_view().gesture, GestureMode::ClickSelect);
    }
}
