//! Swap gestures: drag-and-drop and click-select.
//!
//! Both gesture modes end in the same [`GameCommand::Swap`]; the tracker only
//! remembers which slot is held (drag) or selected (click) in between.

use crate::types::{GameCommand, GestureMode};

/// Tracks cursor and pending selection for the player row.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    mode: GestureMode,
    item_count: usize,
    cursor: usize,
    /// Drag source (drag mode) or first selection (click mode).
    held: Option<usize>,
    /// Slot under the pointer during a drag.
    hover: Option<usize>,
}

impl GestureTracker {
    pub fn new(mode: GestureMode, item_count: usize) -> Self {
        Self {
            mode,
            item_count,
            cursor: 0,
            held: None,
            hover: None,
        }
    }

    /// Forget any pending gesture and size the tracker for a new round.
    pub fn reset(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.cursor = 0;
        self.held = None;
        self.hover = None;
    }

    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Switch gesture mode; a half-finished gesture is dropped.
    pub fn set_mode(&mut self, mode: GestureMode) {
        self.mode = mode;
        self.cancel();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn held(&self) -> Option<usize> {
        self.held
    }

    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    pub fn cancel(&mut self) {
        self.held = None;
        self.hover = None;
    }

    /// Move the cursor, wrapping at both ends.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.item_count == 0 {
            return;
        }
        let n = self.item_count as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(n) as usize;
    }

    pub fn set_cursor(&mut self, slot: usize) {
        if slot < self.item_count {
            self.cursor = slot;
        }
    }

    /// Keyboard activation at the cursor: first press picks/selects, second
    /// press on another slot swaps, second press on the same slot lets go.
    pub fn activate(&mut self) -> Option<GameCommand> {
        self.select(self.cursor)
    }

    /// Left button pressed over `slot` (or outside the row).
    pub fn pointer_down(&mut self, slot: Option<usize>) -> Option<GameCommand> {
        let Some(slot) = slot.filter(|s| *s < self.item_count) else {
            self.cancel();
            return None;
        };
        self.cursor = slot;
        match self.mode {
            GestureMode::Drag => {
                self.held = Some(slot);
                self.hover = Some(slot);
                None
            }
            GestureMode::ClickSelect => self.select(slot),
        }
    }

    /// Pointer moved with the button held.
    pub fn pointer_drag(&mut self, slot: Option<usize>) {
        if self.mode == GestureMode::Drag && self.held.is_some() {
            self.hover = slot.filter(|s| *s < self.item_count);
        }
    }

    /// Left button released over `slot` (or outside the row).
    pub fn pointer_up(&mut self, slot: Option<usize>) -> Option<GameCommand> {
        if self.mode != GestureMode::Drag {
            return None;
        }
        let source = self.held.take();
        self.hover = None;
        let source = source?;
        let target = slot.filter(|s| *s < self.item_count)?;
        if target == source {
            return None;
        }
        self.cursor = target;
        Some(GameCommand::Swap(source, target))
    }

    fn select(&mut self, slot: usize) -> Option<GameCommand> {
        if slot >= self.item_count {
            return None;
        }
        match self.held {
            None => {
                self.held = Some(slot);
                None
            }
            Some(first) if first == slot => {
                self.held = None;
                None
            }
            Some(first) => {
                self.held = None;
                Some(GameCommand::Swap(first, slot))
            }
        }
    }
}

/// Drops a command identical to the previous one when it arrives within a
/// short window (double clicks, bounced drops, key chatter).
#[derive(Debug, Clone)]
pub struct Debouncer {
    window_ms: u64,
    last: Option<(GameCommand, u64)>,
}

/// Default duplicate-suppression window.
pub const DEFAULT_DEBOUNCE_MS: u64 = 120;

impl Debouncer {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last: None,
        }
    }

    /// Whether `command` at `now_ms` should reach the controller.
    pub fn accept(&mut self, command: GameCommand, now_ms: u64) -> bool {
        if let Some((prev, at)) = self.last {
            if prev == command && now_ms.saturating_sub(at) < self.window_ms {
                return false;
            }
        }
        self.last = Some((command, now_ms));
        true
    }

    /// Forget the last command (e.g. when a new round starts).
    pub fn clear(&mut self) {
        self.last = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_swaps_on_drop() {
        let mut g = GestureTracker::new(GestureMode::Drag, 4);
        assert_eq!(g.pointer_down(Some(1)), None);
        assert_eq!(g.held(), Some(1));
        g.pointer_drag(Some(3));
        assert_eq!(g.hover(), Some(3));
        assert_eq!(g.pointer_up(Some(3)), Some(GameCommand::Swap(1, 3)));
        assert_eq!(g.held(), None);
        assert_eq!(g.cursor(), 3);
    }

    #[test]
    fn test_drag_dropped_in_place_or_outside_does_nothing() {
        let mut g = GestureTracker::new(GestureMode::Drag, 4);
        g.pointer_down(Some(2));
        assert_eq!(g.pointer_up(Some(2)), None);
        g.pointer_down(Some(2));
        assert_eq!(g.pointer_up(None), None);
        assert_eq!(g.pointer_up(Some(0)), None);
    }

    #[test]
    fn test_click_select_swaps_on_second_click() {
        let mut g = GestureTracker::new(GestureMode::ClickSelect, 5);
        assert_eq!(g.pointer_down(Some(0)), None);
        assert_eq!(g.held(), Some(0));
        assert_eq!(g.pointer_up(Some(0)), None);
        assert_eq!(g.pointer_down(Some(4)), Some(GameCommand::Swap(0, 4)));
        assert_eq!(g.held(), None);
    }

    #[test]
    fn test_click_same_slot_twice_deselects() {
        let mut g = GestureTracker::new(GestureMode::ClickSelect, 5);
        g.pointer_down(Some(2));
        assert_eq!(g.pointer_down(Some(2)), None);
        assert_eq!(g.held(), None);
    }

    #[test]
    fn test_keyboard_activation() {
        let mut g = GestureTracker::new(GestureMode::Drag, 3);
        assert_eq!(g.activate(), None);
        g.move_cursor(-1);
        assert_eq!(g.cursor(), 2);
        assert_eq!(g.activate(), Some(GameCommand::Swap(0, 2)));
    }

    #[test]
    fn test_mode_switch_cancels_pending_gesture() {
        let mut g = GestureTracker::new(GestureMode::ClickSelect, 3);
        g.pointer_down(Some(1));
        g.set_mode(GestureMode::Drag);
        assert_eq!(g.held(), None);
        assert_eq!(g.mode(), GestureMode::Drag);
    }

    #[test]
    fn test_out_of_range_slots_are_ignored() {
        let mut g = GestureTracker::new(GestureMode::ClickSelect, 3);
        assert_eq!(g.pointer_down(Some(7)), None);
        assert_eq!(g.held(), None);
        g.set_cursor(9);
        assert_eq!(g.cursor(), 0);
    }

    #[test]
    fn test_reset_clears_selection() {
        let mut g = GestureTracker::new(GestureMode::ClickSelect, 3);
        g.pointer_down(Some(2));
        g.reset(6);
        assert_eq!(g.held(), None);
        assert_eq!(g.cursor(), 0);
        g.set_cursor(5);
        assert_eq!(g.cursor(), 5);
    }

    #[test]
    fn test_debouncer_drops_quick_duplicates() {
        let mut d = Debouncer::new(100);
        assert!(d.accept(GameCommand::Check, 0));
        assert!(!d.accept(GameCommand::Check, 50));
        assert!(d.accept(GameCommand::Check, 150));
        assert!(d.accept(GameCommand::Swap(0, 1), 160));
        assert!(!d.accept(GameCommand::Swap(0, 1), 170));
        assert!(d.accept(GameCommand::Swap(1, 0), 175));
    }

    #[test]
    fn test_debouncer_clear() {
        let mut d = Debouncer::default();
        assert!(d.accept(GameCommand::GiveUp, 0));
        d.clear();
        assert!(d.accept(GameCommand::GiveUp, 1));
    }
}
