//! GameView: maps a round snapshot plus UI state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::RoundSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, GestureMode, Outcome, Phase};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Which screen the front end is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Item-count chooser before the first round.
    Home,
    /// Board of the current round.
    Board,
    /// Board with the end-of-round result box on top.
    Result,
}

/// Presentation state that is not part of the round itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiView<'a> {
    pub screen: Screen,
    pub cursor: usize,
    /// Held (drag) or selected (click) slot.
    pub held: Option<usize>,
    /// Slot under the pointer while dragging.
    pub hover: Option<usize>,
    pub gesture: GestureMode,
    /// Slot outlines on the player row.
    pub outlines: bool,
    /// Item count chosen for the next round.
    pub chosen_items: usize,
    pub message: Option<&'a str>,
}

impl Default for UiView<'_> {
    fn default() -> Self {
        Self {
            screen: Screen::Board,
            cursor: 0,
            held: None,
            hover: None,
            gesture: GestureMode::Drag,
            outlines: true,
            chosen_items: cup_match_types::DEFAULT_ITEM_COUNT,
            message: None,
        }
    }
}

/// Where the rows land for a given viewport; shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub item_count: usize,
    pub start_y: u16,
    pub row_x: u16,
    pub target_y: u16,
    pub player_y: u16,
    pub marker_y: u16,
    pub status_y: u16,
    pub slot_w: u16,
    pub slot_h: u16,
    pub gap: u16,
}

impl BoardLayout {
    pub fn slot_x(&self, slot: usize) -> u16 {
        self.row_x + (slot as u16) * (self.slot_w + self.gap)
    }

    pub fn row_width(&self) -> u16 {
        let n = self.item_count as u16;
        n * self.slot_w + n.saturating_sub(1) * self.gap
    }

    /// Player slot under a terminal cell, if any.
    pub fn slot_at(&self, column: u16, row: u16) -> Option<usize> {
        if row < self.player_y || row >= self.player_y + self.slot_h || column < self.row_x {
            return None;
        }
        let rel = column - self.row_x;
        let pitch = self.slot_w + self.gap;
        let slot = (rel / pitch) as usize;
        if rel % pitch >= self.slot_w || slot >= self.item_count {
            return None;
        }
        Some(slot)
    }
}

/// Rows the board occupies below `start_y`.
const BOARD_ROWS: u16 = 19;
const MIN_CONTENT_W: u16 = 44;

const BG: Rgb = Rgb::new(0, 0, 0);
const TEXT: CellStyle = CellStyle::plain(Rgb::new(220, 220, 220), BG);
const LABEL: CellStyle = CellStyle::plain(Rgb::new(220, 220, 220), BG).bold();
const FAINT: CellStyle = CellStyle::plain(Rgb::new(120, 120, 130), BG);
const ACCENT: CellStyle = CellStyle::plain(Rgb::new(90, 150, 255), BG);
const HELD: CellStyle = CellStyle::plain(Rgb::new(255, 220, 80), BG).bold();
const GOOD: CellStyle = CellStyle::plain(Rgb::new(100, 220, 120), BG).bold();
const BAD: CellStyle = CellStyle::plain(Rgb::new(220, 80, 80), BG).bold();

/// A lightweight terminal renderer for the matching game.
pub struct GameView {
    /// Slot width in terminal columns, border included.
    slot_w: u16,
    /// Slot height in terminal rows, border included.
    slot_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            slot_w: 8,
            slot_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(slot_w: u16, slot_h: u16) -> Self {
        Self {
            slot_w: slot_w.max(3),
            slot_h: slot_h.max(3),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, viewport: Viewport, item_count: usize) -> BoardLayout {
        let gap = 1;
        let n = item_count as u16;
        let row_w = n * self.slot_w + n.saturating_sub(1) * gap;
        let rows = BOARD_ROWS + 2 * (self.slot_h - 3);

        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(rows) / 2,
            AnchorY::Top => 0,
        };
        let target_y = start_y + 3;
        let player_y = target_y + self.slot_h + 2;
        let marker_y = player_y + self.slot_h;

        BoardLayout {
            item_count,
            start_y,
            row_x: viewport.width.saturating_sub(row_w) / 2,
            target_y,
            player_y,
            marker_y,
            status_y: marker_y + 2,
            slot_w: self.slot_w,
            slot_h: self.slot_h,
            gap,
        }
    }

    /// Render into an existing framebuffer. Allocation-free once `fb` has the
    /// viewport's size.
    pub fn render_into(
        &self,
        snap: &RoundSnapshot,
        ui: &UiView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        if ui.screen == Screen::Home {
            self.draw_home(fb, ui, viewport);
            return;
        }

        let layout = self.layout(viewport, snap.item_count);
        self.draw_board(fb, snap, ui, &layout, viewport);
        if ui.screen == Screen::Result {
            self.draw_result(fb, snap, ui, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &RoundSnapshot, ui: &UiView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, ui, viewport, &mut fb);
        fb
    }

    fn draw_home(&self, fb: &mut FrameBuffer, ui: &UiView<'_>, viewport: Viewport) {
        let y = viewport.height.saturating_sub(9) / 2;
        center_str(fb, viewport.width, y, "CUP MATCH", LABEL);
        center_str(
            fb,
            viewport.width,
            y + 2,
            "Put the shuffled cups back in the hidden order.",
            TEXT,
        );
        center_str(
            fb,
            viewport.width,
            y + 3,
            "Swap cups, then check how many are in place.",
            FAINT,
        );
        self.draw_item_chooser(fb, viewport.width, y + 5, ui.chosen_items);
        center_str(
            fb,
            viewport.width,
            y + 7,
            "[+/-] items   [enter] play   [q] quit",
            FAINT,
        );
        if let Some(msg) = ui.message {
            center_str(fb, viewport.width, y + 8, msg, BAD);
        }
    }

    fn draw_item_chooser(&self, fb: &mut FrameBuffer, width: u16, y: u16, items: usize) {
        // "ITEMS  < NN >" is at most 13 columns wide.
        let x = width.saturating_sub(13) / 2;
        let mut cx = fb.put_str(x, y, "ITEMS  < ", LABEL);
        cx = fb.put_u32(cx, y, items as u32, HELD);
        fb.put_str(cx, y, " >", LABEL);
    }

    fn draw_board(
        &self,
        fb: &mut FrameBuffer,
        snap: &RoundSnapshot,
        ui: &UiView<'_>,
        layout: &BoardLayout,
        viewport: Viewport,
    ) {
        center_str(fb, viewport.width, layout.start_y, "CUP MATCH", LABEL);

        // Hidden target row.
        fb.put_str(layout.row_x, layout.target_y - 1, "HIDDEN", FAINT);
        for slot in 0..snap.item_count {
            let x = layout.slot_x(slot);
            fb.draw_box(x, layout.target_y, layout.slot_w, layout.slot_h, FAINT);
            match snap.target.as_ref().and_then(|t| t.get(slot)) {
                Some(color) => self.fill_slot(fb, layout, x, layout.target_y, '█', color_style(*color)),
                None => self.fill_slot(fb, layout, x, layout.target_y, '░', FAINT.dim()),
            }
        }

        // Player row.
        fb.put_str(layout.row_x, layout.player_y - 1, "YOURS", LABEL);
        let playing = snap.phase == Phase::Playing;
        for (slot, color) in snap.player.iter().enumerate() {
            let x = layout.slot_x(slot);
            let held = playing && ui.held == Some(slot);
            let hover = playing && ui.hover == Some(slot) && ui.held != Some(slot);

            let border = if held {
                Some(HELD)
            } else if hover {
                Some(ACCENT.bold())
            } else if playing && ui.cursor == slot {
                Some(TEXT.bold())
            } else if ui.outlines {
                Some(ACCENT)
            } else {
                None
            };
            if let Some(style) = border {
                fb.draw_box(x, layout.player_y, layout.slot_w, layout.slot_h, style);
            }

            let mut style = color_style(*color);
            if held && ui.gesture == GestureMode::Drag {
                style = style.dim();
            }
            self.fill_slot(fb, layout, x, layout.player_y, '█', style);
        }

        // Cursor marker while playing; per-slot verdict once the target is revealed.
        let mid = layout.slot_w / 2;
        match &snap.target {
            Some(target) => {
                for (slot, (mine, theirs)) in snap.player.iter().zip(target.iter()).enumerate() {
                    let (ch, style) = if mine == theirs { ('✓', GOOD) } else { ('✗', BAD) };
                    fb.put_char(layout.slot_x(slot) + mid, layout.marker_y, ch, style);
                }
            }
            None if snap.item_count > 0 => {
                let marker = if ui.held.is_some() { HELD } else { TEXT.bold() };
                fb.put_char(layout.slot_x(ui.cursor) + mid, layout.marker_y, '▲', marker);
            }
            None => {}
        }

        self.draw_status(fb, snap, ui, layout);
    }

    fn fill_slot(&self, fb: &mut FrameBuffer, layout: &BoardLayout, x: u16, y: u16, ch: char, style: CellStyle) {
        fb.fill_rect(x + 1, y + 1, layout.slot_w - 2, layout.slot_h - 2, ch, style);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &RoundSnapshot, ui: &UiView<'_>, layout: &BoardLayout) {
        // Left-align with the rows, but leave room for the status text on narrow rows.
        let center = layout.row_x + layout.row_width() / 2;
        let x = layout.row_x.min(center.saturating_sub(MIN_CONTENT_W / 2));
        let mut y = layout.status_y;

        let mut cx = fb.put_str(x, y, "CHECKS ", LABEL);
        cx = fb.put_u32(cx, y, snap.check_count, TEXT);
        cx = fb.put_str(cx + 3, y, "CORRECT ", LABEL);
        match snap.last_correct {
            Some(correct) => {
                cx = fb.put_u32(cx, y, correct as u32, TEXT);
            }
            None => {
                cx = fb.put_str(cx, y, "-", FAINT);
            }
        }
        cx = fb.put_str(cx, y, "/", FAINT);
        fb.put_u32(cx, y, snap.item_count as u32, TEXT);

        y += 1;
        let mut cx = fb.put_str(x, y, "MODE ", LABEL);
        cx = fb.put_str(cx, y, ui.gesture.as_str(), TEXT);
        cx = fb.put_str(cx + 3, y, "BOXES ", LABEL);
        fb.put_str(cx, y, if ui.outlines { "on" } else { "off" }, TEXT);

        y += 1;
        if let Some(outcome) = snap.phase.outcome() {
            let (text, style) = match outcome {
                Outcome::Won => ("SOLVED  points ", GOOD),
                Outcome::GaveUp => ("GAVE UP  points ", BAD),
            };
            let cx = fb.put_str(x, y, text, style);
            fb.put_u32(cx, y, snap.score.unwrap_or(0), TEXT);
        }

        y += 1;
        if let Some(msg) = ui.message {
            fb.put_str(x, y, msg, ACCENT);
        }

        y += 2;
        let help = if snap.phase == Phase::Playing {
            "[←/→] move  [space] pick/drop  [c] check  [g] give up  [m] mode  [b] boxes  [q] quit"
        } else {
            "[n] play again  [+/-] items  [b] boxes  [q] quit"
        };
        fb.put_str(x, y, help, FAINT);
    }

    fn draw_result(&self, fb: &mut FrameBuffer, snap: &RoundSnapshot, ui: &UiView<'_>, viewport: Viewport) {
        let w: u16 = 34;
        let h: u16 = 10;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;

        let panel = CellStyle::plain(Rgb::new(230, 230, 230), Rgb::new(25, 25, 35));
        fb.fill_rect(x, y, w, h, ' ', panel);
        fb.draw_box(x, y, w, h, panel.bold());

        let won = snap.phase.outcome().is_some_and(|o| o.is_win());
        let title = if won { "YOU MATCHED THEM ALL!" } else { "YOU GAVE UP" };
        let title_style = CellStyle {
            bg: panel.bg,
            ..(if won { GOOD } else { BAD })
        };
        let tx = x + w.saturating_sub(title.chars().count() as u16) / 2;
        fb.put_str(tx, y + 1, title, title_style);

        let label = CellStyle { bold: true, ..panel };
        let rows: [(&str, u32); 3] = [
            ("Items   ", snap.item_count as u32),
            ("Checks  ", snap.check_count),
            ("Points  ", snap.score.unwrap_or(0)),
        ];
        for (i, (name, value)) in rows.iter().enumerate() {
            let ry = y + 3 + i as u16;
            let cx = fb.put_str(x + 4, ry, name, label);
            fb.put_u32(cx, ry, *value, panel);
        }

        let cy = y + 7;
        let mut cx = fb.put_str(x + 4, cy, "Next round  < ", label);
        cx = fb.put_u32(cx, cy, ui.chosen_items as u32, CellStyle { bg: panel.bg, ..HELD });
        fb.put_str(cx, cy, " > items", label);

        fb.put_str(x + 4, y + 8, "[n] play again  [s] spectate", CellStyle { dim: true, ..panel });
    }
}

fn color_style(color: Color) -> CellStyle {
    CellStyle::plain(Rgb::from(color), BG)
}

fn center_str(fb: &mut FrameBuffer, width: u16, y: u16, s: &str, style: CellStyle) {
    let w = s.chars().count() as u16;
    fb.put_str(width.saturating_sub(w) / 2, y, s, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    fn rgb_state() -> GameState {
        GameState::from_arrangements(
            &[Color::RED, Color::GREEN, Color::BLUE],
            &[Color::GREEN, Color::RED, Color::BLUE],
        )
        .unwrap()
    }

    #[test]
    fn layout_hit_testing_matches_slots() {
        let view = GameView::default();
        let layout = view.layout(Viewport::new(80, 30), 3);
        // 3 slots of 8 plus 2 gaps = 26 wide, centered in 80.
        assert_eq!(layout.row_width(), 26);
        assert_eq!(layout.row_x, 27);

        assert_eq!(layout.slot_at(27, layout.player_y), Some(0));
        assert_eq!(layout.slot_at(34, layout.player_y + 2), Some(0));
        assert_eq!(layout.slot_at(35, layout.player_y), None); // gap
        assert_eq!(layout.slot_at(36, layout.player_y + 1), Some(1));
        assert_eq!(layout.slot_at(45, layout.player_y), Some(2));
        assert_eq!(layout.slot_at(53, layout.player_y), None);
        assert_eq!(layout.slot_at(30, layout.target_y), None);
        assert_eq!(layout.slot_at(26, layout.player_y), None);
    }

    #[test]
    fn player_slots_are_filled_with_item_colors() {
        let state = rgb_state();
        let view = GameView::default();
        let vp = Viewport::new(80, 30);
        let fb = view.render(&state.snapshot(), &UiView::default(), vp);
        let layout = view.layout(vp, 3);

        let cell = fb.get(layout.slot_x(0) + 1, layout.player_y + 1).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::from(Color::GREEN));
    }

    #[test]
    fn target_stays_face_down_while_playing() {
        let state = rgb_state();
        let view = GameView::default();
        let vp = Viewport::new(80, 30);
        let fb = view.render(&state.snapshot(), &UiView::default(), vp);
        let layout = view.layout(vp, 3);

        for slot in 0..3 {
            let cell = fb.get(layout.slot_x(slot) + 2, layout.target_y + 1).unwrap();
            assert_eq!(cell.ch, '░');
        }
    }

    #[test]
    fn revealed_target_shows_colors_and_verdicts() {
        let mut state = rgb_state();
        state.give_up().unwrap();
        let view = GameView::default();
        let vp = Viewport::new(80, 30);
        let fb = view.render(&state.snapshot(), &UiView::default(), vp);
        let layout = view.layout(vp, 3);

        let cell = fb.get(layout.slot_x(0) + 1, layout.target_y + 1).unwrap();
        assert_eq!(cell.style.fg, Rgb::from(Color::RED));

        let marks: Vec<char> = (0..3)
            .map(|s| fb.get(layout.slot_x(s) + 4, layout.marker_y).unwrap().ch)
            .collect();
        assert_eq!(marks, vec!['✗', '✗', '✓']);
    }

    #[test]
    fn outlines_toggle_hides_idle_borders() {
        let state = rgb_state();
        let view = GameView::default();
        let vp = Viewport::new(80, 30);
        let layout = view.layout(vp, 3);
        let ui = UiView {
            outlines: false,
            ..UiView::default()
        };
        let fb = view.render(&state.snapshot(), &ui, vp);

        // Cursor slot keeps its border; the others lose it.
        assert_eq!(fb.get(layout.slot_x(0), layout.player_y).unwrap().ch, '┌');
        assert_eq!(fb.get(layout.slot_x(1), layout.player_y).unwrap().ch, ' ');
    }

    #[test]
    fn result_overlay_lists_points() {
        let mut state = rgb_state();
        state.swap(0, 1).unwrap();
        state.check().unwrap();
        let ui = UiView {
            screen: Screen::Result,
            ..UiView::default()
        };
        let fb = view_text(&GameView::default().render(&state.snapshot(), &ui, Viewport::new(80, 30)));
        assert!(fb.contains("YOU MATCHED THEM ALL!"));
        assert!(fb.contains("Points  110"));
        assert!(fb.contains("Checks  1"));
    }

    #[test]
    fn home_screen_shows_item_chooser() {
        let state = rgb_state();
        let ui = UiView {
            screen: Screen::Home,
            chosen_items: 7,
            ..UiView::default()
        };
        let text = view_text(&GameView::default().render(&state.snapshot(), &ui, Viewport::new(80, 24)));
        assert!(text.contains("ITEMS  < 7 >"));
        assert!(!text.contains("HIDDEN"));
    }

    fn view_text(fb: &FrameBuffer) -> String {
        let mut all = String::new();
        for y in 0..fb.height() {
            all.push_str(&fb.row_text(y));
            all.push('\n');
        }
        all
    }
}
