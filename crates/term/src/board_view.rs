//! BoardView: maps a [`DeckSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: title, card grid, pair counter, reset button, key
//! hints. Each card is a bordered tile; matched cards leave an empty slot so
//! the rest of the grid does not shift.

use crate::core::DeckSnapshot;
use crate::fb::{text_width, CellStyle, FrameBuffer, Rgb};
use crate::types::{CardState, GRID_COLUMNS};

pub const TITLE: &str = "Matching Game!";
pub const RESET_LABEL: &str = "[ Reset Game ]";
pub const WIN_BANNER: &str = "ALL PAIRS FOUND";
pub const KEY_HINTS: &str = "arrows move  enter flip  r reset  +/- pairs  q quit";

/// Rows above the grid: title and a spacer.
const HEADER_H: u16 = 2;
/// Rows below the grid: spacer, counter, button, hints.
const FOOTER_H: u16 = 4;

const BG: Rgb = Rgb::new(0, 0, 0);

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

/// A lightweight terminal renderer for the card grid.
pub struct BoardView {
    /// Tile width in terminal columns, borders included.
    tile_w: u16,
    /// Tile height in terminal rows, borders included.
    tile_h: u16,
    /// Blank columns between tiles.
    gap_x: u16,
    columns: usize,
    anchor_y: AnchorY,
}

impl Default for BoardView {
    fn default() -> Self {
        // 6x3 fits a two-column emoji with a space either side.
        Self {
            tile_w: 6,
            tile_h: 3,
            gap_x: 1,
            columns: GRID_COLUMNS,
            anchor_y: AnchorY::Center,
        }
    }
}

impl BoardView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn rows_for(&self, cards: usize) -> u16 {
        cards.div_ceil(self.columns) as u16
    }

    fn grid_size(&self, cards: usize) -> (u16, u16) {
        let cols = cards.min(self.columns) as u16;
        let w = cols * self.tile_w + cols.saturating_sub(1) * self.gap_x;
        (w, self.rows_for(cards) * self.tile_h)
    }

    /// Top-left corner of the grid for a deck of `cards` in `viewport`.
    pub fn grid_origin(&self, cards: usize, viewport: Viewport) -> (u16, u16) {
        let (grid_w, grid_h) = self.grid_size(cards);
        let total_h = HEADER_H + grid_h + FOOTER_H;
        let x = viewport.width.saturating_sub(grid_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        (x, y.saturating_add(HEADER_H))
    }

    /// Top-left corner of the tile for card `index`.
    pub fn tile_origin(&self, cards: usize, viewport: Viewport, index: usize) -> (u16, u16) {
        let (gx, gy) = self.grid_origin(cards, viewport);
        let row = (index / self.columns) as u16;
        let col = (index % self.columns) as u16;
        (
            gx.saturating_add(col * (self.tile_w + self.gap_x)),
            gy.saturating_add(row * self.tile_h),
        )
    }

    /// Render the deck into an existing framebuffer.
    ///
    /// `cursor` highlights one tile; pass `None` for a read-only view.
    pub fn render_into(
        &self,
        snap: &DeckSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (_, grid_y) = self.grid_origin(snap.len(), viewport);
        let (_, grid_h) = self.grid_size(snap.len());

        let title = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: BG,
            bold: true,
            dim: false,
        };
        self.put_centered(fb, viewport, grid_y.saturating_sub(HEADER_H), TITLE, title);

        for (index, card) in snap.iter().enumerate() {
            let (x, y) = self.tile_origin(snap.len(), viewport, index);
            let focused = cursor == Some(index);
            self.draw_tile(fb, x, y, card.state(), card.content, focused);
        }

        if snap.all_matched() {
            let banner = CellStyle {
                fg: Rgb::new(255, 220, 80),
                bg: BG,
                bold: true,
                dim: false,
            };
            let mid = grid_y.saturating_add(grid_h / 2);
            self.put_centered(fb, viewport, mid, WIN_BANNER, banner);
        }

        self.draw_footer(fb, snap, viewport, grid_y.saturating_add(grid_h));
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &DeckSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        state: CardState,
        content: &str,
        focused: bool,
    ) {
        let (border_fg, face_bg) = match state {
            CardState::Hidden => (Rgb::new(90, 130, 220), Rgb::new(40, 60, 120)),
            CardState::Revealed => (Rgb::new(230, 230, 230), Rgb::new(20, 20, 28)),
            CardState::MatchPending => (Rgb::new(100, 220, 120), Rgb::new(20, 40, 24)),
            CardState::Matched => (Rgb::new(70, 70, 70), BG),
        };
        let mut border = CellStyle {
            fg: border_fg,
            bg: BG,
            bold: false,
            dim: state == CardState::MatchPending,
        };
        if focused {
            border.fg = Rgb::new(255, 220, 80);
            border.bold = true;
        }

        if state == CardState::Matched {
            // Empty slot; only the cursor is drawn.
            if focused {
                self.draw_corners(fb, x, y, border);
            }
            return;
        }

        self.draw_border(fb, x, y, self.tile_w, self.tile_h, border);

        let inner_w = self.tile_w.saturating_sub(2);
        let inner_h = self.tile_h.saturating_sub(2);
        let face = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: face_bg,
            bold: false,
            dim: state == CardState::MatchPending,
        };

        if state == CardState::Hidden {
            let back = CellStyle {
                fg: Rgb::new(70, 100, 180),
                ..face
            };
            fb.fill_rect(x + 1, y + 1, inner_w, inner_h, '▒', back);
            return;
        }

        fb.fill_rect(x + 1, y + 1, inner_w, inner_h, ' ', face);
        let w = text_width(content);
        let cx = x + 1 + inner_w.saturating_sub(w) / 2;
        let cy = y + 1 + inner_h / 2;
        fb.put_str(cx, cy, content, face);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_corners(&self, fb: &mut FrameBuffer, x: u16, y: u16, style: CellStyle) {
        let (w, h) = (self.tile_w, self.tile_h);
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, snap: &DeckSnapshot, viewport: Viewport, y: u16) {
        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: BG,
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: BG,
            bold: false,
            dim: false,
        };
        let hint = CellStyle { dim: true, ..value };

        // "PAIRS 8  FOUND 3"
        let pairs = (snap.len() / 2) as u32;
        let found = (snap.count_in(CardState::Matched) / 2) as u32;
        let counter_w = 6 + digits(pairs) + 8 + digits(found);
        let row = y.saturating_add(1);
        let mut x = viewport.width.saturating_sub(counter_w) / 2;
        fb.put_str(x, row, "PAIRS", label);
        x = x.saturating_add(6);
        fb.put_u32(x, row, pairs, value);
        x = x.saturating_add(digits(pairs) + 2);
        fb.put_str(x, row, "FOUND", label);
        x = x.saturating_add(6);
        fb.put_u32(x, row, found, value);

        self.put_centered(fb, viewport, y.saturating_add(2), RESET_LABEL, label);
        self.put_centered(fb, viewport, y.saturating_add(3), KEY_HINTS, hint);
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let x = viewport.width.saturating_sub(text_width(text)) / 2;
        fb.put_str(x, y, text, style);
    }
}

fn digits(n: u32) -> u16 {
    let mut n = n;
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardId, CardSnapshot};

    fn snap(contents: &[&'static str]) -> DeckSnapshot {
        DeckSnapshot {
            cards: contents
                .iter()
                .enumerate()
                .map(|(i, &content)| CardSnapshot {
                    id: CardId(i as u32),
                    content,
                    face_up: false,
                    matched: false,
                    match_animating: false,
                })
                .collect(),
        }
    }

    #[test]
    fn grid_wraps_after_four_columns() {
        let view = BoardView::default().with_anchor_y(AnchorY::Top);
        let vp = Viewport::new(40, 20);
        // 4 tiles of 6 plus 3 gaps.
        assert_eq!(view.grid_origin(6, vp), (6, 2));
        assert_eq!(view.tile_origin(6, vp, 1), (13, 2));
        assert_eq!(view.tile_origin(6, vp, 4), (6, 5));
    }

    #[test]
    fn small_deck_is_centered_on_its_own_width() {
        let view = BoardView::default().with_anchor_y(AnchorY::Top);
        // Two cards: one row of two tiles, 13 columns wide.
        assert_eq!(view.grid_origin(2, Viewport::new(33, 20)), (10, 2));
    }

    #[test]
    fn digit_count() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(18), 2);
    }

    #[test]
    fn revealed_card_shows_content_and_hidden_card_does_not() {
        let mut s = snap(&["🐶", "🐱", "🐶", "🐱"]);
        s.cards[0].face_up = true;
        let view = BoardView::default().with_anchor_y(AnchorY::Top);
        let vp = Viewport::new(40, 12);
        let fb = view.render(&s, None, vp);

        let (x, y) = view.tile_origin(4, vp, 0);
        assert_eq!(fb.get(x + 2, y + 1).unwrap().ch, '🐶');
        let (x, y) = view.tile_origin(4, vp, 1);
        assert_eq!(fb.get(x + 2, y + 1).unwrap().ch, '▒');
    }
}
