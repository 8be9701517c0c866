//! Grid cursor for picking a card with the keyboard.
//!
//! Cards are laid out row-major in rows of `columns`. The last row may be
//! short; the cursor never lands past the last card.

use crate::types::{GameAction, GRID_COLUMNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    columns: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(GRID_COLUMNS)
    }
}

impl Cursor {
    pub fn new(columns: usize) -> Self {
        Self {
            index: 0,
            columns: columns.max(1),
        }
    }

    /// Card index under the cursor.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Row and column under the cursor.
    pub fn position(&self) -> (usize, usize) {
        (self.index / self.columns, self.index % self.columns)
    }

    /// Pull the cursor back inside a deck of `len` cards.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    /// Apply a cursor action for a deck of `len` cards.
    ///
    /// Returns true if the cursor moved. Non-cursor actions are ignored.
    pub fn apply(&mut self, action: GameAction, len: usize) -> bool {
        if len == 0 {
            self.index = 0;
            return false;
        }
        self.clamp(len);

        let (_, col) = self.position();
        let target = match action {
            GameAction::CursorLeft if col > 0 => Some(self.index - 1),
            GameAction::CursorRight if col + 1 < self.columns => Some(self.index + 1),
            GameAction::CursorUp => self.index.checked_sub(self.columns),
            GameAction::CursorDown => Some(self.index + self.columns),
            _ => None,
        };

        match target {
            Some(next) if next < len => {
                self.index = next;
                true
            }
            _ => false,
        }
    }
}
