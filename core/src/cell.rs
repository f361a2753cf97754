use serde::{Deserialize, Serialize};

/// One grid position.
///
/// Whether it holds a mine and how many of its neighbors do are fixed when the board is generated; only the revealed
/// and flagged marks change during play.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    is_mine: bool,
    is_revealed: bool,
    is_flagged: bool,
    neighbor_mine_count: u8,
}

impl Cell {
    pub const fn new(is_mine: bool) -> Self {
        Self {
            is_mine,
            is_revealed: false,
            is_flagged: false,
            neighbor_mine_count: 0,
        }
    }

    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.is_flagged
    }

    pub const fn neighbor_mine_count(self) -> u8 {
        self.neighbor_mine_count
    }

    pub(crate) fn set_neighbor_mine_count(&mut self, count: u8) {
        self.neighbor_mine_count = count;
    }

    pub(crate) fn reveal(&mut self) {
        self.is_revealed = true;
    }

    /// Flips the flag on an unrevealed cell, returns whether anything changed.
    pub(crate) fn toggle_flag(&mut self) -> bool {
        if self.is_revealed {
            return false;
        }
        self.is_flagged = !self.is_flagged;
        true
    }
}
