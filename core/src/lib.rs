#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use command::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use render::*;
pub use surface::*;
pub use types::*;

mod board;
mod cell;
mod command;
mod engine;
mod error;
mod generator;
mod render;
mod surface;
mod types;

/// Immutable per-engine settings, reused verbatim by every reset.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Edge length of one cell in pixels.
    pub cell_size: u32,
    /// Cells per side of the square grid.
    pub grid_size: Coord,
    /// Mine target, see [`MinePlacement`] for how it is honored.
    pub mine_count: CellCount,
    pub placement: MinePlacement,
}

impl GameConfig {
    pub const fn new_unchecked(
        cell_size: u32,
        grid_size: Coord,
        mine_count: CellCount,
        placement: MinePlacement,
    ) -> Self {
        Self {
            cell_size,
            grid_size,
            mine_count,
            placement,
        }
    }

    pub fn new(cell_size: u32, grid_size: Coord, mine_count: CellCount) -> Self {
        let cell_size = cell_size.max(1);
        let grid_size = grid_size.clamp(1, Coord::MAX);
        Self::new_unchecked(cell_size, grid_size, mine_count, MinePlacement::default())
    }

    pub const fn with_placement(self, placement: MinePlacement) -> Self {
        Self { placement, ..self }
    }

    pub const fn size(&self) -> Coord2 {
        (self.grid_size, self.grid_size)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.grid_size, self.grid_size)
    }

    /// Chance of any single cell holding a mine under [`MinePlacement::PerCellChance`], may exceed one.
    pub fn mine_probability(&self) -> f64 {
        match self.total_cells() {
            0 => 0.0,
            total => self.mine_count as f64 / total as f64,
        }
    }

    /// Pixel edge length of the whole board.
    pub const fn board_pixels(&self) -> u32 {
        self.cell_size.saturating_mul(self.grid_size as u32)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(40, 20, 20)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }

    /// The terminal outcome this reveal ended the round with, if any.
    pub const fn game_outcome(self) -> Option<GameOutcome> {
        match self {
            Self::HitMine => Some(GameOutcome::Lost),
            Self::Won => Some(GameOutcome::Won),
            Self::NoChange | Self::Revealed => None,
        }
    }
}
