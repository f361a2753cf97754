use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// How the mine target of a [`GameConfig`] turns into a layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinePlacement {
    /// Every cell independently holds a mine with chance `mine_count / cells`, so the target is only met on average.
    #[default]
    PerCellChance,
    /// Exactly `mine_count` mines, sampled without replacement, capped at the number of cells.
    ExactCount,
}

impl MinePlacement {
    pub fn generate<R: Rng>(self, config: &GameConfig, rng: &mut R) -> Array2<bool> {
        match self {
            Self::PerCellChance => per_cell_chance(config, rng),
            Self::ExactCount => exact_count(config, rng),
        }
    }
}

/// Generates a fresh board for `config`, neighbor counts included.
pub fn generate_board<R: Rng>(config: &GameConfig, rng: &mut R) -> Board {
    let mine_mask = config.placement.generate(config, rng);
    Board::from_mine_mask(&mine_mask)
}

fn per_cell_chance<R: Rng>(config: &GameConfig, rng: &mut R) -> Array2<bool> {
    let probability = config.mine_probability();
    let mut mines: Array2<bool> = Array2::default(config.size().to_nd_index());
    for cell in mines.iter_mut() {
        *cell = rng.random::<f64>() < probability;
    }
    mines
}

fn exact_count<R: Rng>(config: &GameConfig, rng: &mut R) -> Array2<bool> {
    let total_cells = config.total_cells();

    // optimize for full boards
    if config.mine_count >= total_cells {
        if config.mine_count > total_cells {
            log::warn!(
                "Board already full, generated anyway, requested {} but only fits {}",
                config.mine_count,
                total_cells
            );
        }
        return Array2::from_elem(config.size().to_nd_index(), true);
    }

    let mut mines: Array2<bool> = Array2::default(config.size().to_nd_index());
    let mut free_cells = total_cells;
    let mut mines_placed = 0;

    // `Array2::default` is always in standard layout
    if let Some(cells) = mines.as_slice_mut() {
        while mines_placed < config.mine_count && free_cells > 0 {
            // pick the n-th still free cell
            let mut place = rng.random_range(0..free_cells);
            for cell in cells.iter_mut().filter(|cell| !**cell) {
                if place == 0 {
                    *cell = true;
                    mines_placed += 1;
                    free_cells -= 1;
                    break;
                }
                place -= 1;
            }
        }
    }

    mines
}
