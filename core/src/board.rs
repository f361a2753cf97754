use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of cells. Mines and neighbor counts are settled at construction, play only touches the marks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Builds a board from a mine mask and computes every neighbor count.
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Self {
        let mut board = Self {
            cells: mine_mask.map(|&is_mine| Cell::new(is_mine)),
        };
        board.compute_neighbor_counts();
        board
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(&mine_mask))
    }

    /// Stores, for every cell, how many of its in-bounds neighbors hold a mine.
    ///
    /// Reads the whole mine layout, so it must run after all mines are placed.
    pub fn compute_neighbor_counts(&mut self) {
        let (x_end, y_end) = self.size();
        for x in 0..x_end {
            for y in 0..y_end {
                let count = self.adjacent_mine_count((x, y));
                self[(x, y)].set_neighbor_mine_count(count);
            }
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let (size_x, size_y) = self.cells.dim();
        (
            size_x.try_into().unwrap_or(Coord::MAX),
            size_y.try_into().unwrap_or(Coord::MAX),
        )
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn mine_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_mine()).count()
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_revealed()).count()
    }

    pub fn flagged_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_flagged()).count()
    }

    /// True once every safe cell is revealed, whatever happened to the mines.
    pub fn check_win(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.is_mine() || cell.is_revealed())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((x, y), cell)| ((x as Coord, y as Coord), cell))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most eight neighbors, always fits
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine())
            .count() as u8
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.cells[(x as usize, y as usize)]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, (x, y): Coord2) -> &mut Self::Output {
        &mut self.cells[(x as usize, y as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::from_mine_coords(size, mines).unwrap()
    }

    #[test]
    fn neighbor_counts_follow_moore_neighborhood() {
        // . * .
        // . . .
        // * . *
        let board = board((3, 3), &[(1, 0), (0, 2), (2, 2)]);

        assert_eq!(board[(0, 0)].neighbor_mine_count(), 1);
        assert_eq!(board[(1, 1)].neighbor_mine_count(), 3);
        assert_eq!(board[(0, 1)].neighbor_mine_count(), 2);
        assert_eq!(board[(1, 2)].neighbor_mine_count(), 2);
        assert_eq!(board[(2, 0)].neighbor_mine_count(), 1);
    }

    #[test]
    fn mine_cells_do_not_count_themselves() {
        let board = board((2, 2), &[(0, 0)]);
        assert_eq!(board[(0, 0)].neighbor_mine_count(), 0);
        assert_eq!(board[(1, 1)].neighbor_mine_count(), 1);
    }

    #[test]
    fn full_board_counts_clip_at_edges() {
        let mines = [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (0, 2), (1, 2), (2, 2)];
        let board = board((3, 3), &mines);
        assert_eq!(board[(0, 0)].neighbor_mine_count(), 3);
        assert_eq!(board[(1, 0)].neighbor_mine_count(), 5);
        assert_eq!(board[(1, 1)].neighbor_mine_count(), 8);
        assert_eq!(board.mine_count(), 9);
    }

    #[test]
    fn out_of_range_mine_coords_are_rejected() {
        assert_eq!(
            Board::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn check_win_ignores_mines() {
        let mut board = board((2, 1), &[(0, 0)]);
        assert!(!board.check_win());

        board[(1, 0)].reveal();
        assert!(board.check_win());

        board[(0, 0)].reveal();
        assert!(board.check_win());
    }

    #[test]
    fn check_win_needs_every_safe_cell() {
        let mut board = board((3, 1), &[]);
        board[(0, 0)].reveal();
        board[(2, 0)].reveal();
        assert!(!board.check_win());
    }

    #[test]
    fn validate_coords_checks_both_axes() {
        let board = board((3, 3), &[]);
        assert_eq!(board.validate_coords((2, 2)), Ok((2, 2)));
        assert_eq!(board.validate_coords((3, 0)), Err(GameError::InvalidCoords));
        assert_eq!(board.validate_coords((0, 3)), Err(GameError::InvalidCoords));
        assert!(board.get((0, 3)).is_none());
    }
}
