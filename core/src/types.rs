use ndarray::Array2;

/// Single coordinate axis used for the grid side and cell positions.
pub type Coord = u8;

/// Count type used for mine targets and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional grid coordinates `(x, y)`, `x` being the column.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Maps a pixel offset to the grid cell under it, `floor(pixel / cell_size)` on both axes.
///
/// Negative or non-finite offsets, and cells past what a [`Coord`] can address, give `None`. The result is not checked
/// against any grid size.
pub fn pixel_to_cell(px: f64, py: f64, cell_size: u32) -> Option<Coord2> {
    fn axis(pixel: f64, cell_size: f64) -> Option<Coord> {
        if !pixel.is_finite() || pixel < 0.0 {
            return None;
        }
        // truncation is the floor for non-negative values
        let index = pixel / cell_size;
        if index >= Coord::MAX as f64 + 1.0 {
            None
        } else {
            Some(index as Coord)
        }
    }

    if cell_size == 0 {
        return None;
    }
    let cell_size = cell_size as f64;
    Some((axis(px, cell_size)?, axis(py, cell_size)?))
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (size_x, size_y) = self.dim();
        let size = (
            size_x.try_into().unwrap_or(Coord::MAX),
            size_y.try_into().unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, size)
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx.try_into().ok()?)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy.try_into().ok()?)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// Iterates the in-bounds Moore neighborhood of a cell, never the cell itself.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
