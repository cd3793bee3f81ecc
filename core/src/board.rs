use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Live neighbors of a cell, split by owner. The plain Conway neighbor
/// count is the sum of both sides.
pub type NeighborCounts = PerPlayer<u8>;

impl NeighborCounts {
    /// Owner awarded a contested birth: whoever holds the strict majority
    /// of live neighbors. Ties go to [`Player::Two`].
    pub const fn dominant(self) -> Player {
        if self.one > self.two {
            Player::One
        } else {
            Player::Two
        }
    }
}

const DISPLACEMENTS: [(i16, i16); 8] = [
    (-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1),
];

fn offset_within(coords: Coord2, delta: (i16, i16), bounds: Coord2) -> Option<Coord2> {
    let x = coords.0.checked_add_signed(delta.0).filter(|&x| x < bounds.0)?;
    let y = coords.1.checked_add_signed(delta.1).filter(|&y| y < bounds.1)?;
    Some((x, y))
}

/// Rectangular grid of owned cells. Dimensions are fixed at construction
/// and the grid does not wrap at the edges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new(size: Coord2) -> Self {
        Self {
            cells: Array2::default((usize::from(size.0), usize::from(size.1))),
        }
    }

    pub fn size(&self) -> Coord2 {
        // construction takes Coord axes, so the dims always fit
        let (size_x, size_y) = self.cells.dim();
        (size_x as Coord, size_y as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (size_x, size_y) = self.size();
        mult(size_x, size_y)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange)
        }
    }

    pub fn get(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn set(&mut self, coords: Coord2, cell: Cell) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self[coords] = cell;
        Ok(())
    }

    /// Per-owner totals over the Moore neighborhood of `coords`.
    /// Out-of-bounds positions contribute nothing.
    pub fn count_neighbors(&self, coords: Coord2) -> Result<NeighborCounts> {
        let coords = self.validate_coords(coords)?;
        Ok(self.counts_at(coords))
    }

    pub(crate) fn counts_at(&self, coords: Coord2) -> NeighborCounts {
        let mut counts = NeighborCounts::default();
        for pos in self.neighbors(coords) {
            if let Cell::Alive(owner) = self[pos] {
                counts[owner] += 1;
            }
        }
        counts
    }

    /// In-bounds Moore neighbors of `coords`, in displacement-table order.
    fn neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> {
        let bounds = self.size();
        DISPLACEMENTS
            .iter()
            .filter_map(move |&delta| offset_within(coords, delta, bounds))
    }

    /// Kills every cell, keeping the dimensions.
    pub fn clear_all(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Visits every cell with its coordinates, in a fixed traversal order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((x, y), &cell)| ((x as Coord, y as Coord), cell))
    }

    /// Live cells per player over the whole board.
    pub fn population(&self) -> PerPlayer<CellCount> {
        let mut alive = PerPlayer::default();
        for &cell in self.cells.iter() {
            if let Cell::Alive(owner) = cell {
                alive[owner] += 1;
            }
        }
        alive
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.cells[(usize::from(x), usize::from(y))]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, (x, y): Coord2) -> &mut Self::Output {
        &mut self.cells[(usize::from(x), usize::from(y))]
    }
}
