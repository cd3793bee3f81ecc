use crate::*;

/// Classic formation expressed as cell offsets from a stamp origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [Coord2],
}

impl Pattern {
    /// Bounding box of the offsets, `(width, height)`.
    pub fn size(&self) -> Coord2 {
        let size_x = self.cells.iter().map(|&(x, _)| x).max().map_or(0, |x| x + 1);
        let size_y = self.cells.iter().map(|&(_, y)| y).max().map_or(0, |y| y + 1);
        (size_x, size_y)
    }

    /// Coordinates the formation would occupy when anchored at `origin`,
    /// or `OutOfRange` when any of them falls outside `board`.
    pub fn project(&self, board: &Board, origin: Coord2) -> Result<Vec<Coord2>> {
        let mut targets = Vec::with_capacity(self.cells.len());
        for &(dx, dy) in self.cells {
            let x = origin.0.checked_add(dx).ok_or(GameError::OutOfRange)?;
            let y = origin.1.checked_add(dy).ok_or(GameError::OutOfRange)?;
            targets.push(board.validate_coords((x, y))?);
        }
        Ok(targets)
    }

    /// Writes the formation onto `board` for `owner`, anchored at `origin`.
    /// Fails without touching the board when any cell would land outside it.
    pub fn stamp(&self, board: &mut Board, origin: Coord2, owner: Player) -> Result<()> {
        for coords in self.project(board, origin)? {
            board[coords] = Cell::Alive(owner);
        }
        Ok(())
    }
}

/// Still life, a 2x2 square.
pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

/// Period-2 oscillator, three cells in a row.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 1), (1, 1), (2, 1)],
};

/// Period-2 oscillator.
pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

/// Period-2 oscillator of two blocks touching at a corner.
pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
};

/// Diagonal spaceship with period 4.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

/// Every built-in formation.
pub const BUILTIN: &[Pattern] = &[BLOCK, BLINKER, TOAD, BEACON, GLIDER];
