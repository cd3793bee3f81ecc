use core::ops::{Add, Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::Player;

/// Scalar for board axes and cell positions.
pub type Coord = u16;

/// Scalar for whole-board cell tallies.
pub type CellCount = u32;

/// A board position as `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    a as CellCount * b as CellCount
}

/// A value tracked separately for each player, indexable by [`Player`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PerPlayer<T> {
    pub one: T,
    pub two: T,
}

impl<T> PerPlayer<T> {
    pub const fn new(one: T, two: T) -> Self {
        Self { one, two }
    }
}

impl<T: Copy + Add<Output = T>> PerPlayer<T> {
    pub fn total(self) -> T {
        self.one + self.two
    }
}

impl<T> Index<Player> for PerPlayer<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }
}

impl<T> IndexMut<Player> for PerPlayer<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        match player {
            Player::One => &mut self.one,
            Player::Two => &mut self.two,
        }
    }
}
