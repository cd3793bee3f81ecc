use serde::{Deserialize, Serialize};

/// One of the two sides contesting the board.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

/// Canonical state of a single board cell. A live cell always carries its
/// owner, so an owned-but-dead or ownerless-but-alive cell cannot exist.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Dead,
    Alive(Player),
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive(_))
    }

    pub const fn owner(self) -> Option<Player> {
        match self {
            Self::Dead => None,
            Self::Alive(owner) => Some(owner),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Dead
    }
}
