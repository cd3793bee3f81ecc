use super::*;

/// Independent per-cell fill: every cell comes alive with probability
/// `density`, owners are drawn uniformly in duel mode and always belong to
/// player one in single mode. Reproducible from the seed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoard {
    seed: u64,
    density: f64,
    mode: Mode,
}

impl RandomBoard {
    pub fn new(seed: u64, density: f64, mode: Mode) -> Self {
        let clamped = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };
        if clamped != density {
            log::warn!(
                "Fill density {} outside [0, 1], clamped to {}",
                density,
                clamped
            );
        }
        Self {
            seed,
            density: clamped,
            mode,
        }
    }
}

impl BoardGenerator for RandomBoard {
    fn generate(self, size: Coord2) -> Board {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut board = Board::new(size);
        let (size_x, size_y) = size;

        for x in 0..size_x {
            for y in 0..size_y {
                if !rng.random_bool(self.density) {
                    continue;
                }
                let owner = match self.mode {
                    Mode::Duel if rng.random_bool(0.5) => Player::One,
                    Mode::Duel => Player::Two,
                    Mode::Single => Player::One,
                };
                board[(x, y)] = Cell::Alive(owner);
            }
        }
        board
    }
}
