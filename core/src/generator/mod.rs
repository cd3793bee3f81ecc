use crate::*;
pub use random::*;

mod random;

/// Fraction of cells a random fill brings to life unless the caller asks
/// for something else.
pub const DEFAULT_RANDOM_DENSITY: f64 = 0.20;

pub trait BoardGenerator {
    fn generate(self, size: Coord2) -> Board;
}
