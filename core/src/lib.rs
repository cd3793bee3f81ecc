use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use pacer::*;
pub use patterns::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod pacer;
mod patterns;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub size: Coord2,
}

impl MatchConfig {
    pub const fn new_unchecked(size: Coord2) -> Self {
        Self { size }
    }

    /// Clamps each axis to at least one cell.
    pub fn new((size_x, size_y): Coord2) -> Self {
        Self::new_unchecked((size_x.max(1), size_y.max(1)))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new_unchecked((35, 25))
    }
}

/// Outcome of a board-editing command.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ToggleOutcome {
    NoChange,
    Placed,
    Erased,
}

impl ToggleOutcome {
    pub const fn has_update(self) -> bool {
        use ToggleOutcome::*;
        match self {
            NoChange => false,
            Placed => true,
            Erased => true,
        }
    }
}

/// Outcome of a transport command such as `play`, `pause`, or `randomize`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ControlOutcome {
    NoChange,
    Changed,
}

impl ControlOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// What a step attempt did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// Nothing ran: the match has finished, or not enough time has accrued.
    Idle,
    /// One generation was computed and committed.
    Advanced(StepReport),
}

impl StepOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Advanced(_))
    }

    pub const fn report(self) -> Option<StepReport> {
        match self {
            Self::Idle => None,
            Self::Advanced(report) => Some(report),
        }
    }
}

/// Change notification emitted for every committed generation. Presentation
/// layers redraw from these instead of being called back by the engine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepReport {
    /// Generation number after the step.
    pub generation: u64,
    /// Cells born this step, credited per player.
    pub births: PerPlayer<u32>,
    /// Live cells per player after the step.
    pub alive: PerPlayer<CellCount>,
    /// Set when this step ended the match.
    pub ended: Option<EndReason>,
}
