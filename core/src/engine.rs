use core::time::Duration;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// Live neighbors needed for a dead cell to be born.
pub const BIRTH_NEIGHBORS: u8 = 3;
/// Fewest live neighbors a live cell survives with.
pub const SURVIVAL_MIN: u8 = 2;
/// Most live neighbors a live cell survives with.
pub const SURVIVAL_MAX: u8 = 3;

/// Who is placing cells and competing for births.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    /// Only player one places cells and is credited with births.
    Single,
    /// Both players compete for territory and a match has a winner.
    Duel,
}

/// Why a finished match ended.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EndReason {
    /// The whole board died out.
    NoneAlive,
    /// The named player has no live cells left.
    Eliminated(Player),
}

impl EndReason {
    /// The surviving player, if the match had one.
    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::NoneAlive => None,
            Self::Eliminated(loser) => Some(loser.opponent()),
        }
    }
}

/// Valid transitions:
/// - Editing -> Running (play)
/// - Running -> Paused (pause)
/// - Paused -> Running (play)
/// - Editing | Running | Paused -> Finished (a duel step leaves a side dead)
/// - any -> Editing (clear_all)
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MatchState {
    /// Players are placing cells; the clock and the auto-step loop are idle
    Editing,
    /// The auto-step loop is advancing generations
    Running,
    /// Stepping is suspended but the match can resume
    Paused,
    /// The match ended and only `clear_all` starts a new one
    Finished(EndReason),
}

impl MatchState {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    /// Indicates the match has ended and generations no longer advance
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::Editing
    }
}

/// Rules and lifecycle of one match: command gating per state, generation
/// stepping, score accounting, and the pacing of the auto-step loop.
///
/// The engine never touches a display or an input device. Commands return
/// outcomes and [`step`](MatchEngine::step) returns a [`StepReport`], so a
/// presentation layer renders from those instead of being called back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchEngine {
    board: Board,
    mode: Mode,
    state: MatchState,
    brush: Player,
    generation: u64,
    scores: PerPlayer<u64>,
    reveal_score: bool,
    pacer: StepPacer,
    #[serde(skip)]
    started_at: Option<Instant>,
    #[serde(skip)]
    ended_at: Option<Instant>,
}

impl MatchEngine {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            board: Board::new(config.size),
            mode: Mode::Duel,
            state: Default::default(),
            brush: Player::One,
            generation: 0,
            scores: PerPlayer::default(),
            reveal_score: false,
            pacer: StepPacer::default(),
            started_at: None,
            ended_at: None,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn brush(&self) -> Player {
        self.brush
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Births credited to each player since the last `clear_all`.
    pub fn scores(&self) -> PerPlayer<u64> {
        self.scores
    }

    /// Whether scores should be presented right now. Raised on pause and on
    /// match end, lowered while running or editing.
    pub fn reveal_score(&self) -> bool {
        self.reveal_score
    }

    pub fn step_delay(&self) -> Duration {
        self.pacer.delay()
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        self.board.get(coords)
    }

    pub fn population(&self) -> PerPlayer<CellCount> {
        self.board.population()
    }

    /// How long the match has been underway: zero before the first play,
    /// frozen at the final value once the match ends.
    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started_at) => self.ended_at.unwrap_or_else(Instant::now) - started_at,
            None => Duration::ZERO,
        }
    }

    /// Primary click toggles a cell under the current brush, `erase` (the
    /// secondary click) only ever kills. Killing works on any owner's cell;
    /// placing draws the brush owner, except that the second player cannot
    /// place in single mode. Ignored while the auto-step loop is running.
    pub fn toggle_cell(&mut self, coords: Coord2, erase: bool) -> Result<ToggleOutcome> {
        use ToggleOutcome::*;

        let coords = self.board.validate_coords(coords)?;
        if self.state.is_running() {
            return Ok(NoChange);
        }

        let cell = self.board[coords];
        if erase || cell.is_alive() {
            if !cell.is_alive() {
                return Ok(NoChange);
            }
            self.board[coords] = Cell::Dead;
            return Ok(Erased);
        }

        if self.mode == Mode::Single && self.brush == Player::Two {
            return Ok(NoChange);
        }
        self.board[coords] = Cell::Alive(self.brush);
        Ok(Placed)
    }

    /// Stamps a whole formation for the current brush, under the same
    /// gating as [`toggle_cell`](MatchEngine::toggle_cell).
    pub fn stamp_pattern(&mut self, pattern: Pattern, origin: Coord2) -> Result<ToggleOutcome> {
        use ToggleOutcome::*;

        let targets = pattern.project(&self.board, origin)?;
        if self.state.is_running() {
            return Ok(NoChange);
        }
        if self.mode == Mode::Single && self.brush == Player::Two {
            return Ok(NoChange);
        }

        for coords in targets {
            self.board[coords] = Cell::Alive(self.brush);
        }
        Ok(Placed)
    }

    pub fn set_brush(&mut self, brush: Player) {
        self.brush = brush;
    }

    /// Flips single/duel. Entering single mode forces the brush back to
    /// player one; the board, scores, and generation stay as they are.
    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = match self.mode {
            Mode::Single => Mode::Duel,
            Mode::Duel => Mode::Single,
        };
        if self.mode == Mode::Single {
            self.brush = Player::One;
        }
        log::debug!("mode switched to {:?}", self.mode);
        self.mode
    }

    /// Adjusts the auto-step interval, clamped to
    /// `MIN_STEP_DELAY..=MAX_STEP_DELAY`. Takes effect from the next tick.
    pub fn set_step_delay(&mut self, delay: Duration) {
        self.pacer.set_delay(delay);
    }

    /// Starts or resumes the auto-step loop. The first step lands one full
    /// delay later, so playing and immediately pausing leaves the position
    /// untouched. Ignored while running or after the match has ended.
    pub fn play(&mut self) -> ControlOutcome {
        use ControlOutcome::*;

        match self.state {
            MatchState::Running | MatchState::Finished(_) => NoChange,
            MatchState::Editing | MatchState::Paused => {
                self.state = MatchState::Running;
                self.reveal_score = false;
                self.pacer.arm();
                self.mark_started();
                log::debug!("running at generation {}", self.generation);
                Changed
            }
        }
    }

    /// Suspends the auto-step loop, keeping the position and generation for
    /// a later resume. Only meaningful while running.
    pub fn pause(&mut self) -> ControlOutcome {
        use ControlOutcome::*;

        if !self.state.is_running() {
            return NoChange;
        }

        self.pacer.cancel();
        self.state = MatchState::Paused;
        self.reveal_score = true;
        log::debug!("paused at generation {}", self.generation);
        Changed
    }

    /// Feeds host time to the auto-step loop. Advances at most one
    /// generation per call and does nothing unless the match is running.
    pub fn advance(&mut self, elapsed: Duration) -> StepOutcome {
        if !self.state.is_running() {
            return StepOutcome::Idle;
        }
        if !self.pacer.tick(elapsed) {
            return StepOutcome::Idle;
        }
        self.step()
    }

    /// Replaces the whole board with a random fill at `density`, drawing a
    /// fresh seed. [`DEFAULT_RANDOM_DENSITY`] is the usual choice.
    pub fn randomize(&mut self, density: f64) -> ControlOutcome {
        use rand::prelude::*;
        self.randomize_seeded(density, rand::rng().random())
    }

    /// Replaces the whole board with an independent random fill: owners are
    /// drawn uniformly in duel mode and always belong to player one in
    /// single mode. Ignored while the auto-step loop is running.
    pub fn randomize_seeded(&mut self, density: f64, seed: u64) -> ControlOutcome {
        use ControlOutcome::*;

        if self.state.is_running() {
            return NoChange;
        }

        self.board = RandomBoard::new(seed, density, self.mode).generate(self.size());
        Changed
    }

    /// Stops any auto-stepping, wipes the board, and resets generation and
    /// scores for a fresh editing session. Works from every state and is
    /// the only way out of a finished match.
    pub fn clear_all(&mut self) {
        self.pacer.cancel();
        self.board.clear_all();
        self.state = MatchState::Editing;
        self.generation = 0;
        self.scores = PerPlayer::default();
        self.reveal_score = false;
        self.started_at = None;
        self.ended_at = None;
        log::debug!("cleared, back to editing");
    }

    /// Advances exactly one generation, synchronously.
    ///
    /// The whole next board is computed from a snapshot of the current one
    /// and committed in a single batch. A live cell survives with
    /// `SURVIVAL_MIN..=SURVIVAL_MAX` live neighbors and keeps its owner; a
    /// dead cell with exactly `BIRTH_NEIGHBORS` live neighbors is born to
    /// the dominant neighboring player in duel mode and to player one in
    /// single mode. Births are added to the scores. In duel mode a side
    /// left without live cells ends the match.
    ///
    /// Callable while editing or paused as a manual single step; ignored
    /// once the match has finished.
    pub fn step(&mut self) -> StepOutcome {
        if self.state.is_finished() {
            return StepOutcome::Idle;
        }

        let size = self.size();
        let (size_x, size_y) = size;
        let mut next = Board::new(size);
        let mut births = PerPlayer::<u32>::default();

        for x in 0..size_x {
            for y in 0..size_y {
                let coords = (x, y);
                let counts = self.board.counts_at(coords);
                let alive_around = counts.total();

                next[coords] = match self.board[coords] {
                    Cell::Alive(owner)
                        if (SURVIVAL_MIN..=SURVIVAL_MAX).contains(&alive_around) =>
                    {
                        Cell::Alive(owner)
                    }
                    Cell::Alive(_) => Cell::Dead,
                    Cell::Dead if alive_around == BIRTH_NEIGHBORS => {
                        let owner = match self.mode {
                            Mode::Duel => counts.dominant(),
                            Mode::Single => Player::One,
                        };
                        births[owner] += 1;
                        Cell::Alive(owner)
                    }
                    Cell::Dead => Cell::Dead,
                };
            }
        }

        self.board = next;
        self.generation += 1;
        self.scores.one += u64::from(births.one);
        self.scores.two += u64::from(births.two);

        let alive = self.board.population();
        let ended = match self.mode {
            Mode::Duel => self.check_elimination(alive),
            Mode::Single => None,
        };
        log::trace!(
            "generation {}: births {:?}, alive {:?}",
            self.generation,
            births,
            alive
        );

        StepOutcome::Advanced(StepReport {
            generation: self.generation,
            births,
            alive,
            ended,
        })
    }

    /// Records the match start time on the first play
    fn mark_started(&mut self) {
        if self.started_at.is_none() {
            self.started_at.replace(Instant::now());
        }
    }

    fn check_elimination(&mut self, alive: PerPlayer<CellCount>) -> Option<EndReason> {
        let reason = match (alive.one == 0, alive.two == 0) {
            (true, true) => EndReason::NoneAlive,
            (true, false) => EndReason::Eliminated(Player::One),
            (false, true) => EndReason::Eliminated(Player::Two),
            (false, false) => return None,
        };

        self.pacer.cancel();
        self.state = MatchState::Finished(reason);
        self.reveal_score = true;
        self.ended_at.replace(Instant::now());
        log::debug!("finished at generation {}: {:?}", self.generation, reason);
        Some(reason)
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}
