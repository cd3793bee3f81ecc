use core::time::Duration;
use serde::{Deserialize, Serialize};

/// Shortest delay allowed between automatic steps.
pub const MIN_STEP_DELAY: Duration = Duration::from_millis(20);
/// Longest delay allowed between automatic steps.
pub const MAX_STEP_DELAY: Duration = Duration::from_millis(1500);
/// Delay used until the host configures one.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(100);

/// Cancellable repeating timer behind the auto-step loop.
///
/// The pacer never reads a clock. The host feeds it elapsed wall time
/// through [`StepPacer::tick`], which reports `true` exactly when one full
/// delay has accrued since arming or since the previous due tick. A
/// cancelled pacer never reports due, so a cancel can never lose a race
/// against an in-flight tick.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepPacer {
    delay: Duration,
    armed: bool,
    accrued: Duration,
}

impl StepPacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay: clamp_delay(delay),
            armed: false,
            accrued: Duration::ZERO,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Clamps into `MIN_STEP_DELAY..=MAX_STEP_DELAY` and applies from the
    /// next accrual check. An already armed period is not restarted.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = clamp_delay(delay);
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Starts a fresh period: the first due tick is one full delay away.
    pub fn arm(&mut self) {
        self.armed = true;
        self.accrued = Duration::ZERO;
    }

    /// Disarms immediately. Idempotent.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.accrued = Duration::ZERO;
    }

    /// Accrues host time and reports whether a step is due. At most one due
    /// tick per call, and the next period only starts once this one has
    /// been consumed, so steps never pile up behind a stalled host.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.armed {
            return false;
        }

        self.accrued = self.accrued.saturating_add(elapsed);
        if self.accrued >= self.delay {
            self.accrued = Duration::ZERO;
            true
        } else {
            false
        }
    }
}

impl Default for StepPacer {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_DELAY)
    }
}

fn clamp_delay(delay: Duration) -> Duration {
    delay.clamp(MIN_STEP_DELAY, MAX_STEP_DELAY)
}
