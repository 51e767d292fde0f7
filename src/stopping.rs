use std::fmt;

use crate::grid::{Grid, Point};

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The target cell became alive.
    TargetReached,
    /// No live cells are left.
    Extinction,
    /// The grid did not change over the last generation.
    StaticBehavior,
    /// The grid matches the one from two generations ago.
    RepetitiveBehavior,
    /// The iteration budget ran out.
    Exhaustion,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::TargetReached => "target reached",
            Self::Extinction => "automaton died",
            Self::StaticBehavior => "automaton became static",
            Self::RepetitiveBehavior => "automaton became repetitive",
            Self::Exhaustion => "iteration budget exhausted",
        };
        f.write_str(text)
    }
}

/// Termination checks run once per generation, after the update.
pub struct StoppingPolicy {
    target: Point,
}

impl StoppingPolicy {
    pub fn new(target: Point) -> Self {
        Self { target }
    }

    /// Returns the first condition that holds, in priority order.
    ///
    /// `live` is the live-cell count reported by the update;
    /// `previous` and `before_previous` are the two preceding generations.
    /// Exhaustion is never reported here: it is the loop bound.
    pub fn evaluate(
        &self,
        grid: &Grid,
        live: usize,
        previous: &Grid,
        before_previous: &Grid,
    ) -> Option<StopReason> {
        if grid.is_alive(self.target) {
            Some(StopReason::TargetReached)
        } else if live == 0 {
            Some(StopReason::Extinction)
        } else if grid == previous {
            Some(StopReason::StaticBehavior)
        } else if grid == before_previous {
            Some(StopReason::RepetitiveBehavior)
        } else {
            None
        }
    }
}
