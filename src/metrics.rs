use std::fmt;
use std::io::Write;

use crate::stopping::StopReason;

/// Running statistics folded in once per generation, generation 0 included.
#[derive(Clone, Debug, Default)]
pub struct MetricsAccumulator {
    samples: u64,
    size_sum: u64,
    max_size: usize,
    min_distance: Option<usize>,
}

impl MetricsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, size: usize, distance: usize) {
        self.samples += 1;
        self.size_sum += size as u64;
        self.max_size = self.max_size.max(size);
        self.min_distance = Some(self.min_distance.map_or(distance, |d| d.min(distance)));
    }

    pub fn finish(
        &self,
        final_distance: usize,
        final_size: usize,
        iterations: u32,
        stop: StopReason,
    ) -> RunMetrics {
        debug_assert_eq!(self.samples, iterations as u64 + 1);
        let average_size = if self.samples == 0 {
            0.
        } else {
            self.size_sum as f64 / self.samples as f64
        };
        RunMetrics {
            final_distance,
            final_size,
            iterations,
            max_size: self.max_size,
            average_size,
            min_distance: self.min_distance.unwrap_or(final_distance),
            stop,
        }
    }
}

/// Which metric lines a report carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// distance, size, iterations
    Minimal,
    /// distance, size, iterations, max size, average size, min distance
    #[default]
    Full,
}

/// Outcome of one simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunMetrics {
    pub final_distance: usize,
    pub final_size: usize,
    pub iterations: u32,
    pub max_size: usize,
    pub average_size: f64,
    pub min_distance: usize,
    pub stop: StopReason,
}

/// Weights of the scalar fitness handed to the evolutionary loop.
#[derive(Clone, Copy, Debug)]
pub struct FitnessWeights {
    pub min_distance: u64,
    pub iterations: u64,
    pub max_size: u64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            min_distance: 1,
            iterations: 1,
            max_size: 10,
        }
    }
}

impl RunMetrics {
    pub fn target_reached(&self) -> bool {
        self.stop == StopReason::TargetReached
    }

    /// Scalar fitness, lower is better.
    ///
    /// Runs that never reach the target are charged the full iteration
    /// budget and the full grid area instead of their observed values.
    pub fn fitness(&self, weights: &FitnessWeights, max_iterations: u32, grid_size: usize) -> u64 {
        let (iterations, max_size) = if self.final_distance != 0 {
            (max_iterations as u64, (grid_size * grid_size) as u64)
        } else {
            (self.iterations as u64, self.max_size as u64)
        };
        weights.min_distance * self.min_distance as u64
            + weights.iterations * iterations
            + weights.max_size * max_size
    }

    /// Writes one integer per line. The average is truncated.
    pub fn write_report<W: Write>(&self, mut w: W, format: ReportFormat) -> std::io::Result<()> {
        writeln!(w, "{}", self.final_distance)?;
        writeln!(w, "{}", self.final_size)?;
        writeln!(w, "{}", self.iterations)?;
        if format == ReportFormat::Full {
            writeln!(w, "{}", self.max_size)?;
            writeln!(w, "{}", self.average_size.trunc() as u64)?;
            writeln!(w, "{}", self.min_distance)?;
        }
        w.flush()
    }
}

impl fmt::Display for RunMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "stop: {}", self.stop)?;
        writeln!(f, "final distance: {}", self.final_distance)?;
        writeln!(f, "final size: {}", self.final_size)?;
        writeln!(f, "iterations: {}", self.iterations)?;
        writeln!(f, "max size: {}", self.max_size)?;
        writeln!(f, "average size: {:.3}", self.average_size)?;
        write!(f, "min distance: {}", self.min_distance)
    }
}
