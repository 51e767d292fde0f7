use crate::bounds::{distance_to_target, Boundaries};
use crate::display;
use crate::engine::LifeEngine;
use crate::error::{Error, Result};
use crate::frames::FrameExporter;
use crate::grid::{Grid, Point};
use crate::metrics::{MetricsAccumulator, RunMetrics};
use crate::stopping::{StopReason, StoppingPolicy};

/// Runtime options of a single evaluation.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    pub max_iterations: u32,
    pub target: Point,
    /// Print every generation to stdout.
    pub display: bool,
    /// Export every generation as a BMP frame.
    pub frames: Option<FrameExporter>,
}

impl SimulationConfig {
    pub fn new(max_iterations: u32, target: Point) -> Self {
        Self {
            max_iterations,
            target,
            display: false,
            frames: None,
        }
    }

    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    pub fn with_frames(mut self, frames: Option<FrameExporter>) -> Self {
        self.frames = frames;
        self
    }
}

/// Drives the generation loop and owns every piece of transient state:
/// the grid, the two-generation history and the running metrics.
pub struct Simulation {
    grid: Grid,
    previous: Grid,
    before_previous: Grid,
    engine: LifeEngine,
    policy: StoppingPolicy,
    metrics: MetricsAccumulator,
    config: SimulationConfig,
}

impl Simulation {
    /// Fails with [`Error::Argument`] when the target lies outside the grid.
    pub fn new(grid: Grid, config: SimulationConfig) -> Result<Self> {
        let side = grid.side();
        if config.target.x >= side || config.target.y >= side {
            return Err(Error::Argument(format!(
                "target {} is outside the {}x{} grid",
                config.target, side, side
            )));
        }
        let n = grid.size();
        Ok(Self {
            grid,
            previous: Grid::new(n),
            before_previous: Grid::new(n),
            engine: LifeEngine::new(),
            policy: StoppingPolicy::new(config.target),
            metrics: MetricsAccumulator::new(),
            config,
        })
    }

    /// Folds the current generation into the metrics and emits it.
    fn observe(&mut self, generation: u32) -> Result<()> {
        let bounds = Boundaries::compute(&self.grid);
        let size = bounds.automaton_size();
        let distance = distance_to_target(&self.grid, &bounds, self.config.target);
        self.metrics.record(size, distance);
        log::debug!(
            "generation {}: size={} distance={}",
            generation,
            size,
            distance
        );

        if self.config.display {
            println!("generation {}", generation);
            print!("{}", display::render(&self.grid, self.config.target));
        }
        if let Some(frames) = &self.config.frames {
            frames.export(&self.grid, self.config.target, generation)?;
        }
        Ok(())
    }

    /// Runs until a stopping condition fires or the budget is spent.
    ///
    /// Consumes the simulation: the accumulated metrics belong to exactly
    /// one run.
    pub fn run(mut self) -> Result<RunMetrics> {
        self.observe(0)?;

        let mut iterations = 0;
        let mut stop = StopReason::Exhaustion;
        for i in 0..self.config.max_iterations {
            iterations = i + 1;
            self.before_previous.copy_from(&self.previous);
            self.previous.copy_from(&self.grid);
            let live = self.engine.advance(&mut self.grid);
            self.observe(iterations)?;

            let verdict = self
                .policy
                .evaluate(&self.grid, live, &self.previous, &self.before_previous);
            if let Some(reason) = verdict {
                log::info!("stopping at iteration {}: {}", iterations, reason);
                stop = reason;
                break;
            }
        }
        if stop == StopReason::Exhaustion {
            log::info!("stopping at iteration {}: {}", iterations, stop);
        }

        let bounds = Boundaries::compute(&self.grid);
        let final_distance = if stop == StopReason::TargetReached {
            0
        } else {
            distance_to_target(&self.grid, &bounds, self.config.target)
        };
        Ok(self.metrics.finish(
            final_distance,
            bounds.automaton_size(),
            iterations,
            stop,
        ))
    }
}
