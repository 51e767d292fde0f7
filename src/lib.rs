//! Bordered Game of Life simulator that scores how an initial
//! configuration evolves toward a target cell.

#![warn(clippy::all)]

mod bounds;
mod display;
mod engine;
mod error;
mod frames;
mod grid;
mod io;
mod metrics;
mod patterns;
mod simulation;
mod stopping;

pub use bounds::{chebyshev_distance, distance_to_target, Boundaries};
pub use display::render;
pub use engine::LifeEngine;
pub use error::{Error, Result};
pub use frames::{FrameExporter, Palette};
pub use grid::{Grid, Point};
pub use io::{read_grid, write_metrics};
pub use metrics::{FitnessWeights, MetricsAccumulator, ReportFormat, RunMetrics};
pub use patterns::{Pattern, BLINKER, BLOCK, DOT, GLIDER, PATTERNS, R_PENTOMINO};
pub use simulation::{Simulation, SimulationConfig};
pub use stopping::{StopReason, StoppingPolicy};
