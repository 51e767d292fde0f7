#![warn(clippy::all)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use life_fitness::{
    read_grid, write_metrics, FitnessWeights, FrameExporter, Grid, Point, ReportFormat, Simulation,
    SimulationConfig,
};

/// Runs Conway's Game of Life on a bordered grid and writes the fitness
/// metrics of the run.
#[derive(Parser)]
#[command(name = "life_fitness")]
#[command(version)]
struct Cli {
    /// File with the initial grid: one line of '0'/'1' per row
    grid_file: PathBuf,

    /// Maximum number of generations to simulate
    max_iterations: u32,

    /// Column of the target cell (border included, interior starts at 1)
    target_x: usize,

    /// Row of the target cell (border included, interior starts at 1)
    target_y: usize,

    /// File receiving the metrics, one integer per line
    output_file: PathBuf,

    /// Directory receiving one BMP frame per generation
    frame_output_dir: Option<PathBuf>,

    /// Side length of the grid interior
    #[arg(long, default_value_t = Grid::DEFAULT_SIZE)]
    grid_size: usize,

    /// Pixels per cell in exported frames
    #[arg(long, default_value_t = FrameExporter::DEFAULT_MAGNIFICATION)]
    magnification: u32,

    /// Print every generation to stdout
    #[arg(short, long)]
    display: bool,

    /// Only write distance, size and iterations
    #[arg(long)]
    minimal: bool,
}

fn run(cli: Cli) -> Result<()> {
    if cli.grid_size == 0 {
        return Err(life_fitness::Error::Argument("grid size must be positive".into()).into());
    }
    let grid = read_grid(&cli.grid_file, cli.grid_size)?;
    let frames = cli
        .frame_output_dir
        .map(|dir| FrameExporter::new(dir, cli.magnification));
    let config = SimulationConfig::new(cli.max_iterations, Point::new(cli.target_x, cli.target_y))
        .with_display(cli.display)
        .with_frames(frames);

    let metrics = Simulation::new(grid, config)?.run()?;
    log::info!(
        "fitness {}\n{}",
        metrics.fitness(&FitnessWeights::default(), cli.max_iterations, cli.grid_size),
        metrics
    );

    let format = if cli.minimal {
        ReportFormat::Minimal
    } else {
        ReportFormat::Full
    };
    write_metrics(&cli.output_file, &metrics, format)
        .with_context(|| format!("while reporting a run of {}", cli.grid_file.display()))?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            // --help / --version
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(u8::MAX);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::from(u8::MAX)
        }
    }
}
