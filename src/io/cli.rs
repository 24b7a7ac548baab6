//! Command-line interface for configuring and running tour searches

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::algorithm::executor::TourSolver;
use crate::io::configuration::{
    DEFAULT_3D_LAYERS, DEFAULT_BOARD_SIZE, DEFAULT_CLOSED_ATTEMPTS, DEFAULT_LAYERS,
    DEFAULT_OPEN_ATTEMPTS, DEFAULT_SEED, GIF_FRAME_DELAY_MS, MAX_BOARD_LAYERS, MAX_BOARD_SIZE,
    MIN_BOARD_SIZE,
};
use crate::io::error::{Result, SolverError, invalid_parameter};
use crate::io::image::export_board_as_png;
use crate::io::progress::AttemptProgress;
use crate::io::render::{render_board, render_summary};
use crate::spatial::{BoardStyle, TourConfig};

/// Board style accepted on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StyleArg {
    /// Standard rectangular board
    Regular,
    /// Roughly a quarter of non-corner cells are blocked
    WithHoles,
    /// Knight moves may cross layers
    HighDimensional,
}

impl StyleArg {
    const fn as_style(self) -> BoardStyle {
        match self {
            Self::Regular => BoardStyle::Regular,
            Self::WithHoles => BoardStyle::WithHoles,
            Self::HighDimensional => BoardStyle::HighDimensional,
        }
    }
}

// Display drives clap's default-value rendering and must match the
// accepted argument values
impl std::fmt::Display for StyleArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_style())
    }
}

fn parse_position(raw: &str) -> std::result::Result<[i32; 3], String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected LAYER,ROW,COL, got '{raw}'"));
    }

    let mut position = [0i32; 3];
    for (slot, part) in position.iter_mut().zip(parts.iter()) {
        *slot = part
            .parse()
            .map_err(|e| format!("invalid coordinate '{part}': {e}"))?;
    }
    Ok(position)
}

#[derive(Parser)]
#[command(name = "greedyknight")]
#[command(
    author,
    version,
    about = "Search for knight's tours using Warnsdorff's rule"
)]
/// Command-line arguments for the tour solver
pub struct Cli {
    /// Cells per side of the board
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub size: usize,

    /// Number of stacked board layers
    #[arg(short, long, default_value_t = DEFAULT_LAYERS)]
    pub layers: usize,

    /// Board style
    #[arg(long, value_enum, default_value_t = StyleArg::Regular)]
    pub style: StyleArg,

    /// Knight movement dimensionality (2 or 3)
    #[arg(short, long, default_value_t = 2)]
    pub dimension: u8,

    /// Require the tour to end one knight move from its start
    #[arg(short, long)]
    pub closed: bool,

    /// Starting cell; random starts are used when omitted
    #[arg(long, value_parser = parse_position, value_name = "L,R,C")]
    pub start: Option<[i32; 3]>,

    /// Random seed for reproducible solving
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Retry budget for random starts (default depends on tour type)
    #[arg(short, long)]
    pub attempts: Option<usize>,

    /// Suppress progress and board output
    #[arg(short, long)]
    pub quiet: bool,

    /// Export the solved board as a PNG at the given path
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// Export the tour animation as a GIF at the given path
    #[arg(short, long, value_name = "GIF")]
    pub visualize: Option<PathBuf>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Retry budget, defaulting by tour type
    pub const fn attempt_budget(&self) -> usize {
        match self.attempts {
            Some(attempts) => attempts,
            None if self.closed => DEFAULT_CLOSED_ATTEMPTS,
            None => DEFAULT_OPEN_ATTEMPTS,
        }
    }
}

/// Orchestrates configuration validation, solving, and reporting
pub struct TourRunner {
    cli: Cli,
}

impl TourRunner {
    /// Create a runner with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Validate the configuration, search for a tour, and report results
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails, the retry
    /// budget is exhausted without a completed tour, or an export fails.
    pub fn run(&mut self) -> Result<()> {
        let config = self.build_config()?;
        let mut solver = TourSolver::new(config, self.cli.seed);

        if self.cli.visualize.is_some() {
            solver.enable_visualization();
        }

        let start_time = Instant::now();
        self.solve(&mut solver)?;
        let elapsed = start_time.elapsed();

        self.report(&solver, elapsed)
    }

    // Allow print for user feedback on the layer adjustment
    #[allow(clippy::print_stderr)]
    fn build_config(&self) -> Result<TourConfig> {
        if self.cli.size < MIN_BOARD_SIZE {
            return Err(invalid_parameter(
                "size",
                &self.cli.size,
                &format!("board size must be at least {MIN_BOARD_SIZE}"),
            ));
        }
        if self.cli.size > MAX_BOARD_SIZE {
            return Err(invalid_parameter(
                "size",
                &self.cli.size,
                &format!("board size must be at most {MAX_BOARD_SIZE}"),
            ));
        }
        if self.cli.layers == 0 || self.cli.layers > MAX_BOARD_LAYERS {
            return Err(invalid_parameter(
                "layers",
                &self.cli.layers,
                &format!("layer count must be between 1 and {MAX_BOARD_LAYERS}"),
            ));
        }
        if self.cli.dimension != 2 && self.cli.dimension != 3 {
            return Err(invalid_parameter(
                "dimension",
                &self.cli.dimension,
                &"only 2D and 3D knight movement is supported",
            ));
        }

        let style = self.cli.style.as_style();
        let mut layers = self.cli.layers;

        // A single layer leaves the 24-offset move set with nowhere to go
        if style == BoardStyle::HighDimensional && self.cli.dimension == 3 && layers == 1 {
            layers = DEFAULT_3D_LAYERS;
            if !self.cli.quiet {
                eprintln!("Raising layer count to {DEFAULT_3D_LAYERS} for a 3D board");
            }
        }

        Ok(TourConfig {
            size: self.cli.size,
            layers,
            style,
            dimension: self.cli.dimension,
            closed_tour: self.cli.closed,
        })
    }

    // Allow print for user feedback when the fixed start fails
    #[allow(clippy::print_stderr)]
    fn solve(&self, solver: &mut TourSolver) -> Result<()> {
        if let Some(start) = self.cli.start {
            match solver.solve(start) {
                Ok(()) => return Ok(()),
                Err(error) if error.is_attempt_failure() => {
                    if self.cli.should_show_progress() {
                        eprintln!("No tour from the given start ({error}); trying random starts");
                    }
                }
                Err(error) => return Err(error),
            }
        }

        self.solve_with_retries(solver)
    }

    fn solve_with_retries(&self, solver: &mut TourSolver) -> Result<()> {
        let attempts = self.attempt_budget();
        let mut progress = self
            .cli
            .should_show_progress()
            .then(|| AttemptProgress::new(attempts));

        for attempt in 1..=attempts {
            solver.reset();
            let start = solver.random_admissible_start();

            match solver.solve(start) {
                Ok(()) => {
                    if let Some(bar) = &progress {
                        bar.finish_success(attempt, start);
                    }
                    return Ok(());
                }
                Err(error) if error.is_attempt_failure() => {
                    if let Some(bar) = &mut progress {
                        bar.record_failure(attempt, solver.visited(), solver.total_squares());
                    }
                }
                Err(error) => return Err(error),
            }
        }

        if let Some(bar) = &progress {
            bar.finish_exhausted();
        }
        Err(SolverError::AttemptsExhausted { attempts })
    }

    const fn attempt_budget(&self) -> usize {
        self.cli.attempt_budget()
    }

    // Board and summary output is the tool's primary result
    #[allow(clippy::print_stdout)]
    fn report(&self, solver: &TourSolver, elapsed: Duration) -> Result<()> {
        if !self.cli.quiet {
            println!("{}", render_board(solver.board(), &solver.state()));
            println!("{}", render_summary(solver, elapsed));
        }

        if let Some(path) = &self.cli.output {
            let path_str = path.to_str().ok_or_else(|| {
                invalid_parameter("output", &path.display(), &"path is not valid UTF-8")
            })?;
            export_board_as_png(solver.board(), path_str)?;
        }

        if let Some(path) = &self.cli.visualize {
            let path_str = path.to_str().ok_or_else(|| {
                invalid_parameter("visualize", &path.display(), &"path is not valid UTF-8")
            })?;
            if let Some(capture) = &solver.visualization {
                capture.export_gif(path_str, GIF_FRAME_DELAY_MS)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position_accepts_triples() {
        assert_eq!(parse_position("0,0,0"), Ok([0, 0, 0]));
        assert_eq!(parse_position(" 1, 2, 3 "), Ok([1, 2, 3]));
        assert!(parse_position("1,2").is_err());
        assert!(parse_position("a,b,c").is_err());
    }

    #[test]
    fn test_attempt_budget_defaults_by_tour_type() {
        let open = Cli::parse_from(["greedyknight"]);
        assert_eq!(open.attempt_budget(), DEFAULT_OPEN_ATTEMPTS);

        let closed = Cli::parse_from(["greedyknight", "--closed"]);
        assert_eq!(closed.attempt_budget(), DEFAULT_CLOSED_ATTEMPTS);

        let explicit = Cli::parse_from(["greedyknight", "--attempts", "7"]);
        assert_eq!(explicit.attempt_budget(), 7);
    }

    #[test]
    fn test_build_config_rejects_out_of_range_values() {
        let too_small = TourRunner::new(Cli::parse_from(["greedyknight", "--size", "2"]));
        assert!(matches!(
            too_small.build_config(),
            Err(SolverError::InvalidParameter { parameter: "size", .. })
        ));

        let bad_dimension = TourRunner::new(Cli::parse_from(["greedyknight", "--dimension", "4"]));
        assert!(matches!(
            bad_dimension.build_config(),
            Err(SolverError::InvalidParameter {
                parameter: "dimension",
                ..
            })
        ));
    }

    #[test]
    fn test_build_config_raises_layers_for_3d_boards() {
        let runner = TourRunner::new(Cli::parse_from([
            "greedyknight",
            "--style",
            "high-dimensional",
            "--dimension",
            "3",
            "--quiet",
        ]));

        match runner.build_config() {
            Ok(config) => {
                assert_eq!(config.layers, DEFAULT_3D_LAYERS);
                assert_eq!(config.style, BoardStyle::HighDimensional);
            }
            Err(error) => unreachable!("expected a valid config, got {error}"),
        }
    }
}
