//! CLI entry point for the heuristic knight's tour solver

use clap::Parser;
use greedyknight::io::cli::{Cli, TourRunner};

fn main() -> greedyknight::Result<()> {
    let cli = Cli::parse();
    let mut runner = TourRunner::new(cli);
    runner.run()
}
