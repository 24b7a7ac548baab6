//! Compact text rendering of boards and tour summaries
//!
//! Cells print their visit order aligned to the widest step number, with
//! `S` marking the start, `E` the final step, `H` holes, and `.`
//! unvisited squares.

use std::fmt::Write as _;
use std::time::Duration;

use crate::algorithm::executor::{TourSolver, TourState};
use crate::spatial::Board;

/// Render every layer of the board as an aligned text grid
pub fn render_board(board: &Board, state: &TourState) -> String {
    let total = board.traversable() as u32;
    let width = board.traversable().to_string().len().max(1);
    let mut out = String::new();

    for layer in 0..board.layers() {
        let _ = writeln!(out, "Layer {layer}:");

        for row in 0..board.size() {
            for col in 0..board.size() {
                let cell = [layer as i32, row as i32, col as i32];
                let order = board.order_at(cell);

                let glyph = if board.is_hole(cell) {
                    "H".to_string()
                } else if order == 0 {
                    ".".to_string()
                } else if cell == state.start {
                    "S".to_string()
                } else if order == total {
                    "E".to_string()
                } else {
                    order.to_string()
                };

                let _ = write!(out, "{glyph:>width$} ");
            }
            out.push('\n');
        }
        out.push('\n');
    }

    out
}

/// Render the configuration and outcome of the most recent attempt
pub fn render_summary(solver: &TourSolver, elapsed: Duration) -> String {
    let config = solver.config();
    let state = solver.state();

    let status = if solver.is_tour_closed() {
        "CLOSED"
    } else if solver.has_full_tour() {
        "OPEN"
    } else {
        "INCOMPLETE"
    };

    let mut out = String::new();
    let _ = writeln!(out, "Board size: {0}x{0}", config.size);
    let _ = writeln!(out, "Layers: {}", config.layers);
    let _ = writeln!(out, "Style: {}", config.style);
    let _ = writeln!(out, "Dimension: {}D", config.dimension);
    let _ = writeln!(
        out,
        "Tour type: {}",
        if config.closed_tour { "closed" } else { "open" }
    );
    let _ = writeln!(
        out,
        "Start: (layer {}, row {}, col {})",
        state.start[0], state.start[1], state.start[2]
    );
    let _ = writeln!(
        out,
        "Visited squares: {}/{}",
        solver.visited(),
        solver.total_squares()
    );
    let _ = writeln!(out, "Tour status: {status}");
    let _ = writeln!(out, "Time: {}ms", elapsed.as_millis());

    out
}
