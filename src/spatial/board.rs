//! Board state management with hole placement and the admissibility predicate
//!
//! Maintains separate 3D arrays for visit orders and hole flags to keep
//! rendering reads cheap and reset cheap. All coordinates are (layer, row,
//! column); signed coordinates are accepted everywhere so that raw move
//! offsets can be probed without pre-filtering.

use ndarray::Array3;
use rand::{Rng, rngs::StdRng};

use crate::io::error::{Result, invalid_parameter};

/// Divisor applied to the cell count when drawing hole positions
///
/// One draw per four cells gives roughly 25% holes, less corner and
/// duplicate draws which place nothing.
const HOLE_DRAW_DIVISOR: usize = 4;

/// Shape of the board and the kind of tour to search for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardStyle {
    /// Standard rectangular board, every cell traversable
    Regular,
    /// Roughly a quarter of non-corner cells are blocked
    WithHoles,
    /// Knight moves may cross layers using the 24-offset move set
    HighDimensional,
}

impl std::fmt::Display for BoardStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regular => write!(f, "regular"),
            Self::WithHoles => write!(f, "with-holes"),
            Self::HighDimensional => write!(f, "high-dimensional"),
        }
    }
}

/// Immutable configuration shared by every attempt on one board
///
/// Created once at setup and never mutated mid-solve; a retry resets the
/// board but reuses the configuration.
#[derive(Clone, Copy, Debug)]
pub struct TourConfig {
    /// Cells per side of each square layer
    pub size: usize,
    /// Number of 2D slices stacked along the layer axis
    pub layers: usize,
    /// Board style controlling holes and the move set
    pub style: BoardStyle,
    /// Dimensionality of knight movement (2 or 3)
    pub dimension: u8,
    /// Whether the tour must end one knight move from its start
    pub closed_tour: bool,
}

impl TourConfig {
    /// Total cell count including holes
    pub const fn cell_count(&self) -> usize {
        self.layers * self.size * self.size
    }
}

/// Tour board holding per-cell visit orders and hole flags
///
/// Visit orders use 0 as the unvisited sentinel; visited cells carry their
/// 1-based step number. The board owns the traversable total so hole
/// placement and queries stay in one place.
#[derive(Clone, Debug)]
pub struct Board {
    config: TourConfig,
    /// Step number per cell (0 = unvisited)
    visit_order: Array3<u32>,
    /// Blocked cells, fixed for the lifetime of the board
    holes: Array3<bool>,
    /// Cells minus holes
    traversable: usize,
}

impl Board {
    /// Create a board for the given configuration
    ///
    /// All cells start unvisited. For [`BoardStyle::WithHoles`] roughly a
    /// quarter of the cells are blocked using the supplied generator; a
    /// draw landing on a corner or an already-holed cell places nothing,
    /// so the traversable total drops by exactly the number of holes
    /// actually placed.
    pub fn new(config: TourConfig, rng: &mut StdRng) -> Self {
        let shape = (config.layers, config.size, config.size);
        let mut board = Self {
            config,
            visit_order: Array3::from_elem(shape, 0),
            holes: Array3::from_elem(shape, false),
            traversable: config.cell_count(),
        };

        if config.style == BoardStyle::WithHoles {
            board.place_holes(rng);
        }

        board
    }

    fn place_holes(&mut self, rng: &mut StdRng) {
        let draws = self.config.cell_count() / HOLE_DRAW_DIVISOR;

        for _ in 0..draws {
            let layer = rng.random_range(0..self.config.layers);
            let row = rng.random_range(0..self.config.size);
            let col = rng.random_range(0..self.config.size);

            // Corners stay usable on every layer
            if self.is_corner(row, col) {
                continue;
            }

            if let Some(hole) = self.holes.get_mut([layer, row, col]) {
                if !*hole {
                    *hole = true;
                    self.traversable -= 1;
                }
            }
        }
    }

    const fn is_corner(&self, row: usize, col: usize) -> bool {
        let edge = self.config.size - 1;
        (row == 0 || row == edge) && (col == 0 || col == edge)
    }

    /// Convert signed coordinates to grid indices, or `None` when out of bounds
    fn grid_index(&self, position: [i32; 3]) -> Option<[usize; 3]> {
        let [layer, row, col] = position;
        let in_bounds = layer >= 0
            && (layer as usize) < self.config.layers
            && row >= 0
            && (row as usize) < self.config.size
            && col >= 0
            && (col as usize) < self.config.size;

        in_bounds.then_some([layer as usize, row as usize, col as usize])
    }

    /// Sole admissibility predicate: in-bounds, not a hole, unvisited
    ///
    /// Every other component routes bounds and hole logic through this
    /// check rather than re-deriving it.
    pub fn is_occupiable(&self, position: [i32; 3]) -> bool {
        self.grid_index(position).is_some_and(|index| {
            !self.holes.get(index).copied().unwrap_or(true)
                && self.visit_order.get(index).copied().unwrap_or(u32::MAX) == 0
        })
    }

    /// Whether the cell is blocked; out-of-bounds coordinates report false
    pub fn is_hole(&self, position: [i32; 3]) -> bool {
        self.grid_index(position)
            .and_then(|index| self.holes.get(index))
            .copied()
            .unwrap_or(false)
    }

    /// Visit order at a cell (0 = unvisited or out of bounds)
    pub fn order_at(&self, position: [i32; 3]) -> u32 {
        self.grid_index(position)
            .and_then(|index| self.visit_order.get(index))
            .copied()
            .unwrap_or(0)
    }

    /// Record a visit order at a cell
    ///
    /// Callers must check [`Board::is_occupiable`] first; marking an
    /// inadmissible cell is a caller bug.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is out of bounds, holed, or already
    /// visited.
    pub fn mark(&mut self, position: [i32; 3], order: u32) -> Result<()> {
        if !self.is_occupiable(position) {
            return Err(invalid_parameter(
                "position",
                &format!("{position:?}"),
                &"cell is not occupiable",
            ));
        }

        if let Some(cell) = self
            .grid_index(position)
            .and_then(|index| self.visit_order.get_mut(index))
        {
            *cell = order;
        }

        Ok(())
    }

    /// Clear all visit marks, keeping hole placement and configuration
    pub fn reset(&mut self) {
        self.visit_order.fill(0);
    }

    /// Board configuration
    pub const fn config(&self) -> TourConfig {
        self.config
    }

    /// Cells per side
    pub const fn size(&self) -> usize {
        self.config.size
    }

    /// Layer count
    pub const fn layers(&self) -> usize {
        self.config.layers
    }

    /// Traversable cell count (cells minus holes)
    pub const fn traversable(&self) -> usize {
        self.traversable
    }

    /// Number of holes placed
    pub const fn hole_count(&self) -> usize {
        self.config.cell_count() - self.traversable
    }

    /// Read-only snapshot of the visit-order grid for rendering
    pub const fn visit_order(&self) -> &Array3<u32> {
        &self.visit_order
    }

    /// Read-only snapshot of the hole grid for rendering
    pub const fn holes(&self) -> &Array3<bool> {
        &self.holes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn regular(size: usize) -> TourConfig {
        TourConfig {
            size,
            layers: 1,
            style: BoardStyle::Regular,
            dimension: 2,
            closed_tour: false,
        }
    }

    #[test]
    fn test_fresh_board_is_fully_occupiable() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::new(regular(5), &mut rng);

        assert_eq!(board.traversable(), 25);
        assert!(board.is_occupiable([0, 0, 0]));
        assert!(board.is_occupiable([0, 4, 4]));
        assert!(!board.is_occupiable([0, 5, 0]));
        assert!(!board.is_occupiable([0, 0, -1]));
        assert!(!board.is_occupiable([1, 0, 0]));
    }

    #[test]
    fn test_mark_makes_cell_inadmissible() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new(regular(5), &mut rng);

        assert!(board.mark([0, 2, 2], 1).is_ok());
        assert_eq!(board.order_at([0, 2, 2]), 1);
        assert!(!board.is_occupiable([0, 2, 2]));
        assert!(board.mark([0, 2, 2], 2).is_err());
    }

    #[test]
    fn test_reset_clears_marks_and_keeps_holes() {
        let config = TourConfig {
            style: BoardStyle::WithHoles,
            ..regular(8)
        };
        let mut rng = StdRng::seed_from_u64(99);
        let mut board = Board::new(config, &mut rng);
        let holes_before = board.hole_count();

        assert!(board.mark([0, 0, 0], 1).is_ok());
        board.reset();

        assert_eq!(board.order_at([0, 0, 0]), 0);
        assert!(board.is_occupiable([0, 0, 0]));
        assert_eq!(board.hole_count(), holes_before);
    }

    #[test]
    fn test_holes_never_land_on_corners() {
        let config = TourConfig {
            style: BoardStyle::WithHoles,
            ..regular(8)
        };

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = Board::new(config, &mut rng);

            for &corner in &[[0, 0, 0], [0, 0, 7], [0, 7, 0], [0, 7, 7]] {
                assert!(!board.is_hole(corner), "corner holed with seed {seed}");
            }

            let placed = board.holes().iter().filter(|&&hole| hole).count();
            assert_eq!(board.traversable(), 64 - placed);
            assert!(placed <= 16);
        }
    }
}
