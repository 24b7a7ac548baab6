//! Per-move capture and GIF generation for tour animation
//!
//! Records visit events during a solve attempt and replays them into
//! cumulative frames, one knight move per frame.

use image::{Frame, RgbaImage};
use ndarray::Array3;

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{Result, SolverError, invalid_parameter};
use crate::io::image::{HOLE_COLOR, image_height, image_width, order_color};
use crate::spatial::Board;

/// Background color for cells the knight has not reached yet
const EMPTY_COLOR: [u8; 4] = [228, 224, 216, 255];

/// A single knight move event
#[derive(Clone, Copy, Debug)]
pub struct VisitEvent {
    /// Absolute (layer, row, column) coordinates of the visited cell
    pub position: [i32; 3],
    /// Step number assigned to the cell
    pub order: u32,
}

/// Captures knight moves for animation export
///
/// Holds its own snapshot of the hole layout so frames can be rendered
/// after the solver has moved on. Cleared on every retry so only the
/// final attempt's moves survive.
#[derive(Clone, Debug)]
pub struct TourCapture {
    events: Vec<VisitEvent>,
    layers: usize,
    size: usize,
    total: usize,
    holes: Array3<bool>,
}

impl TourCapture {
    /// Create a capture sized for the given board
    pub fn new(board: &Board) -> Self {
        Self {
            events: Vec::with_capacity(board.traversable()),
            layers: board.layers(),
            size: board.size(),
            total: board.traversable(),
            holes: board.holes().clone(),
        }
    }

    /// Record a visit at the given position
    pub fn record_visit(&mut self, position: [i32; 3], order: u32) {
        self.events.push(VisitEvent { position, order });
    }

    /// Discard all recorded events, keeping the board snapshot
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of recorded visit events
    pub const fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Export the captured moves as a GIF animation
    ///
    /// Automatically skips frames if the requested frame rate exceeds
    /// viewer capabilities, keeping the apparent animation speed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No visit events were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        if self.events.is_empty() {
            return Err(invalid_parameter(
                "visualization",
                &"empty",
                &"no knight moves captured for visualization",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor);

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| SolverError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| SolverError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| SolverError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let shape = (self.layers, self.size, self.size);
        let mut orders = Array3::<u32>::from_elem(shape, 0);
        let mut frames = Vec::new();

        frames.push(self.render_frame(&orders, delay_ms));

        let mut event_count = 0;
        for event in &self.events {
            let [layer, row, col] = event.position;
            if layer >= 0 && row >= 0 && col >= 0 {
                if let Some(cell) =
                    orders.get_mut([layer as usize, row as usize, col as usize])
                {
                    *cell = event.order;
                }
            }

            event_count += 1;
            if event_count % skip_factor == 0 {
                frames.push(self.render_frame(&orders, delay_ms));
            }
        }

        if event_count % skip_factor != 0 {
            frames.push(self.render_frame(&orders, delay_ms));
        }

        // Final frame displays longer for better visibility
        if let Some(final_image) = frames.last().map(|frame| frame.buffer().clone()) {
            frames.push(Frame::from_parts(
                final_image,
                0,
                0,
                image::Delay::from_numer_denom_ms(delay_ms * 25, 1),
            ));
        }

        frames
    }

    fn render_frame(&self, orders: &Array3<u32>, delay_ms: u32) -> Frame {
        let mut img = RgbaImage::new(image_width(self.layers, self.size), image_height(self.size));

        for ((layer, row, col), &order) in orders.indexed_iter() {
            let color = if self.holes.get([layer, row, col]).copied().unwrap_or(false) {
                HOLE_COLOR
            } else if order > 0 {
                order_color(order, self.total)
            } else {
                EMPTY_COLOR
            };

            crate::io::image::fill_cell(&mut img, self.size, layer, row, col, color);
        }

        Frame::from_parts(img, 0, 0, image::Delay::from_numer_denom_ms(delay_ms, 1))
    }
}
