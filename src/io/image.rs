//! PNG export of boards with layers rendered side by side
//!
//! Visited cells are colored by a gradient over their visit order, holes
//! are near-black, and unvisited cells stay transparent.

use image::{Rgba, RgbaImage};

use crate::io::configuration::{CELL_PIXEL_SIZE, LAYER_GUTTER_PIXELS};
use crate::io::error::{Result, SolverError, invalid_parameter};
use crate::spatial::Board;

/// Fill color for blocked cells
pub(crate) const HOLE_COLOR: [u8; 4] = [38, 34, 32, 255];

/// Gradient endpoint for the first move
const ORDER_START_COLOR: [u8; 4] = [52, 118, 235, 255];

/// Gradient endpoint for the final move
const ORDER_END_COLOR: [u8; 4] = [235, 94, 52, 255];

/// Gradient color for a visit order within a tour of `total` squares
pub(crate) fn order_color(order: u32, total: usize) -> [u8; 4] {
    let fraction = if total <= 1 {
        0.0
    } else {
        f64::from(order.saturating_sub(1)) / (total as f64 - 1.0)
    };

    let mut color = [0u8; 4];
    for ((slot, &from), &to) in color
        .iter_mut()
        .zip(ORDER_START_COLOR.iter())
        .zip(ORDER_END_COLOR.iter())
    {
        *slot = (f64::from(to) - f64::from(from))
            .mul_add(fraction, f64::from(from))
            .round() as u8;
    }
    color
}

/// Pixel width of a rendered board
pub(crate) const fn image_width(layers: usize, size: usize) -> u32 {
    let layer_width = size as u32 * CELL_PIXEL_SIZE;
    layer_width * layers as u32 + LAYER_GUTTER_PIXELS * (layers as u32).saturating_sub(1)
}

/// Pixel height of a rendered board
pub(crate) const fn image_height(size: usize) -> u32 {
    size as u32 * CELL_PIXEL_SIZE
}

/// Paint one board cell as a solid block
pub(crate) fn fill_cell(
    image: &mut RgbaImage,
    size: usize,
    layer: usize,
    row: usize,
    col: usize,
    color: [u8; 4],
) {
    let origin_x =
        layer as u32 * (size as u32 * CELL_PIXEL_SIZE + LAYER_GUTTER_PIXELS) + col as u32 * CELL_PIXEL_SIZE;
    let origin_y = row as u32 * CELL_PIXEL_SIZE;

    for dy in 0..CELL_PIXEL_SIZE {
        for dx in 0..CELL_PIXEL_SIZE {
            let x = origin_x + dx;
            let y = origin_y + dy;
            if x < image.width() && y < image.height() {
                image.put_pixel(x, y, Rgba(color));
            }
        }
    }
}

/// Export the board as a PNG image with transparent background
///
/// # Errors
///
/// Returns an error if:
/// - No moves have been recorded on the board
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(board: &Board, output_path: &str) -> Result<()> {
    if board.visit_order().iter().all(|&order| order == 0) {
        return Err(invalid_parameter(
            "board",
            &"empty",
            &"no moves have been recorded on the board",
        ));
    }

    let size = board.size();
    let total = board.traversable();
    let mut img = RgbaImage::new(image_width(board.layers(), size), image_height(size));

    for ((layer, row, col), &order) in board.visit_order().indexed_iter() {
        let cell = [layer as i32, row as i32, col as i32];
        if board.is_hole(cell) {
            fill_cell(&mut img, size, layer, row, col, HOLE_COLOR);
        } else if order > 0 {
            fill_cell(&mut img, size, layer, row, col, order_color(order, total));
        }
    }

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| SolverError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| SolverError::ImageExport {
        path: output_path.into(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_color_interpolates_between_endpoints() {
        assert_eq!(order_color(1, 64), ORDER_START_COLOR);
        assert_eq!(order_color(64, 64), ORDER_END_COLOR);

        let midpoint = order_color(32, 63);
        for ((&mid, &from), &to) in midpoint
            .iter()
            .zip(ORDER_START_COLOR.iter())
            .zip(ORDER_END_COLOR.iter())
        {
            assert!(mid >= from.min(to) && mid <= from.max(to));
        }
    }

    #[test]
    fn test_single_cell_tour_uses_start_color() {
        assert_eq!(order_color(1, 1), ORDER_START_COLOR);
    }

    #[test]
    fn test_image_dimensions_include_layer_gutters() {
        assert_eq!(image_width(1, 8), 8 * CELL_PIXEL_SIZE);
        assert_eq!(
            image_width(3, 8),
            3 * 8 * CELL_PIXEL_SIZE + 2 * LAYER_GUTTER_PIXELS
        );
        assert_eq!(image_height(8), 8 * CELL_PIXEL_SIZE);
    }
}
