//! Aspect-ratio-fit grid layout for the weeks canvas.
//!
//! Given a cell count and a drawing area, picks the row/column split whose
//! aspect ratio sits closest to the area's, then sizes square cells and the
//! centering margins around them.

use std::fmt;

/// Available drawing area, width and height in the same unit.
///
/// This is the area left after the caller has subtracted its fixed outer
/// padding; the margins returned by [`layout`] are measured from the
/// unpadded origin (centering offset plus `base_margin`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The drawing surface has no usable area yet.
///
/// Callers defer and retry once the surface reports positive dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceNotReady;

impl fmt::Display for SurfaceNotReady {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "drawing surface has no usable area yet")
    }
}

impl std::error::Error for SurfaceNotReady {}

/// Result of a layout computation: grid shape plus geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Number of grid rows, >= 1.
    pub rows: usize,
    /// Number of grid columns, >= 1. `rows * cols` covers every cell.
    pub cols: usize,
    /// Side length of one square cell.
    pub cell_size: f64,
    /// Left offset of the grid from the unpadded origin.
    pub margin_x: f64,
    /// Top offset of the grid from the unpadded origin.
    pub margin_y: f64,
    /// Cell count the layout was computed for.
    pub total_cells: usize,
}

impl GridSpec {
    /// Top-left corner of the cell at `(row, col)`.
    pub fn cell_origin(&self, row: usize, col: usize) -> (f64, f64) {
        (
            self.margin_x + col as f64 * self.cell_size,
            self.margin_y + row as f64 * self.cell_size,
        )
    }

    /// Map a point to the row-major index of the cell under it.
    ///
    /// Points in the margins, and positions past `total_cells` in the last
    /// row, map to `None`.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<usize> {
        let cx = (x - self.margin_x) / self.cell_size;
        let cy = (y - self.margin_y) / self.cell_size;
        if cx < 0.0 || cy < 0.0 {
            return None;
        }
        let (col, row) = (cx as usize, cy as usize);
        if col >= self.cols || row >= self.rows {
            return None;
        }
        let index = row * self.cols + col;
        (index < self.total_cells).then_some(index)
    }
}

/// Compute the grid that best matches the area's aspect ratio.
///
/// Scans candidate row counts ascending from 1. Each candidate uses the
/// fewest columns that still fit every cell, and the candidate whose
/// `cols / rows` ratio deviates least from `width / height` wins; a tie
/// keeps the first (lowest row count) candidate seen. Cells are never
/// stretched: `cell_size` is bounded by both axes, and the leftover space
/// becomes centering margins on top of `base_margin`.
///
/// `total_cells` must be at least 1. O(total_cells) per call; callers
/// recompute on resize or submit, not per frame.
pub fn layout(
    total_cells: usize,
    area: Dimensions,
    base_margin: f64,
) -> Result<GridSpec, SurfaceNotReady> {
    if area.width <= 0.0 || area.height <= 0.0 {
        return Err(SurfaceNotReady);
    }
    debug_assert!(total_cells > 0, "layout needs at least one cell");

    let target = area.width / area.height;
    let mut best = (1, total_cells);
    let mut best_deviation = f64::INFINITY;

    for rows in 1..=total_cells {
        let cols = total_cells.div_ceil(rows);
        let deviation = (cols as f64 / rows as f64 - target).abs();
        if deviation < best_deviation {
            best_deviation = deviation;
            best = (rows, cols);
        }
    }

    let (rows, cols) = best;
    let cell_size = (area.width / cols as f64).min(area.height / rows as f64);

    Ok(GridSpec {
        rows,
        cols,
        cell_size,
        margin_x: (area.width - cols as f64 * cell_size) / 2.0 + base_margin,
        margin_y: (area.height - rows as f64 * cell_size) / 2.0 + base_margin,
        total_cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_all_cells() {
        let area = Dimensions::new(860.0, 660.0);
        for n in [1, 2, 7, 23, 52, 1000, 4576] {
            let spec = layout(n, area, 20.0).unwrap();
            assert!(spec.rows >= 1 && spec.cols >= 1, "n = {n}");
            assert!(spec.rows * spec.cols >= n, "n = {n}");
        }
    }

    #[test]
    fn cell_size_bounded_by_both_axes() {
        for (w, h) in [(860.0, 660.0), (300.0, 900.0), (50.0, 49.0)] {
            let spec = layout(4576, Dimensions::new(w, h), 0.0).unwrap();
            assert!(spec.cell_size <= w / spec.cols as f64 + 1e-9);
            assert!(spec.cell_size <= h / spec.rows as f64 + 1e-9);
        }
    }

    #[test]
    fn picks_closest_aspect_ratio() {
        // 12 cells in a 12x3 area: 2 rows of 6 (ratio 3.0) deviates 1.0
        // from the target 4.0, closer than any other candidate.
        let spec = layout(12, Dimensions::new(12.0, 3.0), 0.0).unwrap();
        assert_eq!((spec.rows, spec.cols), (2, 6));
    }

    #[test]
    fn exact_tie_keeps_lower_row_count() {
        // 2 cells in a 5x4 area: 1x2 (ratio 2.0) and 2x1 (ratio 0.5) both
        // deviate 0.75 from the target 1.25; the ascending scan keeps 1x2.
        let spec = layout(2, Dimensions::new(5.0, 4.0), 0.0).unwrap();
        assert_eq!((spec.rows, spec.cols), (1, 2));
    }

    #[test]
    fn margins_center_the_grid() {
        let area = Dimensions::new(100.0, 40.0);
        let spec = layout(10, area, 20.0).unwrap();
        let span_x = spec.cols as f64 * spec.cell_size;
        let span_y = spec.rows as f64 * spec.cell_size;
        assert!((spec.margin_x - ((area.width - span_x) / 2.0 + 20.0)).abs() < 1e-9);
        assert!((spec.margin_y - ((area.height - span_y) / 2.0 + 20.0)).abs() < 1e-9);
    }

    #[test]
    fn not_ready_on_collapsed_surface() {
        assert_eq!(
            layout(10, Dimensions::new(0.0, 100.0), 20.0),
            Err(SurfaceNotReady)
        );
        assert_eq!(
            layout(10, Dimensions::new(100.0, -3.0), 20.0),
            Err(SurfaceNotReady)
        );
    }

    #[test]
    fn cell_at_maps_interiors_and_rejects_margins() {
        // 10 cells in a square area lay out as 4 rows of 3, leaving two
        // positions in the last row uncovered.
        let spec = layout(10, Dimensions::new(40.0, 40.0), 0.0).unwrap();
        assert_eq!((spec.rows, spec.cols), (4, 3));

        for row in 0..spec.rows {
            for col in 0..spec.cols {
                let (x, y) = spec.cell_origin(row, col);
                let probe = spec.cell_at(x + spec.cell_size / 2.0, y + spec.cell_size / 2.0);
                let index = row * spec.cols + col;
                if index < spec.total_cells {
                    assert_eq!(probe, Some(index));
                } else {
                    assert_eq!(probe, None);
                }
            }
        }

        assert_eq!(spec.cell_at(-1.0, 5.0), None);
        assert_eq!(spec.cell_at(5.0, -1.0), None);
        assert_eq!(spec.cell_at(1000.0, 5.0), None);
    }
}
