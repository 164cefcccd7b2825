//! Grid and animation rendering for the insaeng TUI.
//!
//! Draws the life-in-weeks grid and the looping home-screen fill animation
//! on top of the pure geometry and color code in `insaeng-core`.

mod fill;
mod grid;

pub use fill::{FillAnimation, INTRO_CELLS, TICK_MS};
pub use grid::render_weeks;

/// Horizontal padding, in terminal columns, kept around rendered grids.
pub(crate) const BASE_MARGIN: f64 = 1.0;

/// A terminal cell is roughly twice as tall as it is wide; layout runs in
/// square units where one column = 1 unit and one row = 2 units.
pub(crate) const ROW_UNITS: f64 = 2.0;
