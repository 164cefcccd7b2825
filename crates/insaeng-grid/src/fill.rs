//! Looping white-to-green fill animation for the home screen.

use insaeng_core::{GridSpec, Rgb, ramp};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{BASE_MARGIN, ROW_UNITS};

/// Fixed delay between animation steps, in milliseconds.
pub const TICK_MS: u64 = 30;

/// Cells in the decorative intro row.
pub const INTRO_CELLS: usize = 23;

/// Interpolation steps from white to lived green.
const RAMP_STEPS: usize = 10;

/// Where the looping fill currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Stopped. Nothing pending, every cell blank.
    Idle,
    /// Animating `cell`, currently showing ramp stop `step`.
    Filling { cell: usize, step: usize },
}

/// State machine for the home-screen fill loop.
///
/// Cells fill left to right, one ramp stop per tick; when a cell's ramp is
/// exhausted the fill moves on, and after the last cell the row resets to
/// white and starts over. The loop never terminates on its own — stopping
/// is an explicit transition to `Idle` that drops the pending step.
#[derive(Debug)]
pub struct FillAnimation {
    /// Precomputed white-to-green stops, shared by every cell.
    ramp: Vec<Rgb>,
    phase: Phase,
    /// Elapsed-ms timestamp of the last accepted step.
    last_step_ms: u64,
}

impl FillAnimation {
    pub fn new() -> Self {
        Self {
            ramp: ramp::build(Rgb::WHITE, Rgb::LIVED_GREEN, RAMP_STEPS),
            phase: Phase::Idle,
            last_step_ms: 0,
        }
    }

    /// Begin the loop from the first cell. No-op while already running.
    pub fn start(&mut self, elapsed_ms: u64) {
        if self.is_running() {
            return;
        }
        self.restart(elapsed_ms);
    }

    /// Jump back to the first cell of a blank row.
    pub fn restart(&mut self, elapsed_ms: u64) {
        self.phase = Phase::Filling { cell: 0, step: 0 };
        self.last_step_ms = elapsed_ms;
    }

    /// Stop and blank the row.
    pub fn stop(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Filling { .. })
    }

    /// Advance one ramp step once a tick interval has passed.
    pub fn tick(&mut self, elapsed_ms: u64) {
        let Phase::Filling { cell, step } = self.phase else {
            return;
        };
        if elapsed_ms.saturating_sub(self.last_step_ms) < TICK_MS {
            return;
        }
        self.last_step_ms = elapsed_ms;
        self.phase = if step + 1 < self.ramp.len() {
            Phase::Filling { cell, step: step + 1 }
        } else if cell + 1 < INTRO_CELLS {
            Phase::Filling { cell: cell + 1, step: 0 }
        } else {
            // row complete: loop from a blank row
            Phase::Filling { cell: 0, step: 0 }
        };
    }

    /// Current fill color of `cell` in the intro row.
    pub fn cell_color(&self, cell: usize) -> Rgb {
        match self.phase {
            Phase::Idle => Rgb::WHITE,
            Phase::Filling { cell: active, step } => {
                if cell < active {
                    Rgb::LIVED_GREEN
                } else if cell == active {
                    self.ramp[step]
                } else {
                    Rgb::WHITE
                }
            }
        }
    }

    /// Render the intro row centered in `area`.
    ///
    /// Uses the same bounded-cell-size and centering math as the weeks grid,
    /// with the row/column split fixed at 1 x [`INTRO_CELLS`].
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let inner_w = area.width as f64 - 2.0 * BASE_MARGIN;
        let inner_h = area.height as f64 * ROW_UNITS - 2.0 * BASE_MARGIN;
        if inner_w <= 0.0 || inner_h <= 0.0 {
            // surface not sized yet; retry next frame
            return;
        }
        let cell_size = (inner_w / INTRO_CELLS as f64).min(inner_h);
        let spec = GridSpec {
            rows: 1,
            cols: INTRO_CELLS,
            cell_size,
            margin_x: (inner_w - INTRO_CELLS as f64 * cell_size) / 2.0 + BASE_MARGIN,
            margin_y: (inner_h - cell_size) / 2.0 + BASE_MARGIN,
            total_cells: INTRO_CELLS,
        };

        let lines: Vec<Line> = (0..area.height)
            .map(|y| {
                let spans: Vec<Span> = (0..area.width)
                    .map(|x| {
                        let px = x as f64 + 0.5;
                        let py = (y as f64 + 0.5) * ROW_UNITS;
                        match spec.cell_at(px, py) {
                            Some(cell) => {
                                let color = self.cell_color(cell);
                                let ch = if color == Rgb::WHITE { "░" } else { "█" };
                                Span::styled(ch, Style::new().fg(color.to_color()))
                            }
                            None => Span::raw(" "),
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl Default for FillAnimation {
    fn default() -> Self {
        Self::new()
    }
}
