//! Life-grid rendering, one square per week.

use insaeng_core::{Dimensions, Rgb, SurfaceNotReady, TOTAL_WEEKS, layout};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{BASE_MARGIN, ROW_UNITS};

/// Render the full life grid into `area`.
///
/// Geometry is recomputed from the area on every call — no caching, no
/// incremental diffing. A surface that has not been sized yet draws
/// nothing and is retried on the next frame.
pub fn render_weeks(frame: &mut Frame, area: Rect, weeks_lived: i64) {
    let dims = Dimensions::new(
        area.width as f64 - 2.0 * BASE_MARGIN,
        area.height as f64 * ROW_UNITS - 2.0 * BASE_MARGIN,
    );
    let spec = match layout(TOTAL_WEEKS as usize, dims, BASE_MARGIN) {
        Ok(spec) => spec,
        Err(SurfaceNotReady) => return,
    };

    let lines: Vec<Line> = (0..area.height)
        .map(|y| {
            let spans: Vec<Span> = (0..area.width)
                .map(|x| {
                    // probe the center of this terminal cell in layout units
                    let px = x as f64 + 0.5;
                    let py = (y as f64 + 0.5) * ROW_UNITS;
                    match spec.cell_at(px, py) {
                        Some(index) if (index as i64) < weeks_lived => {
                            Span::styled("█", Style::new().fg(Rgb::LIVED_GREEN.to_color()))
                        }
                        Some(_) => Span::styled("░", Style::new().fg(Rgb::WHITE.to_color())),
                        None => Span::raw(" "),
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
