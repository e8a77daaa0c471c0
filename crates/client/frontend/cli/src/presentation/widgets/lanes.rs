//! The three scrolling lanes.

use client_frontend_core::LaneGrid;
use runner_core::{Lane, Snapshot};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Draws one band per terminal row, lanes separated by rails.
pub fn render(frame: &mut Frame, area: Rect, snapshot: &Snapshot, theme: &RatatuiTheme) {
    let block = Block::default().borders(Borders::ALL).title(" Track ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width < 7 || inner.height == 0 {
        return;
    }

    let grid = LaneGrid::from_snapshot(snapshot, usize::from(inner.height));
    // Two rails between three lanes.
    let lane_width = usize::from((inner.width - 2) / 3).max(1);
    let rail = Span::styled("┊", Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = (0..grid.rows.len())
        .map(|row| {
            let mut spans = Vec::with_capacity(5);
            for (index, lane) in Lane::ALL.into_iter().enumerate() {
                if index > 0 {
                    spans.push(rail.clone());
                }
                let (glyph, style) = theme.render_cell(grid.cell(row, lane), &snapshot.player);
                spans.push(Span::styled(centered(glyph, lane_width), style));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Pads a glyph to the middle third of a lane so entities read as blocks.
fn centered(glyph: &str, width: usize) -> String {
    let body = (width / 3).max(1);
    let left = (width - body) / 2;
    let right = width - body - left;
    format!("{}{}{}", " ".repeat(left), glyph.repeat(body), " ".repeat(right))
}
