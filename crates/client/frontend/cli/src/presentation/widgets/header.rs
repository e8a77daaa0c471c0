//! Header widget: title, tick and session best.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;
use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState, theme: &RatatuiTheme) {
    let (tick, phase) = app_state
        .snapshot
        .as_ref()
        .map(|s| (s.tick.0, s.phase.to_string()))
        .unwrap_or((0, "loading".to_string()));

    let line = Line::from(vec![
        Span::styled("LANE RUNNER", theme.title()),
        Span::raw(" | Tick: "),
        Span::styled(tick.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw(" | "),
        Span::styled(phase, Style::default().fg(Color::Magenta)),
        Span::raw(" | Best: "),
        Span::styled(
            app_state.best_score.to_string(),
            Style::default().fg(Color::LightGreen),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
