//! Title screen shown in the `Start` phase.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, best_score: u64, theme: &RatatuiTheme) {
    let hint = Style::default().fg(Color::Gray);
    let mut lines = vec![
        Line::from(""),
        Line::styled("LANE RUNNER", theme.title()),
        Line::from(""),
        Line::styled("Dodge trains, jump or slide past barriers,", hint),
        Line::styled("collect coins and keep the combo going.", hint),
        Line::from(""),
        Line::styled("S = shield   M = magnet   o = coin", hint),
        Line::from(""),
        Line::styled("Press Enter to run", Style::default().fg(Color::Yellow)),
    ];
    if best_score > 0 {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("Best this session: {best_score}"),
            Style::default().fg(Color::LightGreen),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(paragraph, area);
}
