//! Modal summary drawn over the frozen track after a crash.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};
use runner_runtime::RunSummary;

pub fn render(frame: &mut Frame, area: Rect, summary: Option<&RunSummary>, best_score: u64) {
    let mut lines = vec![
        Line::styled(
            "GAME OVER",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    if let Some(run) = summary {
        lines.extend([
            Line::from(format!("Score     {}", run.score)),
            Line::from(format!("Coins     {}", run.coins)),
            Line::from(format!("Distance  {}m", run.distance)),
            Line::from(format!("Combo     x{}", run.max_combo)),
        ]);
        if run.score >= best_score && run.score > 0 {
            lines.push(Line::styled(
                "New session best!",
                Style::default().fg(Color::LightGreen),
            ));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "r to restart",
        Style::default().fg(Color::Yellow),
    ));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
