//! Side panel with score, coins, distance, combo and active power-ups.

use runner_core::Snapshot;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Power-up timers are shown in seconds at the default tick rate.
const TICKS_PER_SECOND: f32 = 60.0;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    max_speed: f32,
    theme: &RatatuiTheme,
) {
    let stats = &snapshot.stats;
    let label = Style::default().fg(Color::Gray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        stat_line("Score", stats.score.to_string(), label, value),
        stat_line("Coins", stats.coins_collected.to_string(), label, value),
        stat_line("Distance", format!("{}m", stats.distance), label, value),
        stat_line(
            "Combo",
            format!("x{} (best x{})", stats.combo, stats.max_combo),
            label,
            value,
        ),
        Line::from(vec![
            Span::styled(format!("{:<9}", "Speed"), label),
            Span::styled(
                format!("{:.1}", stats.game_speed),
                theme.style_speed(stats.game_speed / max_speed.max(1.0)),
            ),
        ]),
        Line::from(""),
    ];

    let player = &snapshot.player;
    for (name, ticks, color) in [
        ("Shield", player.shield_ticks, Color::LightCyan),
        ("Magnet", player.magnet_ticks, Color::LightMagenta),
    ] {
        if ticks > 0 {
            lines.push(Line::from(vec![
                Span::styled(format!("{name:<9}"), Style::default().fg(color)),
                Span::styled(
                    format!("{:.1}s", ticks as f32 / TICKS_PER_SECOND),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]));
        }
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Run "));
    frame.render_widget(paragraph, area);
}

fn stat_line(name: &str, text: String, label: Style, value: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{name:<9}"), label),
        Span::styled(text, value),
    ])
}
