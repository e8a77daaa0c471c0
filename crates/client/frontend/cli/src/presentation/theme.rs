//! Glyphs and colours for the terminal UI.

use client_frontend_core::{Cell, MessageLevel};
use runner_core::PlayerView;
use ratatui::style::{Color, Modifier, Style};

/// Consistent colour scheme for every widget.
#[derive(Debug, Default, Clone, Copy)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    /// Glyph and style for one lane cell. `player` picks the runner's pose.
    pub fn render_cell(&self, cell: Cell, player: &PlayerView) -> (&'static str, Style) {
        match cell {
            Cell::Empty => (" ", Style::default()),
            Cell::Particle => ("·", Style::default().fg(Color::Yellow).add_modifier(Modifier::DIM)),
            Cell::Coin => ("o", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Cell::Shield => ("S", Style::default().fg(Color::LightCyan).add_modifier(Modifier::BOLD)),
            Cell::Magnet => ("M", Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD)),
            Cell::Barrier => ("=", Style::default().fg(Color::LightRed)),
            Cell::Train => ("#", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Cell::Player => self.render_player(player),
        }
    }

    fn render_player(&self, player: &PlayerView) -> (&'static str, Style) {
        let glyph = if player.is_jumping {
            "^"
        } else if player.is_sliding {
            "_"
        } else {
            "@"
        };
        let color = if player.shield_ticks > 0 {
            Color::LightCyan
        } else if player.magnet_ticks > 0 {
            Color::LightMagenta
        } else {
            Color::LightGreen
        };
        (glyph, Style::default().fg(color).add_modifier(Modifier::BOLD))
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Success => Style::default().fg(Color::LightGreen),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    /// Speed gauge colour, from calm to frantic.
    pub fn style_speed(&self, fraction: f32) -> Style {
        let color = match (fraction * 100.0) as u32 {
            0..=33 => Color::Green,
            34..=66 => Color::Yellow,
            _ => Color::LightRed,
        };
        Style::default().fg(color)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }
}
