//! Composes the widgets into a full frame.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use client_frontend_core::MessageLog;

use crate::presentation::{terminal::Tui, theme::RatatuiTheme, widgets};
use crate::state::{AppState, Screen};

/// Everything a frame needs.
pub struct RenderContext<'a> {
    pub app_state: &'a AppState,
    pub messages: &'a MessageLog,
    pub message_panel_height: u16,
    pub max_speed: f32,
}

/// Draw one frame.
///
/// - **Start**: title screen replaces the track
/// - **Running**: header, track + scoreboard, messages, footer
/// - **GameOver**: running layout frozen under a summary modal
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme;
    let screen = ctx.app_state.screen();

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                        // Header
                Constraint::Min(8),                           // Track + scoreboard
                Constraint::Length(ctx.message_panel_height), // Messages
                Constraint::Length(3),                        // Footer
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], ctx.app_state, &theme);

        match (&ctx.app_state.snapshot, screen) {
            (Some(snapshot), Screen::Running | Screen::GameOver) => {
                let body = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Min(21), Constraint::Length(26)])
                    .split(chunks[1]);
                widgets::lanes::render(frame, body[0], snapshot, &theme);
                widgets::scoreboard::render(frame, body[1], snapshot, ctx.max_speed, &theme);

                if screen == Screen::GameOver {
                    let area = centered_rect(50, 60, chunks[1]);
                    widgets::game_over::render(
                        frame,
                        area,
                        ctx.app_state.last_run.as_ref(),
                        ctx.app_state.best_score,
                    );
                }
            }
            _ => widgets::start_screen::render(frame, chunks[1], ctx.app_state.best_score, &theme),
        }

        widgets::messages::render(frame, chunks[2], ctx.messages, &theme);
        widgets::footer::render(frame, chunks[3], screen);
    })?;

    Ok(())
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
