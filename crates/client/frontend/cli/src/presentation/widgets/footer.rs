//! Footer widget displaying context-sensitive key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};

use crate::state::Screen;

pub fn render(frame: &mut Frame, area: Rect, screen: Screen) {
    let text = match screen {
        Screen::Start => "[Enter] Run | [q/Esc] Quit",
        Screen::Running => {
            "[←/a →/d] Lane | [↑/w/Space] Jump | [↓/s] Slide | drag to swipe | [r] Restart | [q] Quit"
        }
        Screen::GameOver => "[r] Restart | [Enter] Run again | [q/Esc] Quit",
    };

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
