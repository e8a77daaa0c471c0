//! Messages widget displaying recent run events.

use client_frontend_core::{MessageEntry, MessageLog};
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::presentation::theme::RatatuiTheme;

/// Newest message at the bottom.
pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog, theme: &RatatuiTheme) {
    let visible = usize::from(area.height.saturating_sub(2));
    let items: Vec<ListItem> = messages
        .recent(visible)
        .map(|entry| ListItem::new(format_message(entry)).style(theme.style_message(entry.level)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Messages "))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

fn format_message(entry: &MessageEntry) -> String {
    match entry.tick {
        Some(tick) => format!("[{tick}] {}", entry.text),
        None => entry.text.clone(),
    }
}
