//! Status log panel: outcomes of recent store operations.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::message::MessageLog;
use crate::presentation::theme::Theme;

/// Render the most recent status messages, newest at the bottom.
pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog, theme: &Theme) {
    let visible = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = messages
        .recent(visible)
        .map(|entry| ListItem::new(entry.text.clone()).style(theme.style_message(entry.level)))
        .collect();

    let log = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Status "),
        )
        .direction(ListDirection::BottomToTop);

    frame.render_widget(log, area);
}
