//! Footer widget displaying context-sensitive key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use registry_core::FormSession;

use crate::state::{AppState, Focus};

/// Render the footer panel with key bindings help.
///
/// Displays context-sensitive controls based on the focused pane.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, session: &FormSession) {
    let text = match state.focus {
        Focus::Form => {
            let submit_hint = if session.is_editing() {
                "[Enter] Save | [Esc] Cancel edit | "
            } else {
                "[Enter] Submit | "
            };
            vec![Line::from(vec![
                Span::raw("[↑/↓] Field | "),
                Span::raw("[←/→] Option | "),
                Span::raw(submit_hint),
                Span::raw("[Tab] Roster | "),
                Span::raw("[Ctrl+G] Sample | "),
                Span::raw("[Ctrl+Q] Quit"),
            ])]
        }
        Focus::Records => vec![Line::from(vec![
            Span::raw("[↑/↓] Select | "),
            Span::raw("[Enter/e] Edit | "),
            Span::raw("[d/Del] Delete | "),
            Span::raw("[Tab/Esc] Form | "),
            Span::raw("[q] Quit"),
        ])],
    };

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
