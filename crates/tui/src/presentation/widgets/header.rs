//! Header widget displaying the roster size and form mode.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use registry_core::{FormMode, FormSession, RegistrationStore};

/// Render the header panel with the registration count and current mode.
pub fn render(frame: &mut Frame, area: Rect, store: &RegistrationStore, session: &FormSession) {
    let mode_text = match session.mode() {
        FormMode::Creating => String::new(),
        FormMode::Editing(id) => format!(" [EDITING {id}]"),
    };

    let text = vec![Line::from(vec![
        Span::styled(
            "Rollcall",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Registered: "),
        Span::styled(
            store.len().to_string(),
            Style::default().fg(Color::LightGreen),
        ),
        Span::styled(
            mode_text,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title("College Registration"),
    );

    frame.render_widget(paragraph, area);
}
