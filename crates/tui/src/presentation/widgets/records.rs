//! Roster pane: the list of committed registrations.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use registry_core::{Registration, RegistrationStore};

use crate::presentation::theme::Theme;
use crate::state::{AppState, Focus};

/// Render the roster of registered students.
///
/// The selected entry expands with contact details; an empty store renders
/// a hint instead of a list.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    store: &RegistrationStore,
    state: &AppState,
    theme: &Theme,
) {
    let focused = state.focus == Focus::Records;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.pane_border(focused))
        .title(" Registered Students ");

    if store.is_empty() {
        let empty_msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "No registrations yet.",
                Style::default().fg(Color::Gray),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Submit the form to add one",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )]),
        ])
        .alignment(Alignment::Center)
        .block(block);

        frame.render_widget(empty_msg, area);
        return;
    }

    let items: Vec<ListItem> = store
        .list()
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let is_selected = idx == state.selected_record;
            let prefix = if is_selected { "► " } else { "  " };

            let mut lines = vec![Line::from(vec![
                Span::styled(prefix.to_owned(), theme.marker()),
                Span::styled(
                    format!("{} {}", record.id, display_name(record)),
                    theme.record_title(is_selected),
                ),
            ])];
            if is_selected {
                if let Some(details) = detail_line(record) {
                    lines.push(Line::from(Span::styled(
                        format!("     {details}"),
                        theme.record_detail(),
                    )));
                }
            }

            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}

fn display_name(record: &Registration) -> String {
    if record.profile.name.is_empty() {
        "(unnamed)".to_owned()
    } else {
        record.profile.name.clone()
    }
}

/// Contact summary under the selected entry, `None` when there is nothing
/// to show.
fn detail_line(record: &Registration) -> Option<String> {
    let mut parts = Vec::new();
    if !record.profile.email.is_empty() {
        parts.push(record.profile.email.clone());
    }
    if !record.profile.phone.is_empty() {
        parts.push(record.profile.phone.clone());
    }
    if !record.profile.major.is_empty() {
        parts.push(record.profile.major.clone());
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" | "))
    }
}
