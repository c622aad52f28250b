//! Form pane: every field rendered through one descriptor-driven code path.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use registry_core::{Field, FieldDescriptor, FieldKind, FormMode, FormSession};

use crate::presentation::theme::Theme;
use crate::state::{AppState, Focus};

/// Render the registration form, one line per field.
///
/// There are no per-field widgets: the line is built from the field's
/// descriptor, so adding a field to the catalog is all it takes to get it
/// on screen.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    session: &FormSession,
    state: &AppState,
    theme: &Theme,
) {
    let form_focused = state.focus == Focus::Form;

    let items: Vec<ListItem> = Field::all()
        .map(|field| {
            let focused = form_focused && state.focused_field == field;
            let line = field_line(
                &field.descriptor(),
                session.draft().value(field),
                focused,
                theme,
            );
            ListItem::new(line)
        })
        .collect();

    let title = match session.mode() {
        FormMode::Creating => " New Registration ",
        FormMode::Editing(_) => " Edit Registration ",
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.pane_border(form_focused))
            .title(title),
    );

    frame.render_widget(list, area);
}

/// Builds the display line for one field from its descriptor.
fn field_line(
    descriptor: &FieldDescriptor,
    value: &str,
    focused: bool,
    theme: &Theme,
) -> Line<'static> {
    let marker = if focused { "► " } else { "  " };
    let mut spans = vec![
        Span::styled(marker, theme.marker()),
        Span::styled(
            format!("{:<16}", descriptor.label),
            theme.field_label(focused),
        ),
    ];

    match descriptor.kind {
        FieldKind::Dropdown(_) => {
            if value.is_empty() {
                let placeholder = if focused { "< select an option >" } else { "-" };
                spans.push(Span::styled(placeholder.to_owned(), theme.placeholder()));
            } else if focused {
                spans.push(Span::styled(format!("< {value} >"), theme.field_value()));
            } else {
                spans.push(Span::styled(value.to_owned(), theme.field_value()));
            }
        }
        FieldKind::Text | FieldKind::Date => {
            if value.is_empty() && descriptor.kind == FieldKind::Date {
                spans.push(Span::styled("YYYY-MM-DD ".to_owned(), theme.placeholder()));
            } else {
                spans.push(Span::styled(value.to_owned(), theme.field_value()));
            }
            if focused {
                spans.push(Span::styled(" ".to_owned(), theme.cursor()));
            }
        }
    }

    Line::from(spans)
}
