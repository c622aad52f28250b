//! Frame layout: header, form and roster panes, status log, footer.

use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};

use registry_core::{FormSession, RegistrationStore};

use crate::message::MessageLog;
use crate::presentation::terminal::Tui;
use crate::presentation::theme::Theme;
use crate::presentation::widgets;
use crate::state::AppState;

/// Everything one frame reads. Borrowed, never mutated.
pub struct RenderContext<'a> {
    pub store: &'a RegistrationStore,
    pub session: &'a FormSession,
    pub state: &'a AppState,
    pub messages: &'a MessageLog,
    pub status_panel_height: u16,
}

/// Draws one full frame.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = Theme::new();

    terminal.draw(|frame| {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                        // Header
                Constraint::Min(0),                           // Form | roster
                Constraint::Length(ctx.status_panel_height),  // Status log
                Constraint::Length(3),                        // Footer
            ])
            .split(frame.area());

        widgets::header::render(frame, rows[0], ctx.store, ctx.session);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[1]);

        widgets::form::render(frame, panes[0], ctx.session, ctx.state, &theme);
        widgets::records::render(frame, panes[1], ctx.store, ctx.state, &theme);
        widgets::status::render(frame, rows[2], ctx.messages, &theme);
        widgets::footer::render(frame, rows[3], ctx.state, ctx.session);
    })?;

    Ok(())
}
